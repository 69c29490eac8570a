use std::thread;

use lucky_draw::prelude::*;
use lucky_draw_examples::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Real clock: frames appear every 400 ms, the draw settles 800 ms later.
    let mut controller = ViewController::try_new(ControllerConfig::default())?;
    if let Some(seed) = std::env::args().nth(1) {
        controller = controller.with_seed(seed.parse()?);
    }

    let printer = FnSink::new(|event: RevealEvent| match event {
        RevealEvent::FrameRevealed { frame, .. } => {
            println!(
                "  ball {} -> {:>2} ({:?}) at {:?}",
                frame.index + 1,
                frame.value,
                frame.band(),
                frame.emitted_at
            );
        }
        RevealEvent::StatusChanged { from, to, .. } => {
            println!("{from:?} -> {to:?} (button: {})", to.label());
        }
        RevealEvent::SessionFinished { final_set, .. } => {
            println!("Lucky numbers: {}", format_numbers(&final_set));
        }
        RevealEvent::TriggerIgnored { status, .. } => {
            println!("(ignored: already {status:?})");
        }
        _ => {}
    });
    // Only build the events the printer shows.
    let mut printer = FilterSink::new(
        printer,
        [
            RevealEventKind::FrameRevealed,
            RevealEventKind::StatusChanged,
            RevealEventKind::SessionFinished,
            RevealEventKind::TriggerIgnored,
        ],
    );

    controller.trigger_draw_with_events(&mut printer)?;

    // A second press while revealing is ignored.
    let outcome = controller.trigger_draw_with_events(&mut printer)?;
    println!("second trigger: {outcome:?}");

    while let Some(deadline) = controller.next_deadline() {
        let now = controller.now();
        if deadline > now {
            thread::sleep(deadline - now);
        }
        controller.tick_with_events(&mut printer);
    }

    Ok(())
}
