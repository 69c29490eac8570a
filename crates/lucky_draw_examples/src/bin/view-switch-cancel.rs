use std::time::Duration;

use lucky_draw::prelude::*;
use lucky_draw_examples::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let clock = ManualClock::new();
    let mut controller = ViewController::try_new(ControllerConfig::default())?
        .with_clock(clock.clone())
        .with_seed(7);
    let mut log = VecSink::new();

    controller.trigger_draw_with_events(&mut log)?;
    clock.advance(Duration::from_millis(900));
    controller.tick_with_events(&mut log);
    println!(
        "before switch: {:?}, revealed {:?}",
        controller.status(),
        controller.session().revealed().collect::<Vec<_>>()
    );

    // Leaving the draw view drops the remaining frames and the settle step.
    controller.switch_to_with_events(ViewKind::Guide, &mut log);
    clock.advance(Duration::from_secs(10));
    let late = controller.tick_with_events(&mut log);
    println!(
        "after switch: {:?}, late frames {late}, deadline {:?}",
        controller.status(),
        controller.next_deadline()
    );

    for event in log.as_slice() {
        println!("  {event:?}");
    }

    Ok(())
}
