use lucky_draw::prelude::*;
use lucky_draw_examples::{
    init_tracing, save_artifact, ConsoleShare, PngRasterizer, RenderConfig, StdoutClipboard,
};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Manual clock: jump straight to the end of the reveal.
    let clock = ManualClock::new();
    let config = ControllerConfig::new().with_export(
        ExportConfig::new()
            .with_scale(3.0)
            .with_background([26, 26, 26]),
    );
    let mut controller = ViewController::try_new(config)?
        .with_clock(clock.clone())
        .with_seed(2025);

    controller.trigger_draw()?;
    clock.advance(controller.config().draw.reveal_duration());
    controller.tick();

    let mut clipboard = StdoutClipboard::default();
    controller.copy(&mut clipboard)?;

    let mut rasterizer = PngRasterizer::new(RenderConfig::new().with_ball_radius(28.0));
    let artifact = controller.export(&mut rasterizer)?;
    save_artifact(&artifact, ".")?;

    let mut sdk = ConsoleShare::default();
    let outcome = controller.share(Some(&mut sdk))?;
    println!("share: {outcome:?}");

    Ok(())
}
