use chrono::NaiveDate;
use lucky_draw::prelude::*;
use lucky_draw_examples::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let clock = ManualClock::new();
    let mut controller = ViewController::try_new(ControllerConfig::default())?
        .with_clock(clock.clone());

    println!("Today is {}.", controller.today());
    if let Some(fortune) = controller.fortune_of_the_day() {
        println!("{}\n  {}\n  Tip: {}", fortune.title, fortune.body, fortune.tip);
    }

    controller.switch_to(ViewKind::Dream);
    println!("\n{}", ViewKind::Dream);
    for symbol in controller.dream_symbols() {
        println!("  {} {}: {}", symbol.icon, symbol.title, symbol.meaning);
    }

    controller.switch_to(ViewKind::Guide);
    println!("\n{}", ViewKind::Guide);
    for point in controller.zodiac_points() {
        println!(
            "  {:<28} numbers {:?}, colour {}",
            point.animals.join(" / "),
            point.numbers,
            point.color
        );
    }

    controller.switch_to(ViewKind::Analysis);
    println!("\n{}", ViewKind::Analysis);
    if let Err(e) = controller.submit_analysis(&AnalysisRequest::default()) {
        println!("  rejected: {e}");
    }
    let birth = NaiveDate::from_ymd_opt(1990, 5, 4).ok_or_else(|| anyhow::anyhow!("bad date"))?;
    controller.submit_analysis(&AnalysisRequest::new(birth).with_name("Guest"))?;
    println!("  {:?}", controller.analysis_step());

    while let Some(deadline) = controller.next_deadline() {
        clock.set(deadline);
        controller.tick();
    }
    if let Some(result) = controller.analysis_result() {
        println!("  {} ({}/100)\n  {}", result.headline, result.score, result.detail);
    }

    Ok(())
}
