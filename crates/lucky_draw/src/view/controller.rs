//! Single owner of the draw session, the analysis flow and the daily picks.
//!
//! Every user action goes through [`ViewController`]. Switching views cancels
//! any running reveal and resets per-view results synchronously; nothing here
//! performs I/O.
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::daily::{
    AnalysisConfig, AnalysisFlow, AnalysisRequest, AnalysisStep, AnalysisText, Calendar,
    DailyPick, DreamSymbol, Fortune, LocalCalendar, ZodiacPoint, ANALYSIS_TEXTS, DREAM_SYMBOLS,
    FORTUNES, ZODIAC_POINTS,
};
use crate::error::{Error, Result};
use crate::facade::{
    copy_numbers, export_image, share, Clipboard, ExportArtifact, ExportConfig, Rasterizer,
    ShareConfig, ShareOutcome, ShareSdk,
};
use crate::reveal::events::EventSink;
use crate::reveal::{
    Clock, DrawConfig, DrawSession, DrawStatus, RevealSequencer, SystemClock, TriggerOutcome,
};
use crate::sampling::{NumberSampling, PartialShuffleSampling};
use crate::view::ViewKind;

/// Configuration of every component owned by the controller.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ControllerConfig {
    pub draw: DrawConfig,
    pub analysis: AnalysisConfig,
    pub export: ExportConfig,
    pub share: ShareConfig,
}

impl ControllerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draw(mut self, draw: DrawConfig) -> Self {
        self.draw = draw;
        self
    }

    pub fn with_analysis(mut self, analysis: AnalysisConfig) -> Self {
        self.analysis = analysis;
        self
    }

    pub fn with_export(mut self, export: ExportConfig) -> Self {
        self.export = export;
        self
    }

    pub fn with_share(mut self, share: ShareConfig) -> Self {
        self.share = share;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.draw.validate()?;
        self.export.validate()?;
        self.share.validate()?;
        Ok(())
    }
}

pub struct ViewController {
    config: ControllerConfig,
    view: ViewKind,
    sequencer: RevealSequencer,
    sampling: Box<dyn NumberSampling>,
    rng: StdRng,
    clock: Arc<dyn Clock>,
    calendar: Arc<dyn Calendar>,
    analysis: AnalysisFlow,
    fortune: DailyPick,
}

impl ViewController {
    /// Creates a controller on the draw view with the system clock, the local
    /// calendar and an entropy-seeded RNG.
    pub fn try_new(config: ControllerConfig) -> Result<Self> {
        config.validate()?;
        let calendar: Arc<dyn Calendar> = Arc::new(LocalCalendar);
        let fortune = DailyPick::compute(calendar.today(), FORTUNES);
        Ok(Self {
            sequencer: RevealSequencer::try_new(config.draw)?,
            analysis: AnalysisFlow::new(config.analysis),
            config,
            view: ViewKind::Draw,
            sampling: Box::new(PartialShuffleSampling),
            rng: StdRng::seed_from_u64(rand::rng().next_u64()),
            clock: Arc::new(SystemClock::new()),
            calendar,
            fortune,
        })
    }

    /// Replaces the clock driving reveal and analysis timing.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Replaces the date source and recomputes the daily pick.
    pub fn with_calendar(mut self, calendar: impl Calendar + 'static) -> Self {
        self.calendar = Arc::new(calendar);
        self.refresh_daily();
        self
    }

    pub fn with_sampling(mut self, sampling: impl NumberSampling + 'static) -> Self {
        self.sampling = Box::new(sampling);
        self
    }

    /// Makes draws reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn view(&self) -> ViewKind {
        self.view
    }

    pub fn session(&self) -> &DrawSession {
        self.sequencer.session()
    }

    pub fn status(&self) -> DrawStatus {
        self.sequencer.status()
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Earliest clock reading at which [`ViewController::tick`] has work to do.
    pub fn next_deadline(&self) -> Option<Duration> {
        match (self.sequencer.next_deadline(), self.analysis.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Switches view. Returns `false` if `view` is already active.
    pub fn switch_to(&mut self, view: ViewKind) -> bool {
        self.switch_to_with_events(view, &mut ())
    }

    pub fn switch_to_with_events(&mut self, view: ViewKind, sink: &mut dyn EventSink) -> bool {
        if view == self.view {
            return false;
        }
        let cancelled = self.sequencer.cancel(sink);
        self.analysis.reset();
        self.refresh_daily();
        debug!(
            "View {} -> {} (reveal cancelled: {}).",
            self.view, view, cancelled
        );
        self.view = view;
        true
    }

    /// Starts a draw unless one is already running.
    pub fn trigger_draw(&mut self) -> Result<TriggerOutcome> {
        self.trigger_draw_with_events(&mut ())
    }

    pub fn trigger_draw_with_events(&mut self, sink: &mut dyn EventSink) -> Result<TriggerOutcome> {
        let now = self.clock.now();
        self.sequencer
            .trigger(self.sampling.as_ref(), &mut self.rng, now, sink)
    }

    /// Applies everything due at the current clock reading. Returns the number
    /// of frames revealed.
    pub fn tick(&mut self) -> usize {
        self.tick_with_events(&mut ())
    }

    pub fn tick_with_events(&mut self, sink: &mut dyn EventSink) -> usize {
        let now = self.clock.now();
        let revealed = self.sequencer.advance(now, sink);
        if self.view == ViewKind::Analysis {
            self.analysis
                .poll(self.fortune.date, now, ANALYSIS_TEXTS.len());
        }
        revealed
    }

    fn finished_set(&self) -> Result<&[u32]> {
        self.sequencer
            .session()
            .finished_set()
            .ok_or(Error::NoFinishedDraw)
    }

    /// Copies the finished draw as `"n1, n2, ..."`.
    pub fn copy(&self, clipboard: &mut dyn Clipboard) -> Result<String> {
        copy_numbers(clipboard, self.finished_set()?)
    }

    /// Exports the finished draw through `rasterizer`.
    pub fn export(&self, rasterizer: &mut dyn Rasterizer) -> Result<ExportArtifact> {
        export_image(rasterizer, &self.config.export, self.finished_set()?)
    }

    /// Shares the finished draw, or a teaser when there is none.
    pub fn share(&self, sdk: Option<&mut dyn ShareSdk>) -> Result<ShareOutcome> {
        share(sdk, &self.config.share, self.finished_set().ok())
    }

    pub fn fortune_of_the_day(&self) -> Option<&'static Fortune> {
        self.fortune.get(FORTUNES)
    }

    pub fn dream_symbols(&self) -> &'static [DreamSymbol] {
        DREAM_SYMBOLS
    }

    pub fn zodiac_points(&self) -> &'static [ZodiacPoint] {
        ZODIAC_POINTS
    }

    pub fn analysis_step(&self) -> AnalysisStep {
        self.analysis.step()
    }

    /// Starts the analysis. Only the analysis view accepts a submit; elsewhere
    /// it is ignored and `Ok(false)` is returned.
    pub fn submit_analysis(&mut self, request: &AnalysisRequest) -> Result<bool> {
        if self.view != ViewKind::Analysis {
            debug!("Analysis submit ignored on the {} view.", self.view);
            return Ok(false);
        }
        self.analysis.submit(request, self.clock.now())?;
        Ok(true)
    }

    pub fn analysis_result(&self) -> Option<&'static AnalysisText> {
        self.analysis.result(ANALYSIS_TEXTS)
    }

    /// Date the current view's daily picks were computed for.
    pub fn today(&self) -> NaiveDate {
        self.fortune.date
    }

    fn refresh_daily(&mut self) {
        self.fortune = DailyPick::compute(self.calendar.today(), FORTUNES);
        info!(
            "Daily pick for {}: {:?}.",
            self.fortune.date, self.fortune.index
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daily::{select, FixedCalendar};
    use crate::facade::{ExportRequest, SharePayload};
    use crate::reveal::events::{RevealEventKind, VecSink};
    use crate::reveal::ManualClock;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn controller(clock: &ManualClock) -> ViewController {
        ViewController::try_new(ControllerConfig::default())
            .unwrap()
            .with_clock(clock.clone())
            .with_calendar(FixedCalendar(date(2026, 10, 19)))
            .with_seed(2025)
    }

    fn finish_draw(ctl: &mut ViewController, clock: &ManualClock) {
        ctl.trigger_draw().unwrap();
        clock.advance(ctl.config().draw.reveal_duration());
        ctl.tick();
        assert_eq!(ctl.status(), DrawStatus::Done);
    }

    struct MemoryClipboard(String);

    impl Clipboard for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            self.0 = text.to_owned();
            Ok(())
        }
    }

    struct NullRasterizer;

    impl Rasterizer for NullRasterizer {
        fn rasterize(&mut self, request: &ExportRequest<'_>) -> Result<Vec<u8>> {
            Ok(request.numbers.iter().map(|&n| n as u8).collect())
        }
    }

    struct ReadySdk(Vec<SharePayload>);

    impl ShareSdk for ReadySdk {
        fn is_available(&self) -> bool {
            true
        }

        fn invoke(&mut self, payload: &SharePayload) -> Result<()> {
            self.0.push(payload.clone());
            Ok(())
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ControllerConfig::new().with_draw(DrawConfig::new().with_domain(3, 6));
        assert!(matches!(
            ViewController::try_new(config),
            Err(Error::InvalidDrawParameters { .. })
        ));
    }

    #[test]
    fn starts_idle_on_draw_view() {
        let clock = ManualClock::new();
        let ctl = controller(&clock);
        assert_eq!(ctl.view(), ViewKind::Draw);
        assert_eq!(ctl.status(), DrawStatus::Idle);
        assert_eq!(ctl.next_deadline(), None);
    }

    #[test]
    fn draw_reveals_over_time() {
        let clock = ManualClock::new();
        let mut ctl = controller(&clock);
        let mut sink = VecSink::new();
        ctl.trigger_draw_with_events(&mut sink).unwrap();
        assert_eq!(ctl.status(), DrawStatus::Revealing);

        clock.advance(ms(1200));
        assert_eq!(ctl.tick_with_events(&mut sink), 3);
        clock.advance(ms(2000));
        assert_eq!(ctl.tick_with_events(&mut sink), 3);
        assert_eq!(ctl.status(), DrawStatus::Done);

        let frames = sink.frames();
        assert_eq!(
            frames.iter().map(|f| f.value).collect::<Vec<_>>(),
            ctl.session().final_set
        );
    }

    #[test]
    fn rapid_double_trigger_is_ignored() {
        let clock = ManualClock::new();
        let mut ctl = controller(&clock);
        let first = ctl.trigger_draw().unwrap();
        let before = ctl.session().clone();
        let second = ctl.trigger_draw().unwrap();
        assert!(matches!(first, TriggerOutcome::Started(_)));
        assert_eq!(second, TriggerOutcome::Ignored(DrawStatus::Revealing));
        assert_eq!(ctl.session(), &before);
    }

    #[test]
    fn view_switch_mid_reveal_cancels_and_resets() {
        let clock = ManualClock::new();
        let mut ctl = controller(&clock);
        let mut sink = VecSink::new();
        ctl.trigger_draw_with_events(&mut sink).unwrap();
        clock.advance(ms(900));
        assert_eq!(ctl.tick_with_events(&mut sink), 2);

        assert!(ctl.switch_to_with_events(ViewKind::Dream, &mut sink));
        assert_eq!(ctl.view(), ViewKind::Dream);
        assert_eq!(ctl.status(), DrawStatus::Idle);
        assert_eq!(ctl.next_deadline(), None);

        clock.advance(ms(60_000));
        assert_eq!(ctl.tick_with_events(&mut sink), 0);
        assert_eq!(sink.frames().len(), 2);
        assert_eq!(sink.count_of(RevealEventKind::SessionCancelled), 1);
        assert_eq!(ctl.status(), DrawStatus::Idle);
    }

    #[test]
    fn switching_to_same_view_changes_nothing() {
        let clock = ManualClock::new();
        let mut ctl = controller(&clock);
        ctl.trigger_draw().unwrap();
        assert!(!ctl.switch_to(ViewKind::Draw));
        assert_eq!(ctl.status(), DrawStatus::Revealing);
    }

    #[test]
    fn view_switch_discards_finished_draw() {
        let clock = ManualClock::new();
        let mut ctl = controller(&clock);
        finish_draw(&mut ctl, &clock);
        ctl.switch_to(ViewKind::Guide);
        ctl.switch_to(ViewKind::Draw);
        assert_eq!(ctl.status(), DrawStatus::Idle);
        assert!(ctl.session().final_set.is_empty());
        assert!(matches!(
            ctl.copy(&mut MemoryClipboard(String::new())),
            Err(Error::NoFinishedDraw)
        ));
    }

    #[test]
    fn actions_need_a_finished_draw() {
        let clock = ManualClock::new();
        let mut ctl = controller(&clock);
        ctl.trigger_draw().unwrap();
        assert!(matches!(
            ctl.copy(&mut MemoryClipboard(String::new())),
            Err(Error::NoFinishedDraw)
        ));
        assert!(matches!(
            ctl.export(&mut NullRasterizer),
            Err(Error::NoFinishedDraw)
        ));
    }

    #[test]
    fn done_actions_hand_off_the_final_set() {
        let clock = ManualClock::new();
        let mut ctl = controller(&clock);
        finish_draw(&mut ctl, &clock);
        let numbers = ctl.session().final_set.clone();

        let mut clipboard = MemoryClipboard(String::new());
        let text = ctl.copy(&mut clipboard).unwrap();
        assert_eq!(clipboard.0, text);
        assert_eq!(text.split(", ").count(), 6);

        let artifact = ctl.export(&mut NullRasterizer).unwrap();
        assert_eq!(
            artifact.bytes,
            numbers.iter().map(|&n| n as u8).collect::<Vec<_>>()
        );
        assert!(artifact.file_name.starts_with("lucky-numbers-"));

        let mut sdk = ReadySdk(Vec::new());
        assert_eq!(ctl.share(Some(&mut sdk)).unwrap(), ShareOutcome::Sent);
        assert!(sdk.0[0].title.contains(&text));
    }

    #[test]
    fn export_without_region_reports_failure() {
        let clock = ManualClock::new();
        let config =
            ControllerConfig::new().with_export(ExportConfig::new().with_region(None));
        let mut ctl = ViewController::try_new(config)
            .unwrap()
            .with_clock(clock.clone())
            .with_seed(1);
        finish_draw(&mut ctl, &clock);
        assert!(matches!(
            ctl.export(&mut NullRasterizer),
            Err(Error::ExportFailure(_))
        ));
    }

    #[test]
    fn share_without_sdk_is_skipped() {
        let clock = ManualClock::new();
        let ctl = controller(&clock);
        assert_eq!(ctl.share(None).unwrap(), ShareOutcome::Skipped);
    }

    #[test]
    fn fortune_is_selected_by_date() {
        let clock = ManualClock::new();
        let ctl = controller(&clock);
        assert_eq!(ctl.today(), date(2026, 10, 19));
        assert_eq!(
            ctl.fortune_of_the_day(),
            select(date(2026, 10, 19), FORTUNES)
        );
        assert_eq!(ctl.dream_symbols().len(), 3);
        assert_eq!(ctl.zodiac_points().len(), 4);
    }

    #[test]
    fn analysis_submit_outside_analysis_view_is_ignored() {
        let clock = ManualClock::new();
        let mut ctl = controller(&clock);
        let request = AnalysisRequest::new(date(1995, 7, 14));

        for view in [ViewKind::Draw, ViewKind::Dream, ViewKind::Guide] {
            ctl.switch_to(view);
            assert!(!ctl.submit_analysis(&request).unwrap());
            assert!(!ctl.submit_analysis(&AnalysisRequest::default()).unwrap());
            assert_eq!(ctl.analysis_step(), AnalysisStep::Input);
            assert_eq!(ctl.next_deadline(), None);
        }

        clock.advance(ms(5_000));
        ctl.tick();
        assert!(ctl.analysis_result().is_none());
    }

    #[test]
    fn analysis_completes_then_resets_on_switch() {
        let clock = ManualClock::new();
        let mut ctl = controller(&clock);
        ctl.switch_to(ViewKind::Analysis);

        assert!(matches!(
            ctl.submit_analysis(&AnalysisRequest::default()),
            Err(Error::MissingRequiredInput { .. })
        ));
        assert_eq!(ctl.analysis_step(), AnalysisStep::Input);

        assert!(ctl
            .submit_analysis(&AnalysisRequest::new(date(1995, 7, 14)))
            .unwrap());
        assert_eq!(ctl.next_deadline(), Some(ms(1500)));
        clock.advance(ms(1500));
        ctl.tick();
        assert_eq!(
            ctl.analysis_result(),
            select(date(2026, 10, 19), ANALYSIS_TEXTS)
        );

        ctl.switch_to(ViewKind::Draw);
        assert_eq!(ctl.analysis_step(), AnalysisStep::Input);
        assert!(ctl.analysis_result().is_none());
    }
}
