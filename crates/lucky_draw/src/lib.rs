#![forbid(unsafe_code)]
//! lucky_draw: Lucky-number draws with a timed reveal, plus date-keyed daily content.
//!
//! Modules:
//! - sampling: distinct sorted draws from `1..=domain_max`
//! - reveal: draw session state machine, reveal schedule, clocks, events
//! - daily: date-keyed selection, content tables, simulated analysis flow
//! - facade: copy, export and share of a finished draw through injected collaborators
//! - view: mutually exclusive views and the controller that owns all transient state
//!
//! For examples and docs, see README.
pub mod daily;
pub mod error;
pub mod facade;
pub mod reveal;
pub mod sampling;
pub mod view;

/// Convenient re-exports for common types. Import with `use lucky_draw::prelude::*;`.
pub mod prelude {
    pub use crate::daily::{
        select, selection_index, AnalysisConfig, AnalysisFlow, AnalysisRequest, AnalysisStep,
        AnalysisText, Calendar, DailyPick, DreamSymbol, FixedCalendar, Fortune, LocalCalendar,
        ZodiacPoint, ANALYSIS_TEXTS, DREAM_SYMBOLS, FORTUNES, ZODIAC_POINTS,
    };
    pub use crate::error::{Error, Result};
    pub use crate::facade::{
        artifact_name, build_payload, copy_numbers, export_image, format_numbers, share,
        Clipboard, ExportArtifact, ExportConfig, ExportRequest, Rasterizer, RegionRef,
        ShareConfig, ShareLink, ShareOutcome, SharePayload, ShareSdk,
    };
    pub use crate::reveal::events::{
        EventSink, FilterSink, FnSink, RevealEvent, RevealEventKind, VecSink,
    };
    pub use crate::reveal::{
        BallBand, Clock, DrawConfig, DrawSession, DrawStatus, ManualClock, RevealFrame,
        RevealSequencer, RevealStep, SessionId, SystemClock, TriggerOutcome,
    };
    pub use crate::sampling::{sample, validate_draw, NumberSampling, PartialShuffleSampling};
    pub use crate::view::{ControllerConfig, ViewController, ViewKind};
}
