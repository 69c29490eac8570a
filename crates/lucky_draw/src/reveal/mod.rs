//! Timed, cancellable reveal of a finished draw.
//!
//! A draw runs through [`DrawStatus::Drawing`] (the final set is computed by a
//! [`crate::sampling::NumberSampling`] strategy), [`DrawStatus::Revealing`]
//! (one [`RevealFrame`] per frame interval) and [`DrawStatus::Done`] after a
//! short settle delay. The host drives time by calling
//! [`RevealSequencer::advance`] with the current [`Clock`] reading; nothing in
//! this module sleeps or spawns.
pub mod clock;
pub mod events;
pub mod schedule;
pub mod sequencer;
pub mod session;

pub use clock::{Clock, ManualClock, SystemClock};
pub use schedule::{Schedule, Scheduled};
pub use sequencer::{DrawConfig, RevealSequencer, RevealStep, TriggerOutcome};
pub use session::{BallBand, DrawSession, DrawStatus, RevealFrame, SessionId};
