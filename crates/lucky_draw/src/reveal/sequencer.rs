//! Draw-and-reveal state machine.
//!
//! [`RevealSequencer`] owns one [`DrawSession`] at a time and a [`Schedule`] of
//! pending reveal steps. Transitions:
//!
//! - `Idle | Done --trigger--> Drawing --> Revealing`
//! - `Revealing --last frame + settle delay--> Done`
//! - `any --cancel--> Idle`
//!
//! A trigger while `Drawing` or `Revealing` is ignored, not queued.
use std::time::Duration;

use rand::RngCore;
use tracing::{debug, info, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::reveal::events::{EventSink, RevealEvent, RevealEventKind};
use crate::reveal::schedule::{Schedule, Scheduled};
use crate::reveal::session::{DrawSession, DrawStatus, RevealFrame, SessionId};
use crate::sampling::{validate_draw, NumberSampling};

pub const DEFAULT_DOMAIN_MAX: u32 = 45;
pub const DEFAULT_COUNT: u32 = 6;
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(400);
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(800);

/// Shape and timing of a draw.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DrawConfig {
    /// Largest number that can be drawn; the domain is `1..=domain_max`.
    pub domain_max: u32,
    /// How many distinct numbers one draw yields.
    pub count: u32,
    /// Delay between consecutive reveal frames. Must be > 0.
    pub frame_interval: Duration,
    /// Delay between the last frame and the session becoming done.
    pub settle_delay: Duration,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            domain_max: DEFAULT_DOMAIN_MAX,
            count: DEFAULT_COUNT,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

impl DrawConfig {
    /// Creates the default 6-of-45 configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the domain size and the number of values drawn.
    pub fn with_domain(mut self, domain_max: u32, count: u32) -> Self {
        self.domain_max = domain_max;
        self.count = count;
        self
    }

    /// Sets the delay between reveal frames.
    pub fn with_frame_interval(mut self, frame_interval: Duration) -> Self {
        self.frame_interval = frame_interval;
        self
    }

    /// Sets the delay between the last frame and completion.
    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }

    /// Time from trigger to [`DrawStatus::Done`], saturating at [`Duration::MAX`].
    pub fn reveal_duration(&self) -> Duration {
        self.frame_interval
            .saturating_mul(self.count)
            .saturating_add(self.settle_delay)
    }

    /// Time from trigger to [`DrawStatus::Done`], or `None` if it overflows.
    pub fn checked_reveal_duration(&self) -> Option<Duration> {
        self.frame_interval
            .checked_mul(self.count)?
            .checked_add(self.settle_delay)
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        validate_draw(self.domain_max, self.count)?;
        if self.frame_interval.is_zero() {
            return Err(Error::InvalidConfig("frame_interval must be > 0".into()));
        }
        if self.checked_reveal_duration().is_none() {
            return Err(Error::InvalidConfig(
                "frame_interval * count + settle_delay overflows".into(),
            ));
        }
        Ok(())
    }
}

/// A pending step of the reveal schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    /// Reveal `final_set[index]`.
    Frame { index: usize },
    /// Settle delay elapsed; the session becomes done.
    Settle,
}

/// Result of a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A new session started.
    Started(SessionId),
    /// A session was busy in the given status; nothing changed.
    Ignored(DrawStatus),
}

pub struct RevealSequencer {
    config: DrawConfig,
    session: DrawSession,
    schedule: Schedule<RevealStep>,
    started_at: Duration,
    next_id: u64,
}

impl RevealSequencer {
    pub fn try_new(config: DrawConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    pub fn new(config: DrawConfig) -> Self {
        debug_assert!(
            config.count >= 1 && config.count <= config.domain_max,
            "count must be within 1..=domain_max"
        );
        debug_assert!(!config.frame_interval.is_zero(), "frame_interval must be > 0");
        Self::build(config)
    }

    fn build(config: DrawConfig) -> Self {
        Self {
            session: DrawSession::idle(config.domain_max, config.count),
            config,
            schedule: Schedule::new(),
            started_at: Duration::ZERO,
            next_id: 0,
        }
    }

    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    pub fn session(&self) -> &DrawSession {
        &self.session
    }

    pub fn status(&self) -> DrawStatus {
        self.session.status
    }

    pub fn is_busy(&self) -> bool {
        self.session.status.is_busy()
    }

    /// Clock reading at which the next pending step becomes due.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.schedule.next_due()
    }

    pub fn pending_steps(&self) -> usize {
        self.schedule.len()
    }

    /// Starts a new session unless one is busy.
    ///
    /// The final set is drawn and checked before any state changes, so a
    /// failing sampler leaves the current session untouched.
    pub fn trigger(
        &mut self,
        sampling: &dyn NumberSampling,
        rng: &mut dyn RngCore,
        now: Duration,
        sink: &mut dyn EventSink,
    ) -> Result<TriggerOutcome> {
        let status = self.session.status;
        if status.is_busy() {
            debug!(
                "Trigger ignored: session {} is {:?}.",
                self.session.id, status
            );
            if sink.wants(RevealEventKind::TriggerIgnored) {
                sink.send(RevealEvent::TriggerIgnored {
                    session: self.session.id,
                    status,
                });
            }
            return Ok(TriggerOutcome::Ignored(status));
        }

        let DrawConfig {
            domain_max, count, ..
        } = self.config;
        validate_draw(domain_max, count)?;
        let settle_at = self
            .config
            .checked_reveal_duration()
            .and_then(|d| now.checked_add(d))
            .ok_or_else(|| {
                Error::InvalidConfig(format!("reveal started at {now:?} overflows the clock"))
            })?;
        let final_set = sampling.generate(domain_max, count, rng)?;
        check_draw(&final_set, domain_max, count)?;

        self.schedule.cancel();
        self.next_id += 1;
        let id = SessionId(self.next_id);
        self.session = DrawSession::idle(domain_max, count);
        self.session.id = id;
        self.started_at = now;

        if sink.wants(RevealEventKind::SessionStarted) {
            sink.send(RevealEvent::SessionStarted {
                session: id,
                at: now,
            });
        }
        self.transition(status, DrawStatus::Drawing, sink);
        self.session.final_set = final_set;
        self.transition(DrawStatus::Drawing, DrawStatus::Revealing, sink);

        for index in 0..count as usize {
            self.schedule
                .push_at(self.frame_due(index), RevealStep::Frame { index });
        }
        self.schedule.push_at(settle_at, RevealStep::Settle);

        info!(
            "Session {}: revealing {} of {} over {:?}.",
            id,
            count,
            domain_max,
            self.config.reveal_duration()
        );
        Ok(TriggerOutcome::Started(id))
    }

    /// Applies every step due at `now`, in order. Returns the number of frames revealed.
    ///
    /// Frames carry their scheduled time, not `now`, so a late poll still yields
    /// strictly increasing timestamps.
    pub fn advance(&mut self, now: Duration, sink: &mut dyn EventSink) -> usize {
        let before = self.session.frames.len();
        for scheduled in self.schedule.drain_due(now) {
            self.apply(&scheduled, sink);
        }
        self.session.frames.len().saturating_sub(before)
    }

    /// Removes and returns the steps due at `now` without applying them.
    ///
    /// For hosts that hand steps to their own timers; pass them back through
    /// [`RevealSequencer::apply`].
    pub fn take_due(&mut self, now: Duration) -> Vec<Scheduled<RevealStep>> {
        self.schedule.drain_due(now)
    }

    /// Applies one step. Steps queued before the last cancel or trigger are
    /// rejected. Returns whether the step changed the session.
    ///
    /// Steps may arrive in any order. A frame or the settle step first reveals
    /// every earlier frame still missing, so a finished session always holds
    /// the whole final set; frames already revealed that way are skipped.
    pub fn apply(&mut self, scheduled: &Scheduled<RevealStep>, sink: &mut dyn EventSink) -> bool {
        if !self.schedule.is_current(scheduled) {
            debug!(
                "Dropping stale {:?} from generation {}.",
                scheduled.step, scheduled.generation
            );
            return false;
        }
        if self.session.status != DrawStatus::Revealing {
            return false;
        }

        match scheduled.step {
            RevealStep::Frame { index } => {
                if index >= self.session.final_set.len() {
                    warn!("Session {}: no value at index {}.", self.session.id, index);
                    return false;
                }
                if index < self.session.frames.len() {
                    debug!("Session {}: frame {} already revealed.", self.session.id, index);
                    return false;
                }
                if index > self.session.frames.len() {
                    self.report_early(index, sink);
                }
                self.reveal_through(index, sink);
                true
            }
            RevealStep::Settle => {
                let last = self.session.final_set.len().saturating_sub(1);
                if self.session.frames.len() <= last {
                    self.report_early(self.session.final_set.len(), sink);
                    self.reveal_through(last, sink);
                }
                self.transition(DrawStatus::Revealing, DrawStatus::Done, sink);
                info!(
                    "Session {} done: {:?}.",
                    self.session.id, self.session.final_set
                );
                if sink.wants(RevealEventKind::SessionFinished) {
                    sink.send(RevealEvent::SessionFinished {
                        session: self.session.id,
                        final_set: self.session.final_set.clone(),
                    });
                }
                true
            }
        }
    }

    /// Stops any pending step and resets the session to idle.
    ///
    /// Returns `false` if there was nothing to cancel.
    pub fn cancel(&mut self, sink: &mut dyn EventSink) -> bool {
        let status = self.session.status;
        if status == DrawStatus::Idle && self.schedule.is_empty() {
            return false;
        }

        let pending_dropped = self.schedule.cancel();
        let frames_emitted = self.session.frames.len();
        self.session.reset();
        debug!(
            "Session {} cancelled in {:?}: {} frames shown, {} steps dropped.",
            self.session.id, status, frames_emitted, pending_dropped
        );

        if sink.wants(RevealEventKind::SessionCancelled) {
            sink.send(RevealEvent::SessionCancelled {
                session: self.session.id,
                status,
                frames_emitted,
                pending_dropped,
            });
        }
        if status != DrawStatus::Idle && sink.wants(RevealEventKind::StatusChanged) {
            sink.send(RevealEvent::StatusChanged {
                session: self.session.id,
                from: status,
                to: DrawStatus::Idle,
            });
        }
        true
    }

    /// Due time of frame `index` in the current session.
    fn frame_due(&self, index: usize) -> Duration {
        self.started_at + self.config.frame_interval * (index as u32 + 1)
    }

    /// Reveals every missing frame up to and including `last`, in index order.
    fn reveal_through(&mut self, last: usize, sink: &mut dyn EventSink) {
        while self.session.frames.len() <= last {
            let index = self.session.frames.len();
            let Some(&value) = self.session.final_set.get(index) else {
                return;
            };
            let frame = RevealFrame {
                index,
                value,
                emitted_at: self.frame_due(index),
            };
            self.session.frames.push(frame);
            debug!("Session {}: frame {} = {}.", self.session.id, index, value);
            if sink.wants(RevealEventKind::FrameRevealed) {
                sink.send(RevealEvent::FrameRevealed {
                    session: self.session.id,
                    frame,
                });
            }
        }
    }

    fn report_early(&self, position: usize, sink: &mut dyn EventSink) {
        let expected = self.session.frames.len();
        warn!(
            "Session {}: step for position {} arrived before frame {}; revealing in order.",
            self.session.id, position, expected
        );
        if sink.wants(RevealEventKind::Warning) {
            sink.send(RevealEvent::Warning {
                context: format!("session:{}", self.session.id),
                message: format!("Step {position} arrived before frame {expected}"),
            });
        }
    }

    fn transition(&mut self, from: DrawStatus, to: DrawStatus, sink: &mut dyn EventSink) {
        self.session.status = to;
        if sink.wants(RevealEventKind::StatusChanged) {
            sink.send(RevealEvent::StatusChanged {
                session: self.session.id,
                from,
                to,
            });
        }
    }
}

/// Rejects sampler output that breaks the draw invariant.
fn check_draw(draw: &[u32], domain_max: u32, count: u32) -> Result<()> {
    let ascending = draw.windows(2).all(|w| w[0] < w[1]);
    let in_range = draw.iter().all(|n| (1..=domain_max).contains(n));
    if draw.len() != count as usize || !ascending || !in_range {
        return Err(Error::Other(format!(
            "sampler returned an invalid draw for {count} of {domain_max}: {draw:?}"
        )));
    }
    Ok(())
}
