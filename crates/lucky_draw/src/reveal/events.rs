//! Event types and sinks for observing draw sessions.
//!
//! This module defines [`RevealEvent`] and the sinks used to collect, filter
//! or forward events while a [`crate::reveal::RevealSequencer`] draws,
//! reveals, finishes or cancels a session.
use std::time::Duration;

use crate::reveal::session::{DrawStatus, RevealFrame, SessionId};

/// Describes events emitted by the reveal sequencer.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum RevealEvent {
    /// Emitted when a trigger starts a new session.
    SessionStarted {
        /// The new session.
        session: SessionId,
        /// Clock reading at the trigger.
        at: Duration,
    },

    /// Emitted on every status transition of a session.
    StatusChanged {
        session: SessionId,
        from: DrawStatus,
        to: DrawStatus,
    },

    /// Emitted when one number is revealed.
    FrameRevealed {
        session: SessionId,
        frame: RevealFrame,
    },

    /// Emitted when the settle delay after the last frame has passed.
    SessionFinished {
        session: SessionId,
        /// The complete sorted draw.
        final_set: Vec<u32>,
    },

    /// Emitted when a running or finished session is cancelled back to idle.
    SessionCancelled {
        session: SessionId,
        /// Status the session was in when cancelled.
        status: DrawStatus,
        /// Frames already revealed before the cancel.
        frames_emitted: usize,
        /// Scheduled steps dropped by the cancel.
        pending_dropped: usize,
    },

    /// Emitted when a trigger arrives while a session is busy.
    TriggerIgnored {
        session: SessionId,
        status: DrawStatus,
    },

    /// Non-fatal warning.
    Warning {
        /// Context string (e.g. session id).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// Discriminant of [`RevealEvent`] used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealEventKind {
    SessionStarted,
    StatusChanged,
    FrameRevealed,
    SessionFinished,
    SessionCancelled,
    TriggerIgnored,
    Warning,
}

impl RevealEvent {
    pub fn kind(&self) -> RevealEventKind {
        match self {
            RevealEvent::SessionStarted { .. } => RevealEventKind::SessionStarted,
            RevealEvent::StatusChanged { .. } => RevealEventKind::StatusChanged,
            RevealEvent::FrameRevealed { .. } => RevealEventKind::FrameRevealed,
            RevealEvent::SessionFinished { .. } => RevealEventKind::SessionFinished,
            RevealEvent::SessionCancelled { .. } => RevealEventKind::SessionCancelled,
            RevealEvent::TriggerIgnored { .. } => RevealEventKind::TriggerIgnored,
            RevealEvent::Warning { .. } => RevealEventKind::Warning,
        }
    }
}

/// A generic event sink that accepts [`RevealEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: RevealEvent);

    /// Whether the sink cares about events of `kind`. Emitters skip building
    /// events nobody wants.
    #[inline]
    fn wants(&self, _kind: RevealEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: RevealEvent) {}

    #[inline]
    fn wants(&self, _kind: RevealEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(RevealEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(RevealEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(RevealEvent),
{
    #[inline]
    fn send(&mut self, event: RevealEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<RevealEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<RevealEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[RevealEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Revealed frames, in emission order.
    pub fn frames(&self) -> Vec<RevealFrame> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RevealEvent::FrameRevealed { frame, .. } => Some(*frame),
                _ => None,
            })
            .collect()
    }

    pub fn count_of(&self, kind: RevealEventKind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: RevealEvent) {
        self.events.push(event);
    }
}

/// Sink that only forwards the listed event kinds to an inner sink.
pub struct FilterSink<S: EventSink> {
    inner: S,
    kinds: Vec<RevealEventKind>,
}

impl<S: EventSink> FilterSink<S> {
    pub fn new(inner: S, kinds: impl IntoIterator<Item = RevealEventKind>) -> Self {
        Self {
            inner,
            kinds: kinds.into_iter().collect(),
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: EventSink> EventSink for FilterSink<S> {
    fn send(&mut self, event: RevealEvent) {
        if self.wants(event.kind()) {
            self.inner.send(event);
        }
    }

    fn wants(&self, kind: RevealEventKind) -> bool {
        self.kinds.contains(&kind) && self.inner.wants(kind)
    }
}
