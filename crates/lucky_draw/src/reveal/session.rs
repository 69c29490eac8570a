//! Draw session state and reveal frames.
use std::fmt;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Monotonic identifier of a draw session within one sequencer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of a draw session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DrawStatus {
    #[default]
    Idle,
    Drawing,
    Revealing,
    Done,
}

impl DrawStatus {
    /// A session is busy while numbers are being drawn or revealed.
    pub fn is_busy(self) -> bool {
        matches!(self, DrawStatus::Drawing | DrawStatus::Revealing)
    }

    /// Caption for the draw trigger in this status.
    pub fn label(self) -> &'static str {
        match self {
            DrawStatus::Idle => "Draw lucky numbers",
            DrawStatus::Drawing | DrawStatus::Revealing => "Drawing...",
            DrawStatus::Done => "Draw again",
        }
    }
}

/// One incrementally revealed value of a finished draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RevealFrame {
    /// Position of the value in the final set.
    pub index: usize,
    /// Revealed number, equal to `final_set[index]`.
    pub value: u32,
    /// Scheduled emission time on the sequencer clock.
    pub emitted_at: Duration,
}

impl RevealFrame {
    pub fn band(&self) -> BallBand {
        BallBand::for_number(self.value)
    }
}

/// State of a single draw: parameters, status, final set and frames emitted so far.
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DrawSession {
    pub id: SessionId,
    pub domain_max: u32,
    pub count: u32,
    pub status: DrawStatus,
    /// Sorted distinct numbers; empty while idle.
    pub final_set: Vec<u32>,
    /// Frames revealed so far, in index order.
    pub frames: Vec<RevealFrame>,
}

impl DrawSession {
    /// Creates an idle session for the given draw shape.
    pub fn idle(domain_max: u32, count: u32) -> Self {
        Self {
            id: SessionId::default(),
            domain_max,
            count,
            status: DrawStatus::Idle,
            final_set: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Numbers revealed so far.
    pub fn revealed(&self) -> impl Iterator<Item = u32> + '_ {
        self.frames.iter().map(|f| f.value)
    }

    /// The final set once the session is done.
    pub fn finished_set(&self) -> Option<&[u32]> {
        (self.status == DrawStatus::Done).then_some(self.final_set.as_slice())
    }

    /// Drops the drawn numbers and returns to [`DrawStatus::Idle`], keeping the draw shape.
    pub fn reset(&mut self) {
        self.status = DrawStatus::Idle;
        self.final_set.clear();
        self.frames.clear();
    }
}

/// Colour band of a lottery ball, by decade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BallBand {
    Yellow,
    Blue,
    Red,
    Grey,
    Green,
}

impl BallBand {
    /// Band of a drawn number. Everything above 40 is green; 0 is never drawn.
    pub fn for_number(n: u32) -> Self {
        match n {
            1..=10 => BallBand::Yellow,
            11..=20 => BallBand::Blue,
            21..=30 => BallBand::Red,
            31..=40 => BallBand::Grey,
            _ => BallBand::Green,
        }
    }

    /// sRGB fill colour.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            BallBand::Yellow => [0xfb, 0xc4, 0x00],
            BallBand::Blue => [0x69, 0xc8, 0xf2],
            BallBand::Red => [0xff, 0x72, 0x72],
            BallBand::Grey => [0xaa, 0xaa, 0xaa],
            BallBand::Green => [0xb0, 0xd8, 0x40],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_only_while_drawing_or_revealing() {
        assert!(!DrawStatus::Idle.is_busy());
        assert!(DrawStatus::Drawing.is_busy());
        assert!(DrawStatus::Revealing.is_busy());
        assert!(!DrawStatus::Done.is_busy());
    }

    #[test]
    fn labels_follow_status() {
        assert_eq!(DrawStatus::Idle.label(), "Draw lucky numbers");
        assert_eq!(DrawStatus::Revealing.label(), "Drawing...");
        assert_eq!(DrawStatus::Done.label(), "Draw again");
    }

    #[test]
    fn finished_set_only_when_done() {
        let mut session = DrawSession::idle(45, 6);
        session.final_set = vec![1, 2, 3, 4, 5, 6];
        session.status = DrawStatus::Revealing;
        assert!(session.finished_set().is_none());
        session.status = DrawStatus::Done;
        assert_eq!(session.finished_set(), Some(&[1, 2, 3, 4, 5, 6][..]));
    }

    #[test]
    fn reset_clears_numbers_but_keeps_shape() {
        let mut session = DrawSession::idle(45, 6);
        session.id = SessionId(3);
        session.status = DrawStatus::Done;
        session.final_set = vec![3, 11, 22, 29, 34, 45];
        session.frames.push(RevealFrame {
            index: 0,
            value: 3,
            emitted_at: Duration::from_millis(400),
        });
        session.reset();
        assert_eq!(session.status, DrawStatus::Idle);
        assert!(session.final_set.is_empty());
        assert!(session.frames.is_empty());
        assert_eq!((session.domain_max, session.count), (45, 6));
    }

    #[test]
    fn bands_split_by_decade() {
        assert_eq!(BallBand::for_number(1), BallBand::Yellow);
        assert_eq!(BallBand::for_number(10), BallBand::Yellow);
        assert_eq!(BallBand::for_number(11), BallBand::Blue);
        assert_eq!(BallBand::for_number(30), BallBand::Red);
        assert_eq!(BallBand::for_number(40), BallBand::Grey);
        assert_eq!(BallBand::for_number(45), BallBand::Green);
        assert_ne!(BallBand::for_number(0), BallBand::Yellow);
    }

    #[test]
    fn session_id_displays_with_hash() {
        assert_eq!(SessionId(12).to_string(), "#12");
    }
}
