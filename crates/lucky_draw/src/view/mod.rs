//! Mutually exclusive views and the controller that owns all transient state.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod controller;

pub use controller::{ControllerConfig, ViewController};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ViewKind {
    /// Number draw with reveal and copy/export/share actions.
    #[default]
    Draw,
    /// Dream-symbol list.
    Dream,
    /// Zodiac lucky-point table.
    Guide,
    /// Simulated fortune analysis.
    Analysis,
}

impl ViewKind {
    pub const ALL: [ViewKind; 4] = [
        ViewKind::Draw,
        ViewKind::Dream,
        ViewKind::Guide,
        ViewKind::Analysis,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ViewKind::Draw => "Draw",
            ViewKind::Dream => "Dreams",
            ViewKind::Guide => "Lucky points",
            ViewKind::Analysis => "Analysis",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
