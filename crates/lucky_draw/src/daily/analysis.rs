//! Simulated fortune "analysis": a fixed delay followed by a canned result of the day.
use std::time::Duration;

use chrono::NaiveDate;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::daily::selection_index;
use crate::error::{Error, Result};

pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_millis(1500);

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisConfig {
    /// Time spent "analysing" before the result shows.
    pub delay: Duration,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_ANALYSIS_DELAY,
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// User input for an analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisRequest {
    /// Required.
    pub birth_date: Option<NaiveDate>,
    pub name: Option<String>,
}

impl AnalysisRequest {
    pub fn new(birth_date: NaiveDate) -> Self {
        Self {
            birth_date: Some(birth_date),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnalysisStep {
    /// Waiting for input.
    #[default]
    Input,
    /// Result becomes available at `ready_at`.
    Analyzing { ready_at: Duration },
    /// Index into the analysis table.
    Result { index: usize },
}

/// Input → Analyzing → Result flow of the analysis view.
#[derive(Debug, Clone, Default)]
pub struct AnalysisFlow {
    config: AnalysisConfig,
    step: AnalysisStep,
}

impl AnalysisFlow {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            step: AnalysisStep::Input,
        }
    }

    pub fn step(&self) -> AnalysisStep {
        self.step
    }

    pub fn deadline(&self) -> Option<Duration> {
        match self.step {
            AnalysisStep::Analyzing { ready_at } => Some(ready_at),
            _ => None,
        }
    }

    /// Starts analysing `request`. A missing birth date is rejected without
    /// touching the current step; a submit while analysing is ignored.
    pub fn submit(&mut self, request: &AnalysisRequest, now: Duration) -> Result<()> {
        if request.birth_date.is_none() {
            return Err(Error::MissingRequiredInput {
                field: "birth_date",
            });
        }
        if matches!(self.step, AnalysisStep::Analyzing { .. }) {
            return Ok(());
        }
        let ready_at = now + self.config.delay;
        debug!("Analysis started; result at {ready_at:?}.");
        self.step = AnalysisStep::Analyzing { ready_at };
        Ok(())
    }

    /// Completes the analysis once its delay elapsed, choosing the entry of
    /// `today` from a table of `table_len` entries. Returns the result index
    /// when available.
    pub fn poll(&mut self, today: NaiveDate, now: Duration, table_len: usize) -> Option<usize> {
        match self.step {
            AnalysisStep::Analyzing { ready_at } if now >= ready_at => {
                match selection_index(today, table_len) {
                    Some(index) => {
                        self.step = AnalysisStep::Result { index };
                        Some(index)
                    }
                    None => {
                        self.step = AnalysisStep::Input;
                        None
                    }
                }
            }
            AnalysisStep::Result { index } => Some(index),
            _ => None,
        }
    }

    /// The finished result looked up in `table`.
    pub fn result<'a, T>(&self, table: &'a [T]) -> Option<&'a T> {
        match self.step {
            AnalysisStep::Result { index } => table.get(index),
            _ => None,
        }
    }

    /// Back to the input step.
    pub fn reset(&mut self) {
        self.step = AnalysisStep::Input;
    }
}
