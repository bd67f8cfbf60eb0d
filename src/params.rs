#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::Schedule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParameterError {
    #[error("grid width must be positive")]
    ZeroWidth,
    #[error("grid height must be positive")]
    ZeroHeight,
    #[error("iteration bound must be at least 1")]
    ZeroIterations,
    #[error("at least one trial is required")]
    ZeroTrials,
    #[error("thread count override must be positive")]
    ZeroThreads,
}

/// Fixed configuration of a benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct RenderParameters {
    pub width: usize,
    pub height: usize,
    pub max_iter: u32,
    pub trials: usize,
    /// Worker count; `None` uses the available hardware parallelism.
    pub threads: Option<usize>,
    pub schedule: Schedule,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            max_iter: 255,
            trials: 10,
            threads: None,
            schedule: Schedule::Dynamic,
        }
    }
}

impl RenderParameters {
    pub fn new(
        width: usize,
        height: usize,
        max_iter: u32,
        trials: usize,
    ) -> Result<Self, ParameterError> {
        if width == 0 {
            return Err(ParameterError::ZeroWidth);
        }
        if height == 0 {
            return Err(ParameterError::ZeroHeight);
        }
        if max_iter == 0 {
            return Err(ParameterError::ZeroIterations);
        }
        if trials == 0 {
            return Err(ParameterError::ZeroTrials);
        }
        Ok(Self {
            width,
            height,
            max_iter,
            trials,
            ..Default::default()
        })
    }

    pub fn with_threads(self, threads: usize) -> Result<Self, ParameterError> {
        if threads == 0 {
            return Err(ParameterError::ZeroThreads);
        }
        Ok(Self {
            threads: Some(threads),
            ..self
        })
    }

    pub fn with_schedule(self, schedule: Schedule) -> Self {
        Self { schedule, ..self }
    }

    pub fn pixels(&self) -> usize {
        self.width * self.height
    }
}
