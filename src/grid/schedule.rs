#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use rayon::{prelude::*, ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

use crate::{internal_util::band_rows, RenderParameters};

use super::{fill_row, EscapeGrid};

/// How rows are handed to the worker pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Schedule {
    /// One row per task; idle workers steal the next unclaimed row.
    #[default]
    Dynamic,
    /// One contiguous band of rows per worker, fixed up front.
    Static,
    /// Every row on the calling thread.
    Sequential,
}

#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] ThreadPoolBuildError),
}

/// Fills escape grids on a dedicated worker pool.
pub struct GridScheduler {
    pool: ThreadPool,
    schedule: Schedule,
}

impl GridScheduler {
    /// `threads == None` sizes the pool to the available hardware parallelism.
    pub fn new(threads: Option<usize>, schedule: Schedule) -> Result<Self, SchedulerError> {
        let mut builder = ThreadPoolBuilder::new().thread_name(|i| format!("escape-worker-{i}"));
        if let Some(threads) = threads {
            builder = builder.num_threads(threads);
        }
        Ok(Self {
            pool: builder.build()?,
            schedule,
        })
    }

    pub fn from_params(params: &RenderParameters) -> Result<Self, SchedulerError> {
        Self::new(params.threads, params.schedule)
    }

    pub fn threads(&self) -> usize {
        match self.schedule {
            Schedule::Sequential => 1,
            _ => self.pool.current_num_threads(),
        }
    }

    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    /// Overwrite every cell of `grid` with the escape time of its coordinate.
    /// Returns once all rows are complete.
    pub fn fill(&self, grid: &mut EscapeGrid) {
        let (width, height, max_iter) = (grid.width(), grid.height(), grid.max_iter());
        if width == 0 || height == 0 {
            return;
        }
        let cells = grid.cells_mut();

        match self.schedule {
            Schedule::Dynamic => self.pool.install(|| {
                cells
                    .par_chunks_mut(width)
                    .enumerate()
                    .with_max_len(1)
                    .for_each(|(row, cells)| fill_row(cells, row, width, height, max_iter));
            }),
            Schedule::Static => {
                let band = band_rows(height, self.pool.current_num_threads());
                self.pool.install(|| {
                    cells
                        .par_chunks_mut(band * width)
                        .enumerate()
                        .for_each(|(index, cells)| {
                            for (offset, cells) in cells.chunks_mut(width).enumerate() {
                                fill_row(cells, index * band + offset, width, height, max_iter);
                            }
                        });
                });
            }
            Schedule::Sequential => {
                for (row, cells) in cells.chunks_mut(width).enumerate() {
                    fill_row(cells, row, width, height, max_iter);
                }
            }
        }
    }
}
