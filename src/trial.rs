use std::time::{Duration, Instant};

use crate::{
    internal_util::as_millis_f64, EscapeGrid, GridScheduler, RenderParameters, SchedulerError,
};

/// Repeats the full grid fill and times each repetition.
pub struct TrialHarness {
    params: RenderParameters,
    scheduler: GridScheduler,
}

/// Per-trial timings and the grid left by the final trial.
#[derive(Debug, Clone)]
pub struct TrialReport {
    samples: Vec<Duration>,
    grid: EscapeGrid,
}

impl TrialHarness {
    pub fn new(params: RenderParameters) -> Result<Self, SchedulerError> {
        let scheduler = GridScheduler::from_params(&params)?;
        tracing::info!(
            threads = scheduler.threads(),
            schedule = ?scheduler.schedule(),
            width = params.width,
            height = params.height,
            max_iter = params.max_iter,
            "worker pool ready"
        );
        Ok(Self { params, scheduler })
    }

    pub fn params(&self) -> &RenderParameters {
        &self.params
    }

    pub fn scheduler(&self) -> &GridScheduler {
        &self.scheduler
    }

    pub fn run(&self) -> TrialReport {
        self.run_with(|_, _| {})
    }

    /// Run every trial in order, calling `on_trial(index, elapsed)` after each one.
    /// Only the fill itself is inside the timed region.
    pub fn run_with(&self, mut on_trial: impl FnMut(usize, Duration)) -> TrialReport {
        let params = &self.params;
        let mut grid = EscapeGrid::new(params.width, params.height, params.max_iter);
        let mut samples = Vec::with_capacity(params.trials);

        for trial in 0..params.trials {
            let start = Instant::now();
            self.scheduler.fill(&mut grid);
            let elapsed = start.elapsed();

            samples.push(elapsed);
            tracing::debug!(trial, elapsed_ms = as_millis_f64(elapsed), "trial finished");
            on_trial(trial, elapsed);
        }

        let report = TrialReport { samples, grid };
        tracing::info!(
            trials = report.samples.len(),
            mean_ms = report.mean_millis(),
            "all trials finished"
        );
        report
    }
}

/// Progress line printed after trial `trial`.
pub fn trial_line(trial: usize, elapsed: Duration) -> String {
    format!(
        "Execution time of trial [{}]: {:.6} seconds",
        trial,
        elapsed.as_secs_f64()
    )
}

impl TrialReport {
    /// Closing line with the mean duration in milliseconds.
    pub fn summary_line(&self) -> String {
        format!(
            "The average execution time of {} trials is: {:.6} ms",
            self.samples.len(),
            self.mean_millis()
        )
    }

    pub fn samples(&self) -> &[Duration] {
        &self.samples
    }

    pub fn grid(&self) -> &EscapeGrid {
        &self.grid
    }

    pub fn into_grid(self) -> EscapeGrid {
        self.grid
    }

    pub fn total(&self) -> Duration {
        self.samples.iter().sum()
    }

    pub fn mean_secs(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().map(Duration::as_secs_f64).sum::<f64>() / self.samples.len() as f64
    }

    pub fn mean_millis(&self) -> f64 {
        self.mean_secs() * 1000.0
    }

    pub fn mean(&self) -> Duration {
        Duration::from_secs_f64(self.mean_secs())
    }

    pub fn min(&self) -> Option<Duration> {
        self.samples.iter().min().copied()
    }

    pub fn max(&self) -> Option<Duration> {
        self.samples.iter().max().copied()
    }
}
