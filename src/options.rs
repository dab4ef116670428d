use std::time::Duration;

use crate::error::{BenchError, BenchResult};
use crate::grid::Grid;

pub const DEFAULT_WARMUP_ITERATIONS: usize = 5;
pub const DEFAULT_MEASUREMENT_ITERATIONS: usize = 5;
pub const DEFAULT_FORKS: usize = 1;
pub const DEFAULT_ITERATION_TIME: Duration = Duration::from_secs(1);

/// Runner configuration. Build with [`RunnerOptions::builder`].
#[derive(Debug, Clone)]
pub struct RunnerOptions {
    pub grid: Grid,
    pub include: Option<String>,
    pub warmup_iterations: usize,
    pub measurement_iterations: usize,
    pub forks: usize,
    pub iteration_time: Duration,
    pub fail_on_error: bool,
}

impl RunnerOptions {
    pub fn builder() -> RunnerOptionsBuilder {
        RunnerOptionsBuilder::default()
    }
}

#[derive(Debug, Clone)]
pub struct RunnerOptionsBuilder {
    grid: Grid,
    include: Option<String>,
    warmup_iterations: usize,
    measurement_iterations: usize,
    forks: usize,
    iteration_time: Duration,
    fail_on_error: bool,
}

impl Default for RunnerOptionsBuilder {
    fn default() -> Self {
        Self {
            grid: Grid::all(),
            include: None,
            warmup_iterations: DEFAULT_WARMUP_ITERATIONS,
            measurement_iterations: DEFAULT_MEASUREMENT_ITERATIONS,
            forks: DEFAULT_FORKS,
            iteration_time: DEFAULT_ITERATION_TIME,
            fail_on_error: false,
        }
    }
}

impl RunnerOptionsBuilder {
    pub fn grid(mut self, grid: Grid) -> Self {
        self.grid = grid;
        self
    }

    /// Only run benchmarks whose label contains `pattern`.
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include = Some(pattern.into());
        self
    }

    pub fn warmup_iterations(mut self, n: usize) -> Self {
        self.warmup_iterations = n;
        self
    }

    pub fn measurement_iterations(mut self, n: usize) -> Self {
        self.measurement_iterations = n;
        self
    }

    pub fn forks(mut self, n: usize) -> Self {
        self.forks = n;
        self
    }

    pub fn iteration_time(mut self, time: Duration) -> Self {
        self.iteration_time = time;
        self
    }

    /// When set, the first failing benchmark aborts the whole run.
    pub fn fail_on_error(mut self, fail: bool) -> Self {
        self.fail_on_error = fail;
        self
    }

    pub fn build(self) -> BenchResult<RunnerOptions> {
        if self.measurement_iterations == 0 {
            return Err(BenchError::InvalidOption(
                "measurement iterations must be at least 1".to_string(),
            ));
        }
        if self.forks == 0 {
            return Err(BenchError::InvalidOption("forks must be at least 1".to_string()));
        }
        if self.iteration_time.is_zero() {
            return Err(BenchError::InvalidOption(
                "iteration time must be non-zero".to_string(),
            ));
        }
        if self.grid.sizes.is_empty() {
            return Err(BenchError::InvalidOption("no sizes configured".to_string()));
        }
        if self.grid.implementations.is_empty() {
            return Err(BenchError::InvalidOption(
                "no list implementations configured".to_string(),
            ));
        }
        Ok(RunnerOptions {
            grid: self.grid,
            include: self.include,
            warmup_iterations: self.warmup_iterations,
            measurement_iterations: self.measurement_iterations,
            forks: self.forks,
            iteration_time: self.iteration_time,
            fail_on_error: self.fail_on_error,
        })
    }
}
