//! Standalone benchmark driver.
//!
//! For every selected combination the runner spawns one thread per fork.
//! Each fork builds its own [`Trial`], runs the warmup iterations, then the
//! measurement iterations, and hands the measured scores back. Nothing is
//! shared between forks or combinations, and a panic inside one fork is
//! caught at the join and turned into a benchmark failure.
//!
//! An iteration calls the operation back to back until the configured
//! iteration time has passed and scores it as operations per millisecond.

use std::any::Any;
use std::hint::black_box;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::{BenchError, BenchResult};
use crate::grid::Combination;
use crate::ops::{Operation, Trial};
use crate::options::RunnerOptions;
use crate::report::{Failure, Report, RunResult, Score};

const MAX_BATCH: u64 = 1 << 12;

pub struct Runner {
    options: RunnerOptions,
}

impl Runner {
    pub fn new(options: RunnerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RunnerOptions {
        &self.options
    }

    /// Grid combinations that pass the include filter, in run order.
    pub fn selected(&self) -> Vec<Combination> {
        let combinations = self.options.grid.combinations();
        match &self.options.include {
            Some(pattern) => combinations
                .into_iter()
                .filter(|c| c.label().contains(pattern.as_str()))
                .collect(),
            None => combinations,
        }
    }

    pub fn run(&self) -> BenchResult<Report> {
        let selected = self.selected();
        if selected.is_empty() {
            warn!(include = ?self.options.include, "no benchmarks matched");
        }
        self.run_combinations(&selected)
    }

    /// Runs exactly `combinations`, bypassing the grid and the filter.
    pub fn run_combinations(&self, combinations: &[Combination]) -> BenchResult<Report> {
        let mut report = Report::default();
        let total = combinations.len();

        for (n, &combination) in combinations.iter().enumerate() {
            info!(
                benchmark = %combination.label(),
                params = %combination.params,
                "running {}/{}",
                n + 1,
                total
            );

            match self.run_combination(combination) {
                Ok(samples) => {
                    let score = Score::from_samples(&samples);
                    info!(
                        benchmark = %combination.label(),
                        params = %combination.params,
                        score = score.mean,
                        "done"
                    );
                    report.results.push(RunResult { combination, score });
                }
                Err(reason) => {
                    if self.options.fail_on_error {
                        return Err(BenchError::BenchmarkFailed {
                            benchmark: combination.to_string(),
                            reason,
                        });
                    }
                    warn!(
                        benchmark = %combination.label(),
                        params = %combination.params,
                        %reason,
                        "benchmark failed, continuing"
                    );
                    report.failures.push(Failure {
                        combination,
                        reason,
                    });
                }
            }
        }

        Ok(report)
    }

    fn run_combination(&self, combination: Combination) -> Result<Vec<f64>, String> {
        let mut samples = Vec::with_capacity(self.options.forks * self.options.measurement_iterations);

        for fork in 0..self.options.forks {
            let warmup = self.options.warmup_iterations;
            let measurement = self.options.measurement_iterations;
            let time = self.options.iteration_time;

            let handle = thread::Builder::new()
                .name(format!("{}-fork-{}", combination.operation, fork + 1))
                .spawn(move || run_fork(combination, fork + 1, warmup, measurement, time))
                .map_err(|e| format!("failed to spawn fork: {}", e))?;

            let scores = handle.join().map_err(panic_message)?;
            samples.extend(scores);
        }

        Ok(samples)
    }
}

fn run_fork(
    combination: Combination,
    fork: usize,
    warmup: usize,
    measurement: usize,
    time: Duration,
) -> Vec<f64> {
    let mut trial = Trial::setup(combination.params);
    let op = combination.operation;

    for i in 0..warmup {
        let score = measure(&mut trial, op, time);
        debug!(fork, iteration = i + 1, score, "warmup");
    }

    let mut scores = Vec::with_capacity(measurement);
    for i in 0..measurement {
        let score = measure(&mut trial, op, time);
        debug!(fork, iteration = i + 1, score, "measurement");
        scores.push(score);
    }
    scores
}

/// Runs `op` until `time` has elapsed and returns ops/ms.
///
/// Invocations are batched so the clock is not read after every cheap call.
/// The batch doubles while one batch stays under 1% of the iteration time.
fn measure(trial: &mut Trial, op: Operation, time: Duration) -> f64 {
    let start = Instant::now();
    let mut ops: u64 = 0;
    let mut batch: u64 = 1;

    loop {
        let batch_start = Instant::now();
        for _ in 0..batch {
            black_box(trial.invoke(op));
        }
        ops += batch;

        let elapsed = start.elapsed();
        if elapsed >= time {
            return ops as f64 / (elapsed.as_nanos() as f64 / 1_000_000.0);
        }
        if batch < MAX_BATCH && batch_start.elapsed() * 100 < time {
            batch *= 2;
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "benchmark panicked".to_string()
    }
}
