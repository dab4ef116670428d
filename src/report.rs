use std::fmt;

use crate::grid::Combination;

/// Throughput summary in ops/ms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub mean: f64,
    pub stddev: f64,
    pub min: f64,
    pub max: f64,
    pub samples: usize,
}

impl Score {
    /// Sample standard deviation (n - 1); zero for fewer than two samples.
    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        if n == 0 {
            return Self {
                mean: 0.0,
                stddev: 0.0,
                min: 0.0,
                max: 0.0,
                samples: 0,
            };
        }

        let mean = samples.iter().sum::<f64>() / n as f64;
        let stddev = if n > 1 {
            let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
            var.sqrt()
        } else {
            0.0
        };
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            mean,
            stddev,
            min,
            max,
            samples: n,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunResult {
    pub combination: Combination,
    pub score: Score,
}

#[derive(Debug, Clone)]
pub struct Failure {
    pub combination: Combination,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct Report {
    pub results: Vec<RunResult>,
    pub failures: Vec<Failure>,
}

impl Report {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

const UNITS: &str = "ops/ms";
const MODE: &str = "thrpt";

/// Result table, one row per combination:
///
/// ```text
/// Benchmark                                    (implementation)  (size)   Mode  Cnt      Score     StdDev   Units
/// ThreadUnsafeListModificationBenchmark.populate          Array     100  thrpt    5   1234.567 ±   12.345  ops/ms
/// ```
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.results.iter().map(|r| r.combination.label()).collect();
        let name_width = labels.iter().map(String::len).max().unwrap_or(0).max("Benchmark".len());
        let impl_width = self
            .results
            .iter()
            .map(|r| r.combination.params.implementation.name().len())
            .max()
            .unwrap_or(0)
            .max("(implementation)".len());

        writeln!(
            f,
            "{:<name_width$}  {:>impl_width$}  {:>6}  {:>5}  {:>3}  {:>12}    {:>10}  {}",
            "Benchmark", "(implementation)", "(size)", "Mode", "Cnt", "Score", "StdDev", "Units"
        )?;

        for (result, label) in self.results.iter().zip(&labels) {
            let params = result.combination.params;
            let score = &result.score;
            writeln!(
                f,
                "{:<name_width$}  {:>impl_width$}  {:>6}  {:>5}  {:>3}  {:>12.3} ± {:>10.3}  {}",
                label,
                params.implementation.name(),
                params.size,
                MODE,
                score.samples,
                score.mean,
                score.stddev,
                UNITS
            )?;
        }

        if !self.failures.is_empty() {
            writeln!(f)?;
            writeln!(f, "Failed benchmarks:")?;
            for failure in &self.failures {
                writeln!(f, "  {}: {}", failure.combination, failure.reason)?;
            }
        }

        Ok(())
    }
}
