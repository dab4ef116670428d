use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    UnknownImplementation(String),
    UnknownOperation(String),
    UnknownSuite(String),
    InvalidOption(String),
    BenchmarkFailed { benchmark: String, reason: String },
}

impl BenchError {
    /// Configuration errors abort before any benchmark runs.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, BenchError::BenchmarkFailed { .. })
    }
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::UnknownImplementation(name) => {
                write!(f, "unknown list implementation: {}", name)
            }
            BenchError::UnknownOperation(name) => write!(f, "unknown benchmark operation: {}", name),
            BenchError::UnknownSuite(name) => write!(f, "unknown benchmark suite: {}", name),
            BenchError::InvalidOption(msg) => write!(f, "invalid runner option: {}", msg),
            BenchError::BenchmarkFailed { benchmark, reason } => {
                write!(f, "benchmark {} failed: {}", benchmark, reason)
            }
        }
    }
}

impl std::error::Error for BenchError {}

pub type BenchResult<T> = Result<T, BenchError>;
