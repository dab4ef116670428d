use std::fmt;

use crate::ops::Operation;
use crate::variant::{ListImpl, Suite};

/// Sizes every suite runs at unless overridden.
pub const DEFAULT_SIZES: [usize; 2] = [100, 10_000];

/// One benchmark configuration: which list, how many elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamSet {
    pub implementation: ListImpl,
    pub size: usize,
}

impl ParamSet {
    pub fn new(implementation: ListImpl, size: usize) -> Self {
        Self {
            implementation,
            size,
        }
    }
}

impl fmt::Display for ParamSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.implementation, self.size)
    }
}

/// An operation bound to a parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combination {
    pub operation: Operation,
    pub params: ParamSet,
}

impl Combination {
    /// `Suite.operation`, the string include patterns match against.
    pub fn label(&self) -> String {
        format!(
            "{}.{}",
            self.params.implementation.suite(),
            self.operation
        )
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.params)
    }
}

/// Cross product of operations, implementations and sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub operations: Vec<Operation>,
    pub implementations: Vec<ListImpl>,
    pub sizes: Vec<usize>,
}

impl Grid {
    pub fn for_suite(suite: Suite) -> Self {
        Self {
            operations: Operation::ALL.to_vec(),
            implementations: suite.implementations().to_vec(),
            sizes: DEFAULT_SIZES.to_vec(),
        }
    }

    pub fn thread_unsafe() -> Self {
        Self::for_suite(Suite::ThreadUnsafe)
    }

    pub fn thread_safe() -> Self {
        Self::for_suite(Suite::ThreadSafe)
    }

    pub fn all() -> Self {
        Self {
            operations: Operation::ALL.to_vec(),
            implementations: ListImpl::ALL.to_vec(),
            sizes: DEFAULT_SIZES.to_vec(),
        }
    }

    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_implementations(mut self, implementations: Vec<ListImpl>) -> Self {
        self.implementations = implementations;
        self
    }

    /// Every runnable combination, operation-major. Add/remove pairs are
    /// left out at size 0.
    pub fn combinations(&self) -> Vec<Combination> {
        let mut out = Vec::with_capacity(
            self.operations.len() * self.implementations.len() * self.sizes.len(),
        );
        for &operation in &self.operations {
            for &implementation in &self.implementations {
                for &size in &self.sizes {
                    if size == 0 && operation.requires_elements() {
                        continue;
                    }
                    out.push(Combination {
                        operation,
                        params: ParamSet::new(implementation, size),
                    });
                }
            }
        }
        out
    }
}
