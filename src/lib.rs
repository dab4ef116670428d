//! Throughput benchmarks for list modification.
//!
//! Six list implementations (two plain, four thread-safe) are measured on
//! five operations at two sizes:
//!
//! ```text
//! populate         - build a fresh list and append `size` sentinels
//! iteration        - walk the whole list
//! headAddRemove    - insert at 0, remove at 0
//! middleAddRemove  - insert at size / 2, remove there
//! tailAddRemove    - append, remove at size - 1
//! ```
//!
//! Two drivers share this library: the `list-bench` binary ([`Runner`])
//! and the criterion harness under `benches/`.
//!
//! ```
//! use list_modification_benchmarks::{ListImpl, Operation, ParamSet, SeqList, Trial};
//!
//! let mut trial = Trial::setup(ParamSet::new(ListImpl::Linked, 100));
//! trial.invoke(Operation::MiddleAddRemove);
//! assert_eq!(trial.list().len(), 100);
//! ```

pub mod error;
pub mod grid;
pub mod list;
pub mod ops;
pub mod options;
pub mod report;
pub mod runner;
pub mod variant;

pub use error::{BenchError, BenchResult};
pub use grid::{Combination, Grid, ParamSet, DEFAULT_SIZES};
pub use list::{Container, CopyOnWriteVec, SeqList, SyncVec, Synchronized};
pub use ops::{
    head_add_remove, iterate, middle_add_remove, populate, tail_add_remove, Operation, Trial,
    SENTINEL,
};
pub use options::{RunnerOptions, RunnerOptionsBuilder};
pub use report::{Report, Score};
pub use runner::Runner;
pub use variant::{ListImpl, Suite};
