//! The five timed operations and the per-trial state they run against.

use std::fmt;
use std::hint::black_box;
use std::str::FromStr;

use crate::error::BenchError;
use crate::grid::ParamSet;
use crate::list::{Container, SeqList};
use crate::variant::ListImpl;

/// Value stored by every operation. Only presence and count matter.
pub const SENTINEL: i32 = i32::MIN;

// ============================================================================
// Operations
// ============================================================================

/// Builds a fresh list and appends `size` sentinels.
pub fn populate(implementation: ListImpl, size: usize) -> Container {
    let mut list = implementation.create();
    for _ in 0..size {
        list.push(SENTINEL);
    }
    list
}

/// Walks the whole list and returns the number of elements visited.
pub fn iterate(list: &Container) -> usize {
    list.traverse()
}

pub fn head_add_remove(list: &mut Container) -> &mut Container {
    list.insert(0, SENTINEL);
    black_box(list.remove(0));
    list
}

pub fn middle_add_remove(list: &mut Container, size: usize) -> &mut Container {
    let index = size / 2;
    list.insert(index, SENTINEL);
    black_box(list.remove(index));
    list
}

/// Appends, then removes the element before the appended one. All elements
/// are sentinels, so the list ends up unchanged.
pub fn tail_add_remove(list: &mut Container, size: usize) -> &mut Container {
    let index = size - 1;
    list.push(SENTINEL);
    black_box(list.remove(index));
    list
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    Populate,
    Iteration,
    HeadAddRemove,
    MiddleAddRemove,
    TailAddRemove,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Populate,
        Operation::Iteration,
        Operation::HeadAddRemove,
        Operation::MiddleAddRemove,
        Operation::TailAddRemove,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Populate => "populate",
            Operation::Iteration => "iteration",
            Operation::HeadAddRemove => "headAddRemove",
            Operation::MiddleAddRemove => "middleAddRemove",
            Operation::TailAddRemove => "tailAddRemove",
        }
    }

    /// Add/remove pairs index into the list and cannot run on an empty one.
    pub fn requires_elements(&self) -> bool {
        matches!(
            self,
            Operation::HeadAddRemove | Operation::MiddleAddRemove | Operation::TailAddRemove
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| BenchError::UnknownOperation(s.to_string()))
    }
}

// ============================================================================
// Trial
// ============================================================================

/// State for one parameter set: the prefilled list the non-populating
/// operations reuse across invocations.
#[derive(Debug)]
pub struct Trial {
    params: ParamSet,
    list: Container,
}

impl Trial {
    pub fn setup(params: ParamSet) -> Self {
        Self {
            params,
            list: populate(params.implementation, params.size),
        }
    }

    pub fn params(&self) -> ParamSet {
        self.params
    }

    pub fn list(&self) -> &Container {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut Container {
        &mut self.list
    }

    /// Runs one invocation of `op` and returns an observable result: the
    /// visited count for `iteration`, otherwise the resulting length.
    ///
    /// Panics when an add/remove pair is invoked on an empty trial.
    #[inline]
    pub fn invoke(&mut self, op: Operation) -> usize {
        let ParamSet {
            implementation,
            size,
        } = self.params;
        match op {
            Operation::Populate => black_box(populate(implementation, size)).len(),
            Operation::Iteration => iterate(&self.list),
            Operation::HeadAddRemove => head_add_remove(&mut self.list).len(),
            Operation::MiddleAddRemove => middle_add_remove(&mut self.list, size).len(),
            Operation::TailAddRemove => tail_add_remove(&mut self.list, size).len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populate_fills_with_sentinel() {
        let list = populate(ListImpl::Linked, 10);
        assert_eq!(list.to_vec(), vec![SENTINEL; 10]);
    }

    #[test]
    fn middle_removes_what_it_inserted() {
        let mut list = ListImpl::Array.create();
        for i in 0..5 {
            list.push(i);
        }
        middle_add_remove(&mut list, 5);
        assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn tail_removes_before_appended() {
        let mut list = ListImpl::Vector.create();
        for i in 0..3 {
            list.push(i);
        }
        tail_add_remove(&mut list, 3);
        assert_eq!(list.to_vec(), vec![0, 1, SENTINEL]);
    }

    #[test]
    fn operation_names_parse() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>(), Ok(op));
        }
        assert_eq!("HEADADDREMOVE".parse::<Operation>(), Ok(Operation::HeadAddRemove));
        assert!("shuffle".parse::<Operation>().is_err());
    }

    #[test]
    fn trial_invoke_keeps_length() {
        let mut trial = Trial::setup(ParamSet::new(ListImpl::SyncLinked, 8));
        for op in Operation::ALL {
            let observed = trial.invoke(op);
            assert_eq!(observed, 8, "{op}");
            assert_eq!(trial.list().len(), 8);
        }
    }

    #[test]
    #[should_panic]
    fn add_remove_on_empty_trial_panics() {
        let mut trial = Trial::setup(ParamSet::new(ListImpl::Array, 0));
        trial.invoke(Operation::TailAddRemove);
    }
}
