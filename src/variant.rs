use std::collections::LinkedList;
use std::fmt;
use std::str::FromStr;

use crate::error::BenchError;
use crate::list::{Container, CopyOnWriteVec, Synchronized, SyncVec};

/// List implementation under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListImpl {
    Array,
    Linked,
    SyncArray,
    SyncLinked,
    Vector,
    CopyOnWriteArray,
}

impl ListImpl {
    pub const ALL: [ListImpl; 6] = [
        ListImpl::Array,
        ListImpl::Linked,
        ListImpl::SyncArray,
        ListImpl::SyncLinked,
        ListImpl::Vector,
        ListImpl::CopyOnWriteArray,
    ];

    pub const THREAD_UNSAFE: [ListImpl; 2] = [ListImpl::Array, ListImpl::Linked];

    pub const THREAD_SAFE: [ListImpl; 4] = [
        ListImpl::SyncArray,
        ListImpl::SyncLinked,
        ListImpl::Vector,
        ListImpl::CopyOnWriteArray,
    ];

    /// Builds a new, empty list of this kind.
    pub fn create(self) -> Container {
        match self {
            ListImpl::Array => Container::Array(Vec::new()),
            ListImpl::Linked => Container::Linked(LinkedList::new()),
            ListImpl::SyncArray => Container::SyncArray(Synchronized::new(Vec::new())),
            ListImpl::SyncLinked => Container::SyncLinked(Synchronized::new(LinkedList::new())),
            ListImpl::Vector => Container::Vector(SyncVec::new()),
            ListImpl::CopyOnWriteArray => Container::CopyOnWriteArray(CopyOnWriteVec::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ListImpl::Array => "Array",
            ListImpl::Linked => "Linked",
            ListImpl::SyncArray => "SyncArray",
            ListImpl::SyncLinked => "SyncLinked",
            ListImpl::Vector => "Vector",
            ListImpl::CopyOnWriteArray => "CopyOnWriteArray",
        }
    }

    pub fn is_thread_safe(&self) -> bool {
        !matches!(self, ListImpl::Array | ListImpl::Linked)
    }

    pub fn suite(&self) -> Suite {
        if self.is_thread_safe() {
            Suite::ThreadSafe
        } else {
            Suite::ThreadUnsafe
        }
    }
}

impl fmt::Display for ListImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ListImpl {
    type Err = BenchError;

    /// Accepts the display name in any case, or the descriptive kebab-case
    /// alias (`plain-array`, `lock-wrapped-linked`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let implementation = match key.as_str() {
            "array" | "plain-array" => ListImpl::Array,
            "linked" | "plain-linked" => ListImpl::Linked,
            "syncarray" | "lock-wrapped-array" => ListImpl::SyncArray,
            "synclinked" | "lock-wrapped-linked" => ListImpl::SyncLinked,
            "vector" | "synchronized-vector" => ListImpl::Vector,
            "copyonwritearray" | "copy-on-write-array" => ListImpl::CopyOnWriteArray,
            _ => return Err(BenchError::UnknownImplementation(s.to_string())),
        };
        Ok(implementation)
    }
}

/// The two benchmark classes: plain lists and thread-safe lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suite {
    ThreadUnsafe,
    ThreadSafe,
}

impl Suite {
    pub fn name(&self) -> &'static str {
        match self {
            Suite::ThreadUnsafe => "ThreadUnsafeListModificationBenchmark",
            Suite::ThreadSafe => "ThreadSafeListModificationBenchmark",
        }
    }

    pub fn implementations(&self) -> &'static [ListImpl] {
        match self {
            Suite::ThreadUnsafe => &ListImpl::THREAD_UNSAFE,
            Suite::ThreadSafe => &ListImpl::THREAD_SAFE,
        }
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suite {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unsafe" | "thread-unsafe" => Ok(Suite::ThreadUnsafe),
            "safe" | "thread-safe" => Ok(Suite::ThreadSafe),
            _ => Err(BenchError::UnknownSuite(s.to_string())),
        }
    }
}
