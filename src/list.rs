//! Sequential containers under test.
//!
//! Every container stores `i32` and exposes the same small capability set
//! through [`SeqList`]: append, positional insert and remove, length and a
//! forward walk. The plain containers are std types; the thread-safe ones
//! put a lock or a copy-on-write scheme around them:
//!
//! ```text
//! Synchronized<L>  - one mutex around any list, iteration holds the lock
//! SyncVec          - mutex-guarded vector, iteration relocks on every step
//! CopyOnWriteVec   - every mutation copies into a fresh allocation
//! ```
//!
//! [`Container`] is the closed union of all of them. It dispatches with a
//! `match`, so a benchmark loop never goes through a vtable.

use std::collections::LinkedList;
use std::hint::black_box;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::variant::ListImpl;

/// Capability set shared by all list variants.
///
/// Index arguments follow `Vec` semantics: `insert` accepts `0..=len`,
/// `remove` accepts `0..len`, anything else panics.
pub trait SeqList {
    fn push(&mut self, value: i32);

    fn insert(&mut self, index: usize, value: i32);

    fn remove(&mut self, index: usize) -> i32;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Walks the list front to back and returns how many elements it saw.
    fn traverse(&self) -> usize;

    /// Copies the contents out in order.
    fn to_vec(&self) -> Vec<i32>;
}

// Each element goes through black_box so the walk cannot be folded away.
fn walk<'a>(iter: impl Iterator<Item = &'a i32>) -> usize {
    let mut visited = 0;
    for value in iter {
        black_box(value);
        visited += 1;
    }
    visited
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // The harness never shares a container, so a poisoned lock still holds
    // a consistent list.
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[track_caller]
fn check_insert(index: usize, len: usize) {
    if index > len {
        panic!("insertion index (is {index}) should be <= len (is {len})");
    }
}

#[track_caller]
fn check_remove(index: usize, len: usize) {
    if index >= len {
        panic!("removal index (is {index}) should be < len (is {len})");
    }
}

// ============================================================================
// Plain containers
// ============================================================================

impl SeqList for Vec<i32> {
    fn push(&mut self, value: i32) {
        Vec::push(self, value);
    }

    fn insert(&mut self, index: usize, value: i32) {
        Vec::insert(self, index, value);
    }

    fn remove(&mut self, index: usize) -> i32 {
        Vec::remove(self, index)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn traverse(&self) -> usize {
        walk(self.iter())
    }

    fn to_vec(&self) -> Vec<i32> {
        self.clone()
    }
}

/// Positional access splits the list at `index` (walking from the nearer
/// end) and splices the halves back together.
impl SeqList for LinkedList<i32> {
    fn push(&mut self, value: i32) {
        self.push_back(value);
    }

    #[track_caller]
    fn insert(&mut self, index: usize, value: i32) {
        let len = LinkedList::len(self);
        check_insert(index, len);
        if index == 0 {
            self.push_front(value);
        } else if index == len {
            self.push_back(value);
        } else {
            let mut tail = self.split_off(index);
            tail.push_front(value);
            self.append(&mut tail);
        }
    }

    #[track_caller]
    fn remove(&mut self, index: usize) -> i32 {
        let len = LinkedList::len(self);
        check_remove(index, len);
        let removed = if index == 0 {
            self.pop_front()
        } else if index == len - 1 {
            self.pop_back()
        } else {
            let mut tail = self.split_off(index);
            let removed = tail.pop_front();
            self.append(&mut tail);
            removed
        };
        match removed {
            Some(value) => value,
            None => unreachable!("bounds checked above"),
        }
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn traverse(&self) -> usize {
        walk(self.iter())
    }

    fn to_vec(&self) -> Vec<i32> {
        self.iter().copied().collect()
    }
}

// ============================================================================
// Synchronized wrapper
// ============================================================================

/// Wraps any list in a single mutex.
///
/// Each call locks once. Iteration takes the lock for the whole walk, which
/// is what a caller of a synchronized list has to do by hand to iterate
/// safely.
#[derive(Debug, Default)]
pub struct Synchronized<L> {
    inner: Mutex<L>,
}

impl<L: SeqList> Synchronized<L> {
    pub fn new(list: L) -> Self {
        Self {
            inner: Mutex::new(list),
        }
    }

    pub fn push(&self, value: i32) {
        lock(&self.inner).push(value);
    }

    #[track_caller]
    pub fn insert(&self, index: usize, value: i32) {
        lock(&self.inner).insert(index, value);
    }

    #[track_caller]
    pub fn remove(&self, index: usize) -> i32 {
        lock(&self.inner).remove(index)
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_inner(self) -> L {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<L: SeqList> SeqList for Synchronized<L> {
    fn push(&mut self, value: i32) {
        Synchronized::push(self, value);
    }

    fn insert(&mut self, index: usize, value: i32) {
        Synchronized::insert(self, index, value);
    }

    fn remove(&mut self, index: usize) -> i32 {
        Synchronized::remove(self, index)
    }

    fn len(&self) -> usize {
        Synchronized::len(self)
    }

    fn traverse(&self) -> usize {
        lock(&self.inner).traverse()
    }

    fn to_vec(&self) -> Vec<i32> {
        lock(&self.inner).to_vec()
    }
}

// ============================================================================
// Synchronized vector
// ============================================================================

/// A vector whose every method is synchronized, including the iterator's
/// `next`.
#[derive(Debug, Default)]
pub struct SyncVec {
    inner: Mutex<Vec<i32>>,
}

impl SyncVec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, value: i32) {
        lock(&self.inner).push(value);
    }

    #[track_caller]
    pub fn insert(&self, index: usize, value: i32) {
        lock(&self.inner).insert(index, value);
    }

    #[track_caller]
    pub fn remove(&self, index: usize) -> i32 {
        lock(&self.inner).remove(index)
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        lock(&self.inner).get(index).copied()
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> SyncVecIter<'_> {
        SyncVecIter {
            vec: self,
            cursor: 0,
        }
    }
}

/// Cursor over a [`SyncVec`] that locks once per element.
pub struct SyncVecIter<'a> {
    vec: &'a SyncVec,
    cursor: usize,
}

impl Iterator for SyncVecIter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let value = self.vec.get(self.cursor)?;
        self.cursor += 1;
        Some(value)
    }
}

impl SeqList for SyncVec {
    fn push(&mut self, value: i32) {
        SyncVec::push(self, value);
    }

    fn insert(&mut self, index: usize, value: i32) {
        SyncVec::insert(self, index, value);
    }

    fn remove(&mut self, index: usize) -> i32 {
        SyncVec::remove(self, index)
    }

    fn len(&self) -> usize {
        SyncVec::len(self)
    }

    fn traverse(&self) -> usize {
        let mut visited = 0;
        for value in self.iter() {
            black_box(value);
            visited += 1;
        }
        visited
    }

    fn to_vec(&self) -> Vec<i32> {
        lock(&self.inner).clone()
    }
}

// ============================================================================
// Copy-on-write vector
// ============================================================================

/// Array list where every mutation builds a new backing vector.
///
/// Readers take a [`snapshot`](Self::snapshot) and walk it without holding
/// the lock; a writer never touches a published snapshot.
#[derive(Debug, Default)]
pub struct CopyOnWriteVec {
    current: Mutex<Arc<Vec<i32>>>,
}

impl CopyOnWriteVec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current backing store. Later writes do not affect it.
    pub fn snapshot(&self) -> Arc<Vec<i32>> {
        Arc::clone(&lock(&self.current))
    }

    // Always copies, even when no reader holds the current snapshot.
    fn mutate<R>(&self, extra: usize, f: impl FnOnce(&mut Vec<i32>) -> R) -> R {
        let mut current = lock(&self.current);
        let mut next = Vec::with_capacity(current.len() + extra);
        next.extend_from_slice(&current);
        let result = f(&mut next);
        *current = Arc::new(next);
        result
    }

    pub fn push(&self, value: i32) {
        self.mutate(1, |vec| vec.push(value));
    }

    #[track_caller]
    pub fn insert(&self, index: usize, value: i32) {
        check_insert(index, self.len());
        self.mutate(1, |vec| vec.insert(index, value));
    }

    #[track_caller]
    pub fn remove(&self, index: usize) -> i32 {
        check_remove(index, self.len());
        self.mutate(0, |vec| vec.remove(index))
    }

    pub fn len(&self) -> usize {
        lock(&self.current).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SeqList for CopyOnWriteVec {
    fn push(&mut self, value: i32) {
        CopyOnWriteVec::push(self, value);
    }

    fn insert(&mut self, index: usize, value: i32) {
        CopyOnWriteVec::insert(self, index, value);
    }

    fn remove(&mut self, index: usize) -> i32 {
        CopyOnWriteVec::remove(self, index)
    }

    fn len(&self) -> usize {
        CopyOnWriteVec::len(self)
    }

    fn traverse(&self) -> usize {
        let snapshot = self.snapshot();
        walk(snapshot.iter())
    }

    fn to_vec(&self) -> Vec<i32> {
        (*self.snapshot()).clone()
    }
}

// ============================================================================
// Container
// ============================================================================

/// One list of any variant.
#[derive(Debug)]
pub enum Container {
    Array(Vec<i32>),
    Linked(LinkedList<i32>),
    SyncArray(Synchronized<Vec<i32>>),
    SyncLinked(Synchronized<LinkedList<i32>>),
    Vector(SyncVec),
    CopyOnWriteArray(CopyOnWriteVec),
}

macro_rules! dispatch {
    ($container:expr, $list:ident => $body:expr) => {
        match $container {
            Container::Array($list) => $body,
            Container::Linked($list) => $body,
            Container::SyncArray($list) => $body,
            Container::SyncLinked($list) => $body,
            Container::Vector($list) => $body,
            Container::CopyOnWriteArray($list) => $body,
        }
    };
}

impl Container {
    pub fn implementation(&self) -> ListImpl {
        match self {
            Container::Array(_) => ListImpl::Array,
            Container::Linked(_) => ListImpl::Linked,
            Container::SyncArray(_) => ListImpl::SyncArray,
            Container::SyncLinked(_) => ListImpl::SyncLinked,
            Container::Vector(_) => ListImpl::Vector,
            Container::CopyOnWriteArray(_) => ListImpl::CopyOnWriteArray,
        }
    }
}

impl SeqList for Container {
    #[inline]
    fn push(&mut self, value: i32) {
        dispatch!(self, list => SeqList::push(list, value))
    }

    #[inline]
    #[track_caller]
    fn insert(&mut self, index: usize, value: i32) {
        dispatch!(self, list => SeqList::insert(list, index, value))
    }

    #[inline]
    #[track_caller]
    fn remove(&mut self, index: usize) -> i32 {
        dispatch!(self, list => SeqList::remove(list, index))
    }

    #[inline]
    fn len(&self) -> usize {
        dispatch!(self, list => SeqList::len(list))
    }

    #[inline]
    fn traverse(&self) -> usize {
        dispatch!(self, list => SeqList::traverse(list))
    }

    fn to_vec(&self) -> Vec<i32> {
        dispatch!(self, list => SeqList::to_vec(list))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled<L: SeqList>(mut list: L, n: i32) -> L {
        for i in 0..n {
            list.push(i);
        }
        list
    }

    #[test]
    fn linked_insert_splices_in_place() {
        let mut list = filled(LinkedList::<i32>::new(), 5);
        SeqList::insert(&mut list, 2, 99);
        assert_eq!(SeqList::to_vec(&list), vec![0, 1, 99, 2, 3, 4]);
        SeqList::insert(&mut list, 0, -1);
        SeqList::insert(&mut list, 7, 100);
        assert_eq!(SeqList::to_vec(&list), vec![-1, 0, 1, 99, 2, 3, 4, 100]);
    }

    #[test]
    fn linked_remove_returns_element() {
        let mut list = filled(LinkedList::<i32>::new(), 5);
        assert_eq!(SeqList::remove(&mut list, 2), 2);
        assert_eq!(SeqList::remove(&mut list, 0), 0);
        assert_eq!(SeqList::remove(&mut list, 2), 4);
        assert_eq!(SeqList::to_vec(&list), vec![1, 3]);
    }

    #[test]
    #[should_panic(expected = "removal index")]
    fn linked_remove_out_of_bounds_panics() {
        let mut list = filled(LinkedList::<i32>::new(), 3);
        SeqList::remove(&mut list, 3);
    }

    #[test]
    #[should_panic(expected = "insertion index")]
    fn linked_insert_out_of_bounds_panics() {
        let mut list: LinkedList<i32> = LinkedList::new();
        SeqList::insert(&mut list, 1, 0);
    }

    #[test]
    fn synchronized_delegates_to_inner() {
        let mut list = filled(Synchronized::new(LinkedList::<i32>::new()), 4);
        SeqList::insert(&mut list, 1, 42);
        assert_eq!(SeqList::remove(&mut list, 3), 2);
        assert_eq!(list.traverse(), 4);
        assert_eq!(list.into_inner().into_iter().collect::<Vec<_>>(), vec![0, 42, 1, 3]);
    }

    #[test]
    fn sync_vec_iterator_yields_in_order() {
        let list = filled(SyncVec::new(), 6);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(list.traverse(), 6);
    }

    #[test]
    fn sync_vec_iterator_sees_concurrent_shrink() {
        let list = filled(SyncVec::new(), 3);
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(0));
        list.remove(2);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn copy_on_write_keeps_old_snapshot() {
        let list = filled(CopyOnWriteVec::new(), 3);
        let before = list.snapshot();
        list.insert(1, 7);
        let after = list.snapshot();

        assert_eq!(*before, vec![0, 1, 2]);
        assert_eq!(*after, vec![0, 7, 1, 2]);
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn copy_on_write_copies_without_readers() {
        let list = filled(CopyOnWriteVec::new(), 2);
        let addr = list.snapshot().as_ptr();
        list.push(5);
        assert_ne!(list.snapshot().as_ptr(), addr);
        assert_eq!(list.remove(0), 0);
        assert_eq!(list.to_vec(), vec![1, 5]);
    }

    #[test]
    #[should_panic(expected = "removal index")]
    fn copy_on_write_remove_out_of_bounds_panics() {
        let list = CopyOnWriteVec::new();
        list.remove(0);
    }

    #[test]
    fn container_reports_its_implementation() {
        for implementation in ListImpl::ALL {
            assert_eq!(implementation.create().implementation(), implementation);
        }
    }
}
