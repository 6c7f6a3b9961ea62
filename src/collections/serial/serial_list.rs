use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;

use crate::collections::heap::{ByKey, Heap};

/// A value tagged with its position in a delivery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SerialItem<T> {
    pub sn: u64,
    pub value: T,
}

impl<T> SerialItem<T> {
    pub const fn new(sn: u64, value: T) -> SerialItem<T> {
        SerialItem {
            sn,
            value,
        }
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> From<(u64, T)> for SerialItem<T> {
    fn from((sn, value): (u64, T)) -> Self {
        SerialItem::new(sn, value)
    }
}

type BySn<T> = ByKey<fn(&SerialItem<T>) -> u64>;

fn sn_of<T>(item: &SerialItem<T>) -> u64 {
    item.sn
}

/// A buffer which accepts sequence-numbered values in any order and releases them strictly in
/// order of their sequence numbers.
///
/// The list tracks the next sequence number it expects to release, `next_sn`. Values are only
/// released once the value carrying `next_sn` has arrived, unless the caller forces delivery
/// across a gap. Values with a sequence number below `next_sn` are stale (duplicates or late
/// retransmissions) and are discarded when they reach the front of the list. Once the item
/// carrying `u64::MAX` has been released the list is exhausted, and everything is stale.
///
/// "Nothing to deliver yet" is represented by [`None`] rather than an error, as a gap is expected
/// to fill eventually. Waiting, polling or timing out on a gap is left to the caller.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items pending in the SerialList.
/// - `s`: The number of stale items discarded during the call.
///
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(log n)` |
/// | `pop_item` | `O((s + 1) log n)` |
/// | `peek_sn` | `O(1)` |
///
/// # Examples
/// ```
/// # use heap_lib::collections::SerialList;
/// let mut list = SerialList::new();
/// list.push(1, "a");
/// list.push(0, "b");
/// list.push(3, "c");
///
/// assert_eq!(list.pop(false), Some("b"));
/// assert_eq!(list.pop(false), Some("a"));
/// // Sequence number 2 hasn't arrived.
/// assert_eq!(list.pop(false), None);
/// assert_eq!(list.pop(true), Some("c"));
/// assert_eq!(list.next_sn(), 4);
/// ```
pub struct SerialList<T> {
    next_sn: u64,
    exhausted: bool,
    heap: Heap<SerialItem<T>, BySn<T>>,
}

impl<T> SerialList<T> {
    /// Creates an empty SerialList expecting sequence number 0 first.
    pub fn new() -> SerialList<T> {
        SerialList::starting_at(0)
    }

    /// Creates an empty SerialList expecting `next_sn` first. Anything pushed with a lower
    /// sequence number is treated as stale.
    pub fn starting_at(next_sn: u64) -> SerialList<T> {
        SerialList {
            next_sn,
            exhausted: false,
            heap: Heap::with_comparator(ByKey(sn_of::<T> as fn(&SerialItem<T>) -> u64), false),
        }
    }

    /// Returns the sequence number that will be released next without forcing. This stays at
    /// `u64::MAX` once that sequence number has been released, see
    /// [`is_exhausted`](SerialList::is_exhausted).
    pub const fn next_sn(&self) -> u64 {
        self.next_sn
    }

    /// Returns true if the item carrying `u64::MAX` has been released, after which no sequence
    /// number is left to deliver.
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    const fn is_stale(&self, sn: u64) -> bool {
        self.exhausted || sn < self.next_sn
    }

    /// Returns the number of pending items, including stale ones which haven't been discarded
    /// yet.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the lowest sequence number currently pending, which may be stale.
    pub fn peek_sn(&self) -> Option<u64> {
        self.heap.peek().map(|item| item.sn)
    }

    /// Adds `value` to the list under sequence number `sn`. Values may be pushed in any order and
    /// sequence numbers may repeat, in which case the first one released wins and the rest become
    /// stale.
    pub fn push(&mut self, sn: u64, value: T) {
        self.push_item(SerialItem::new(sn, value));
    }

    pub fn push_item(&mut self, item: SerialItem<T>) {
        self.heap.push(item);
    }

    /// Removes and returns the next item in sequence, if it has arrived.
    ///
    /// Stale items at the front of the list are discarded first. If the lowest remaining sequence
    /// number is `next_sn`, that item is returned. Otherwise there is a gap: `None` is returned
    /// and the list is left unchanged, unless `force` is true, in which case the gap is skipped
    /// and the lowest pending item is returned regardless.
    ///
    /// After an item is returned, `next_sn` is one past its sequence number.
    ///
    /// # Examples
    /// ```
    /// # use heap_lib::collections::SerialList;
    /// let mut list = SerialList::new();
    /// list.push(2, 'x');
    /// assert_eq!(list.pop_item(false), None);
    ///
    /// let item = list.pop_item(true).unwrap();
    /// assert_eq!((item.sn, item.value), (2, 'x'));
    ///
    /// // Sequence number 0 is now stale.
    /// list.push(0, 'y');
    /// assert_eq!(list.pop_item(true), None);
    /// assert!(list.is_empty());
    /// ```
    pub fn pop_item(&mut self, force: bool) -> Option<SerialItem<T>> {
        loop {
            let sn = self.heap.peek()?.sn;

            if self.is_stale(sn) {
                self.heap.pop().ok()?;
                tracing::trace!(sn, next_sn = self.next_sn, "discarded stale item");
                continue;
            }

            if sn != self.next_sn && !force {
                return None;
            }

            let item = self.heap.pop().ok()?;
            if sn != self.next_sn {
                tracing::debug!(
                    skipped_from = self.next_sn,
                    skipped_to = sn,
                    "forced delivery across a sequence gap"
                );
            }

            match sn.checked_add(1) {
                Some(next_sn) => self.next_sn = next_sn,
                None => {
                    self.next_sn = sn;
                    self.exhausted = true;
                }
            }
            return Some(item);
        }
    }

    /// Removes and returns the value of the next item in sequence. See
    /// [`pop_item`](SerialList::pop_item).
    pub fn pop(&mut self, force: bool) -> Option<T> {
        self.pop_item(force).map(SerialItem::into_value)
    }

    /// Returns an iterator which pops every item that can be released in order without forcing,
    /// stopping at the first gap.
    ///
    /// # Examples
    /// ```
    /// # use heap_lib::collections::SerialList;
    /// let mut list = SerialList::new();
    /// for sn in [4, 1, 0, 2] {
    ///     list.push(sn, sn * 10);
    /// }
    ///
    /// let ready: Vec<_> = list.drain_ready().map(|item| item.value).collect();
    /// assert_eq!(ready, [0, 10, 20]);
    /// assert_eq!(list.next_sn(), 3);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn drain_ready(&mut self) -> DrainReady<'_, T> {
        DrainReady {
            list: self,
        }
    }
}

impl<T> Default for SerialList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<SerialItem<T>> for SerialList<T> {
    fn extend<I: IntoIterator<Item = SerialItem<T>>>(&mut self, iter: I) {
        self.heap.extend(iter);
    }
}

impl<T: Debug> Debug for SerialList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerialList")
            .field("next_sn", &self.next_sn)
            .field("exhausted", &self.exhausted)
            .field("pending", &self.heap.len())
            .field("lowest_sn", &self.peek_sn())
            .finish()
    }
}

/// An iterator draining the in-order items of a [`SerialList`]. Created by
/// [`SerialList::drain_ready`].
pub struct DrainReady<'a, T> {
    list: &'a mut SerialList<T>,
}

impl<T> Iterator for DrainReady<'_, T> {
    type Item = SerialItem<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_item(false)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.list.len()))
    }
}

impl<T> FusedIterator for DrainReady<'_, T> {}
