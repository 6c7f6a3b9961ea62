use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{Comparator, EmptyHeap, Heap, HeapError, IncomparableValues, Natural};

/// A [`Heap`] behind a lock, allowing values to be pushed and popped from multiple threads.
///
/// Each of the mutating operations holds the lock for the duration of the call only. Reads which
/// need a consistent view across several operations, such as [`Heap::headn`] or iteration, should
/// be done through the guard returned by [`lock`](SyncHeap::lock).
///
/// If a thread panics while holding the lock (such as when a comparator fails), the lock is
/// recovered rather than propagating the poison, and the Heap is left as the panicking operation
/// left it.
///
/// # Examples
/// ```
/// # use heap_lib::collections::heap::{Heap, SyncHeap};
/// # use std::sync::Arc;
/// # use std::thread;
/// let heap = Arc::new(SyncHeap::from(Heap::new()));
///
/// let handles: Vec<_> = (0..4).map(|t| {
///     let heap = Arc::clone(&heap);
///     thread::spawn(move || {
///         for i in 0..10 {
///             heap.push(t * 10 + i);
///         }
///     })
/// }).collect();
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
/// assert_eq!(heap.len(), 40);
/// assert_eq!(heap.pop(), Ok(0));
/// ```
#[derive(Debug, Default)]
pub struct SyncHeap<T, C = Natural> {
    inner: Mutex<Heap<T, C>>,
}

impl<T, C> SyncHeap<T, C> {
    pub const fn new(heap: Heap<T, C>) -> SyncHeap<T, C> {
        SyncHeap {
            inner: Mutex::new(heap),
        }
    }

    /// Acquires the lock, blocking the current thread until it is available. While the guard is
    /// held, no other thread can modify the Heap.
    pub fn lock(&self) -> MutexGuard<'_, Heap<T, C>> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("recovering heap lock poisoned by a panicking thread");
            PoisonError::into_inner(poisoned)
        })
    }

    /// Consumes the wrapper, returning the Heap inside.
    pub fn into_inner(self) -> Heap<T, C> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl<T, C: Comparator<T>> SyncHeap<T, C> {
    /// Locks the Heap and pushes `value` onto it.
    ///
    /// # Panics
    /// Panics if `value` can't be ordered relative to the values it is compared with.
    pub fn push(&self, value: T) {
        self.lock().push(value)
    }

    /// Locks the Heap and performs [`Heap::try_push`].
    pub fn try_push(&self, value: T) -> Result<(), IncomparableValues> {
        self.lock().try_push(value)
    }

    /// Locks the Heap and removes its root.
    ///
    /// # Errors
    /// Returns [`EmptyHeap`] if there are no values to remove.
    ///
    /// # Panics
    /// Panics if the values moved while restoring the heap invariant can't be ordered.
    pub fn pop(&self) -> Result<T, EmptyHeap> {
        self.lock().pop()
    }

    /// Locks the Heap and performs [`Heap::try_pop`].
    pub fn try_pop(&self) -> Result<T, HeapError> {
        self.lock().try_pop()
    }

    /// Locks the Heap and performs [`Heap::edge_out`].
    ///
    /// # Panics
    /// Panics if `value` can't be ordered relative to the values it is compared with.
    pub fn edge_out(&self, value: T) -> T {
        self.lock().edge_out(value)
    }

    /// Locks the Heap and performs [`Heap::try_edge_out`].
    pub fn try_edge_out(&self, value: T) -> Result<T, IncomparableValues> {
        self.lock().try_edge_out(value)
    }

    /// Locks the Heap and performs [`Heap::replace_root`].
    ///
    /// # Errors
    /// Returns [`EmptyHeap`] if there is no root to replace.
    ///
    /// # Panics
    /// Panics if `value` can't be ordered relative to the values it is compared with.
    pub fn replace_root(&self, value: T) -> Result<T, EmptyHeap> {
        self.lock().replace_root(value)
    }

    /// Locks the Heap and performs [`Heap::try_replace_root`].
    pub fn try_replace_root(&self, value: T) -> Result<T, HeapError> {
        self.lock().try_replace_root(value)
    }
}

impl<T, C> From<Heap<T, C>> for SyncHeap<T, C> {
    fn from(value: Heap<T, C>) -> Self {
        SyncHeap::new(value)
    }
}

impl<T, C> Heap<T, C> {
    /// Moves the Heap behind a lock, so that it can be shared between threads.
    pub const fn into_sync(self) -> SyncHeap<T, C> {
        SyncHeap::new(self)
    }
}
