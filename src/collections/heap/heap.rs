use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Index;

use super::compare::Order;
use super::sift;
use super::{ByKey, Comparator, EmptyHeap, HeapError, IncomparableValues, Iter, Natural};
use crate::util::result::ResultExtension;

/// A binary heap, ordered by a [`Comparator`] and an optional reversal.
///
/// With the default [`Natural`] comparator and `reverse == false`, this is a min-heap: the root is
/// the smallest value and sorted iteration is ascending. Reversing the heap turns it into a
/// max-heap. Values can instead be ordered by a projection onto a key with [`ByKey`].
///
/// Keys only need to be [`PartialOrd`]. Methods which compare values come in pairs: the `try_`
/// variant reports [`IncomparableValues`] and the plain variant panics with it, as a pair of keys
/// without an order indicates that the heap was configured incorrectly.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Heap.
/// - `k`: The number of items requested.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `push` | `O(log n)` |
/// | `pop` | `O(log n)` |
/// | `edge_out` | `O(log n)` |
/// | `replace_root` | `O(log n)` |
/// | `headn` | `O(k log k)` |
/// | `tailn` | `O(n + k log n)` |
/// | `iter` | `O(n log n)` |
/// | `from_iter_with` | `O(n)` |
pub struct Heap<T, C = Natural> {
    pub(crate) data: Vec<T>,
    pub(crate) order: Order<C>,
}

impl<T> Heap<T, Natural> {
    /// Creates a new, empty min-heap which compares values directly.
    ///
    /// # Examples
    /// ```
    /// # use heap_lib::collections::heap::Heap;
    /// let mut heap = Heap::new();
    /// heap.push(3);
    /// heap.push(1);
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    pub const fn new() -> Heap<T, Natural> {
        Heap {
            data: Vec::new(),
            order: Order::new(Natural, false),
        }
    }
}

impl<T, K, F> Heap<T, ByKey<F>>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    /// Creates a new, empty Heap which orders values by the key returned from `key`.
    ///
    /// # Examples
    /// ```
    /// # use heap_lib::collections::heap::Heap;
    /// let mut heap = Heap::with_key(|word: &&str| word.len(), true);
    /// heap.extend(["a", "abc", "ab"]);
    /// assert_eq!(heap.pop(), Ok("abc"));
    /// ```
    pub fn with_key(key: F, reverse: bool) -> Heap<T, ByKey<F>> {
        Heap::with_comparator(ByKey(key), reverse)
    }
}

impl<T, C> Heap<T, C> {
    /// Creates a new, empty Heap using the provided comparator. If `reverse` is true, the order
    /// described by the comparator is inverted, so that the greatest value sits at the root.
    pub const fn with_comparator(comparator: C, reverse: bool) -> Heap<T, C> {
        Heap {
            data: Vec::new(),
            order: Order::new(comparator, reverse),
        }
    }

    /// Returns the number of elements in the Heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the Heap contains no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the root of the Heap, which is the first value in its order, without removing it.
    ///
    /// # Examples
    /// ```
    /// # use heap_lib::collections::heap::{Heap, Natural};
    /// let heap = Heap::from_iter_with([4, 9, 2], Natural, true);
    /// assert_eq!(heap.peek(), Some(&9));
    /// ```
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns true if the comparator's order is inverted for this Heap.
    pub const fn is_reversed(&self) -> bool {
        self.order.reverse
    }

    /// Returns the comparator used to order the Heap, before any reversal.
    pub const fn comparator(&self) -> &C {
        &self.order.comparator
    }

    /// Returns the underlying storage in heap order. Only the first element has a defined
    /// position.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Removes all values from the Heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T, C: Comparator<T>> Heap<T, C> {
    /// Creates a Heap from the provided values and ordering, heapifying them in `O(n)`.
    ///
    /// # Panics
    /// Panics if the comparator is unable to order any pair of values it is given.
    ///
    /// # Examples
    /// ```
    /// # use heap_lib::collections::heap::{ByKey, Heap};
    /// let heap = Heap::from_iter_with([(1, 'b'), (0, 'c'), (2, 'a')], ByKey(|p: &(i32, char)| p.1), false);
    /// assert_eq!(heap.peek(), Some(&(2, 'a')));
    /// ```
    pub fn from_iter_with<I>(iter: I, comparator: C, reverse: bool) -> Heap<T, C>
    where
        I: IntoIterator<Item = T>,
    {
        Heap::try_from_iter_with(iter, comparator, reverse).throw()
    }

    /// Creates a Heap from the provided values and ordering, returning an error if any pair of
    /// values could not be ordered.
    pub fn try_from_iter_with<I>(
        iter: I,
        comparator: C,
        reverse: bool,
    ) -> Result<Heap<T, C>, IncomparableValues>
    where
        I: IntoIterator<Item = T>,
    {
        let mut heap = Heap {
            data: iter.into_iter().collect(),
            order: Order::new(comparator, reverse),
        };

        let order = &heap.order;
        sift::heapify(&mut heap.data, &mut |a, b| order.precedes(a, b))?;
        Ok(heap)
    }

    /// Pushes `value` onto the Heap.
    ///
    /// # Panics
    /// Panics if `value` can't be ordered relative to the values it is compared with.
    ///
    /// # Examples
    /// ```
    /// # use heap_lib::collections::heap::Heap;
    /// let mut heap = Heap::new();
    /// for i in [5, 3, 8] {
    ///     heap.push(i);
    /// }
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek(), Some(&3));
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Pushes `value` onto the Heap, returning an error if it couldn't be ordered. The value
    /// remains in the Heap after an error, but its position is unspecified.
    pub fn try_push(&mut self, value: T) -> Result<(), IncomparableValues> {
        self.data.push(value);
        let last = self.data.len() - 1;

        let order = &self.order;
        sift::sift_up(&mut self.data, last, &mut |a, b| order.precedes(a, b))
    }

    /// Removes and returns the root of the Heap.
    ///
    /// # Errors
    /// Returns [`EmptyHeap`] if there are no values to remove.
    ///
    /// # Panics
    /// Panics if the values moved while restoring the heap invariant can't be ordered.
    ///
    /// # Examples
    /// ```
    /// # use heap_lib::collections::heap::{EmptyHeap, Heap};
    /// let mut heap: Heap<_> = [2, 1].into_iter().collect();
    /// assert_eq!(heap.pop(), Ok(1));
    /// assert_eq!(heap.pop(), Ok(2));
    /// assert_eq!(heap.pop(), Err(EmptyHeap));
    /// ```
    pub fn pop(&mut self) -> Result<T, EmptyHeap> {
        if self.is_empty() {
            return Err(EmptyHeap);
        }
        // An empty heap has already been ruled out, so any error left is IncomparableValues.
        Ok(self.try_pop().throw())
    }

    /// Removes and returns the root of the Heap, reporting either kind of [`HeapError`]. If the
    /// values can't be ordered, nothing is removed and the root is left in place.
    pub fn try_pop(&mut self) -> Result<T, HeapError> {
        let order = &self.order;
        sift::pop_root(&mut self.data, &mut |a, b| order.precedes(a, b))?
            .ok_or(HeapError::EmptyHeap(EmptyHeap))
    }

    /// Pushes `value` and then removes and returns the root in a single `O(log n)` step. This keeps
    /// the length of the Heap unchanged, making it suitable for maintaining a bounded window of the
    /// last `k` values seen in the Heap's order.
    ///
    /// If the Heap is empty or `value` would become the new root, `value` itself is returned.
    ///
    /// # Panics
    /// Panics if `value` can't be ordered relative to the values it is compared with.
    ///
    /// # Examples
    /// ```
    /// # use heap_lib::collections::heap::Heap;
    /// // Keep the three largest values seen.
    /// let mut window: Heap<_> = [0, 0, 0].into_iter().collect();
    /// for i in [5, 1, 9, 7, 3] {
    ///     window.edge_out(i);
    /// }
    /// assert_eq!(window.into_sorted_vec(), [5, 7, 9]);
    /// ```
    pub fn edge_out(&mut self, value: T) -> T {
        self.try_edge_out(value).throw()
    }

    /// Performs [`edge_out`](Heap::edge_out), returning an error if `value` couldn't be ordered.
    /// On error no value is lost: `value` is kept in the Heap at an unspecified position, as with
    /// [`try_push`](Heap::try_push), and the root stays in place.
    pub fn try_edge_out(&mut self, value: T) -> Result<T, IncomparableValues> {
        let Some(root) = self.data.first() else {
            return Ok(value);
        };

        match self.order.precedes(root, &value) {
            Ok(true) => {},
            Ok(false) => return Ok(value),
            Err(error) => {
                self.data.push(value);
                return Err(error);
            },
        }

        let order = &self.order;
        sift::exchange_root(&mut self.data, value, &mut |a, b| order.precedes(a, b))
    }

    /// Removes and returns the root and then pushes `value`, in a single `O(log n)` step. Unlike
    /// [`edge_out`](Heap::edge_out), the previous root is returned even if `value` would have
    /// preceded it.
    ///
    /// # Errors
    /// Returns [`EmptyHeap`] if there is no root to replace, in which case `value` is dropped.
    ///
    /// # Panics
    /// Panics if `value` can't be ordered relative to the values it is compared with.
    ///
    /// # Examples
    /// ```
    /// # use heap_lib::collections::heap::Heap;
    /// let mut heap: Heap<_> = [4, 6].into_iter().collect();
    /// assert_eq!(heap.replace_root(1), Ok(4));
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    pub fn replace_root(&mut self, value: T) -> Result<T, EmptyHeap> {
        if self.is_empty() {
            return Err(EmptyHeap);
        }
        Ok(self.try_replace_root(value).throw())
    }

    /// Performs [`replace_root`](Heap::replace_root), reporting either kind of [`HeapError`]. If
    /// the values can't be ordered, the previous root stays in place and `value` is kept in the
    /// Heap at an unspecified position, as with [`try_push`](Heap::try_push).
    pub fn try_replace_root(&mut self, value: T) -> Result<T, HeapError> {
        if self.is_empty() {
            return Err(EmptyHeap.into());
        }

        let order = &self.order;
        Ok(sift::exchange_root(&mut self.data, value, &mut |a, b| order.precedes(a, b))?)
    }

    /// Returns references to the first `n` values in the Heap's order, without removing them. If
    /// `n` exceeds the length of the Heap, all values are returned.
    ///
    /// # Panics
    /// Panics if any of the values visited can't be ordered.
    ///
    /// # Examples
    /// ```
    /// # use heap_lib::collections::heap::{Heap, Natural};
    /// let heap: Heap<_> = [3, 1, 17, 25, 19].into_iter().collect();
    /// assert_eq!(heap.headn(3), [&1, &3, &17]);
    ///
    /// let heap = Heap::from_iter_with([3, 1, 17, 25, 19], Natural, true);
    /// assert_eq!(heap.headn(3), [&25, &19, &17]);
    /// ```
    pub fn headn(&self, n: usize) -> Vec<&T> {
        self.try_headn(n).throw()
    }

    /// Performs [`headn`](Heap::headn), returning an error if any values couldn't be ordered.
    pub fn try_headn(&self, n: usize) -> Result<Vec<&T>, IncomparableValues> {
        let n = n.min(self.len());
        let mut head = Vec::with_capacity(n);
        if n == 0 {
            return Ok(head);
        }

        // Walk the existing heap best-first, keeping the indices of the candidates that could come
        // next in a heap of their own. Only the root and the children of taken values qualify.
        let data = &self.data;
        let order = &self.order;
        let mut precedes = |a: &usize, b: &usize| order.precedes(&data[*a], &data[*b]);

        let mut frontier = Vec::with_capacity(n + 1);
        frontier.push(0_usize);

        while head.len() < n {
            let Some(index) = sift::pop_root(&mut frontier, &mut precedes)? else {
                break;
            };
            head.push(&data[index]);

            let left = sift::left_child(index);
            for child in [left, left + 1] {
                if child < data.len() {
                    frontier.push(child);
                    let last = frontier.len() - 1;
                    sift::sift_up(&mut frontier, last, &mut precedes)?;
                }
            }
        }

        Ok(head)
    }

    /// Returns references to the last `n` values in the Heap's order, without removing them. The
    /// values are ordered last-first, so `tailn(n)` is the reverse of the final `n` values produced
    /// by iteration.
    ///
    /// # Panics
    /// Panics if any pair of values can't be ordered.
    ///
    /// # Examples
    /// ```
    /// # use heap_lib::collections::heap::{Heap, Natural};
    /// let heap: Heap<_> = [3, 1, 17, 25, 19].into_iter().collect();
    /// assert_eq!(heap.tailn(3), [&25, &19, &17]);
    ///
    /// let heap = Heap::from_iter_with([3, 1, 17, 25, 19], Natural, true);
    /// assert_eq!(heap.tailn(3), [&1, &3, &17]);
    /// ```
    pub fn tailn(&self, n: usize) -> Vec<&T> {
        self.try_tailn(n).throw()
    }

    /// Performs [`tailn`](Heap::tailn), returning an error if any values couldn't be ordered.
    pub fn try_tailn(&self, n: usize) -> Result<Vec<&T>, IncomparableValues> {
        let n = n.min(self.len());
        if n == 0 {
            return Ok(Vec::new());
        }

        // The last values are spread across the leaves, so build an inverted heap of references
        // and take from that instead.
        let order = &self.order;
        let mut follows = |a: &&T, b: &&T| order.precedes(*b, *a);

        let mut refs: Vec<&T> = self.data.iter().collect();
        sift::heapify(&mut refs, &mut follows)?;

        let mut tail = Vec::with_capacity(n);
        while tail.len() < n {
            match sift::pop_root(&mut refs, &mut follows)? {
                Some(value) => tail.push(value),
                None => break,
            }
        }

        Ok(tail)
    }

    /// Returns a borrowed iterator over every value in the Heap's order. A new snapshot of the
    /// order is taken each time this is called.
    ///
    /// # Panics
    /// Panics if any pair of values can't be ordered.
    ///
    /// # Examples
    /// ```
    /// # use heap_lib::collections::heap::Heap;
    /// let heap: Heap<_> = [2, 3, 1, 17, 19, 100, 25, 17, 36].into_iter().collect();
    /// let sorted: Vec<_> = heap.iter().copied().collect();
    /// assert_eq!(sorted, [1, 2, 3, 17, 17, 19, 25, 36, 100]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        self.try_iter().throw()
    }

    /// Performs [`iter`](Heap::iter), returning an error if any values couldn't be ordered.
    pub fn try_iter(&self) -> Result<Iter<'_, T>, IncomparableValues> {
        Ok(Iter {
            inner: self.try_headn(self.len())?.into_iter(),
        })
    }

    /// Consumes the Heap, returning its values as a Vec in the Heap's order. This sorts in place,
    /// without allocating.
    ///
    /// # Panics
    /// Panics if any pair of values can't be ordered.
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.try_into_sorted_vec().throw()
    }

    /// Performs [`into_sorted_vec`](Heap::into_sorted_vec), returning an error if any values
    /// couldn't be ordered.
    pub fn try_into_sorted_vec(self) -> Result<Vec<T>, IncomparableValues> {
        let Heap { mut data, order } = self;
        let mut precedes = |a: &T, b: &T| order.precedes(a, b);

        // Repeatedly move the root behind the shrinking heap, which leaves the values in reverse.
        for end in (1..data.len()).rev() {
            data.swap(0, end);
            sift::sift_down(&mut data[..end], 0, &mut precedes)?;
        }
        data.reverse();

        Ok(data)
    }
}

impl<T, C: Comparator<T>> Extend<T> for Heap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);

        for value in iter {
            self.push(value);
        }
    }
}

impl<T: PartialOrd> FromIterator<T> for Heap<T, Natural> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Heap::from_iter_with(iter, Natural, false)
    }
}

impl<T: PartialOrd> From<Vec<T>> for Heap<T, Natural> {
    fn from(value: Vec<T>) -> Self {
        Heap::from_iter_with(value, Natural, false)
    }
}

impl<T, C: Default> Default for Heap<T, C> {
    fn default() -> Self {
        Heap::with_comparator(C::default(), false)
    }
}

impl<T: Clone, C: Clone> Clone for Heap<T, C> {
    fn clone(&self) -> Self {
        Heap {
            data: self.data.clone(),
            order: self.order.clone(),
        }
    }
}

impl<T, C> Index<usize> for Heap<T, C> {
    type Output = T;

    /// Indexes into the underlying storage, which is in heap order rather than sorted order.
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T, C> AsRef<[T]> for Heap<T, C> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Debug, C> Debug for Heap<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("contents", &self.data)
            .field("len", &self.len())
            .field("reverse", &self.order.reverse)
            .finish()
    }
}

/// Formats the values in the Heap's order, prefixed with `^`. If some values can't be ordered,
/// they are written in storage order instead, without the prefix.
impl<T: Debug, C: Comparator<T>> Display for Heap<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.try_headn(self.len()) {
            Ok(sorted) => {
                write!(f, "^")?;
                f.debug_list().entries(sorted).finish()
            },
            Err(_) => f.debug_list().entries(&self.data).finish(),
        }
    }
}
