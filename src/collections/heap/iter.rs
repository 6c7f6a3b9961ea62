use std::iter::FusedIterator;
use std::vec;

use super::{Comparator, Heap};

/// A borrowed iterator over the values of a [`Heap`], in the Heap's order.
///
/// The order is captured when the iterator is created, so each call to [`Heap::iter`] produces an
/// independent snapshot.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    pub(crate) inner: vec::IntoIter<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T, C: Comparator<T>> IntoIterator for &'a Heap<T, C> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owned iterator over the values of a [`Heap`], in the Heap's order.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    pub(crate) inner: vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T, C: Comparator<T>> IntoIterator for Heap<T, C> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    /// Consumes the Heap, sorting it in place before iterating.
    ///
    /// # Panics
    /// Panics if any pair of values can't be ordered.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_sorted_vec().into_iter(),
        }
    }
}
