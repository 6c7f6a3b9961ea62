use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// Returned when removing the root of a [`Heap`](super::Heap) that contains no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyHeap;

impl Display for EmptyHeap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to take the root of a Heap with no elements!")
    }
}

impl Error for EmptyHeap {}

/// Returned when a [`Comparator`](super::Comparator) is unable to order two values, such as a pair
/// of keys where one is `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncomparableValues;

impl Display for IncomparableValues {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Heap keys have no defined order relative to one another!")
    }
}

impl Error for IncomparableValues {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum HeapError {
    EmptyHeap(EmptyHeap),
    IncomparableValues(IncomparableValues),
}
