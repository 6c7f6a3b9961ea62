//! A small collection library built around a configurable binary heap.
//!
//! # Purpose
//! This crate provides [`Heap`](collections::heap::Heap), a binary heap which can be ordered
//! naturally, by a projected key or in reverse, and which can report its first or last `k` values
//! without being consumed. On top of it sits [`SerialList`](collections::serial::SerialList),
//! which puts sequence-numbered values back into order after they arrive out of order.
//!
//! # Method
//! The heap stores values directly in a [`Vec`] and holds its ordering as a
//! [`Comparator`](collections::heap::Comparator), rather than wrapping each value in something
//! that knows how to compare itself. All of the sifting is done over plain slices, so the same
//! primitives also drive the non-destructive `headn` and `tailn` selections.
//!
//! # Error Handling
//! Keys only need to implement [`PartialOrd`], so two keys might have no order (`NaN` being the
//! usual culprit). Every operation which compares values has a `try_` variant that reports this as
//! [`IncomparableValues`](collections::heap::IncomparableValues), while the plain variant panics
//! with it. Having to handle a comparison error on every push would be unergonomic for the common
//! case where keys are totally ordered and the error is impossible.
//!
//! Removing from an empty heap is an expected condition rather than a bug, so
//! [`pop`](collections::heap::Heap::pop) always returns a [`Result`] with
//! [`EmptyHeap`](collections::heap::EmptyHeap). [`SerialList`](collections::serial::SerialList)
//! has no errors at all: an item that isn't ready yet is simply [`None`].
//!
//! # Logging
//! Events are emitted through [`tracing`] and are only visible if the application installs a
//! subscriber. [`SerialList`](collections::serial::SerialList) logs stale discards at `TRACE` and
//! forced gap skips at `DEBUG`.
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
