//! Collection types built around ordering.
//!
//! # Purpose
//! [`heap`] provides a binary heap with pluggable comparators and non-destructive top/bottom
//! selection. [`serial`] builds on it to put sequence-numbered items back into order after they
//! arrive out of order.
//!
//! # Features
//! Each module is gated behind a feature of the same name, all of which are enabled by
//! `collections-all` (the default). `serial` and `sync` both imply `heap`.

#[cfg(feature = "heap")]
pub mod heap;
#[cfg(feature = "serial")]
pub mod serial;

#[cfg(feature = "heap")]
#[doc(inline)]
pub use heap::Heap;
#[cfg(feature = "serial")]
#[doc(inline)]
pub use serial::SerialList;
