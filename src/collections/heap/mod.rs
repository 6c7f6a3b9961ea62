//! A module containing [`Heap`] and associated types.
//!
//! The ordering of a Heap is described by a [`Comparator`], either [`Natural`] for values which
//! are compared directly or [`ByKey`] for values compared through a projection. Iteration is
//! provided by [`Iter`] and [`IntoIter`], both of which yield values in the Heap's order rather
//! than storage order.
//!
//! With the `sync` feature, [`SyncHeap`] wraps a Heap in a lock so that it can be shared between
//! threads.
//!
//! [`Heap`] is also re-exported under the parent module.

mod compare;
mod error;
mod heap;
mod iter;
mod sift;
#[cfg(feature = "sync")]
mod sync;

pub use compare::{ByKey, Comparator, Natural};
pub use error::*;
pub use heap::*;
pub use iter::*;
#[cfg(feature = "sync")]
pub use sync::*;
