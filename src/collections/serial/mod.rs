//! A module containing [`SerialList`] and associated types.
//!
//! [`SerialItem`] pairs a value with its sequence number, and [`DrainReady`] iterates over every
//! item that can currently be released in order.
//!
//! [`SerialList`] is also re-exported under the parent module.

mod serial_list;
mod tests;

pub use serial_list::*;
