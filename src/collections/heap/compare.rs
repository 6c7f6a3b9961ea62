use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};

use super::IncomparableValues;

/// An ordering policy used by a [`Heap`](super::Heap) to decide which of two values comes first.
///
/// The heap applies its own `reverse` flag on top of the result, so implementors should always
/// describe ascending order.
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`, failing if the two have no defined order.
    fn try_compare(&self, a: &T, b: &T) -> Result<Ordering, IncomparableValues>;
}

/// Compares values directly, using their [`PartialOrd`] implementation.
///
/// # Examples
/// ```
/// # use heap_lib::collections::heap::{Comparator, Natural};
/// # use std::cmp::Ordering;
/// assert_eq!(Natural.try_compare(&1, &2), Ok(Ordering::Less));
/// assert!(Natural.try_compare(&f64::NAN, &1.0).is_err());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<T: PartialOrd + ?Sized> Comparator<T> for Natural {
    fn try_compare(&self, a: &T, b: &T) -> Result<Ordering, IncomparableValues> {
        a.partial_cmp(b).ok_or(IncomparableValues)
    }
}

/// Projects each value through a key function before comparing the resulting keys.
///
/// Keys built from several fields can be expressed by returning a tuple, which orders
/// lexicographically.
///
/// # Examples
/// ```
/// # use heap_lib::collections::heap::{ByKey, Comparator};
/// # use std::cmp::Ordering;
/// let by_len = ByKey(|s: &&str| s.len());
/// assert_eq!(by_len.try_compare(&"abc", &"z"), Ok(Ordering::Greater));
///
/// let by_len_then_text = ByKey(|s: &&str| (s.len(), s.to_string()));
/// assert_eq!(by_len_then_text.try_compare(&"ab", &"aa"), Ok(Ordering::Greater));
/// ```
#[derive(Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Comparator<T> for ByKey<F>
where
    T: ?Sized,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    fn try_compare(&self, a: &T, b: &T) -> Result<Ordering, IncomparableValues> {
        (self.0)(a).partial_cmp(&(self.0)(b)).ok_or(IncomparableValues)
    }
}

impl<F> Debug for ByKey<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ByKey").field(&std::any::type_name::<F>()).finish()
    }
}

/// A [`Comparator`] paired with the direction it is applied in.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Order<C> {
    pub(crate) comparator: C,
    pub(crate) reverse: bool,
}

impl<C> Order<C> {
    pub(crate) const fn new(comparator: C, reverse: bool) -> Order<C> {
        Order {
            comparator,
            reverse,
        }
    }

    pub(crate) fn compare<T: ?Sized>(&self, a: &T, b: &T) -> Result<Ordering, IncomparableValues>
    where
        C: Comparator<T>,
    {
        let ordering = self.comparator.try_compare(a, b)?;
        Ok(if self.reverse { ordering.reverse() } else { ordering })
    }

    /// Returns true if `a` belongs strictly closer to the root than `b`.
    pub(crate) fn precedes<T: ?Sized>(&self, a: &T, b: &T) -> Result<bool, IncomparableValues>
    where
        C: Comparator<T>,
    {
        self.compare(a, b).map(Ordering::is_lt)
    }
}
