//! Binary heap primitives over plain slices.
//!
//! Each function takes a `precedes` predicate returning whether its first argument belongs closer
//! to the root than its second. The predicate is fallible so that comparison failures abort the
//! sift and propagate to the caller. Positions use 0-based indexing, with the children of `i` at
//! `2i + 1` and `2i + 2`.

use super::IncomparableValues;

pub(crate) const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

pub(crate) const fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Moves the element at `index` towards the root until its parent precedes it.
pub(crate) fn sift_up<E, F>(
    data: &mut [E],
    mut index: usize,
    precedes: &mut F,
) -> Result<(), IncomparableValues>
where
    F: FnMut(&E, &E) -> Result<bool, IncomparableValues>,
{
    while index > 0 {
        let parent = parent(index);
        if !precedes(&data[index], &data[parent])? {
            break;
        }
        data.swap(index, parent);
        index = parent;
    }
    Ok(())
}

/// Moves the element at `index` away from the root until it precedes both of its children.
pub(crate) fn sift_down<E, F>(
    data: &mut [E],
    mut index: usize,
    precedes: &mut F,
) -> Result<(), IncomparableValues>
where
    F: FnMut(&E, &E) -> Result<bool, IncomparableValues>,
{
    let len = data.len();
    loop {
        let left = left_child(index);
        if left >= len {
            break;
        }

        let right = left + 1;
        let child = if right < len && precedes(&data[right], &data[left])? {
            right
        } else {
            left
        };

        if !precedes(&data[child], &data[index])? {
            break;
        }
        data.swap(index, child);
        index = child;
    }
    Ok(())
}

/// Establishes the heap invariant over the whole slice in `O(n)`.
pub(crate) fn heapify<E, F>(data: &mut [E], precedes: &mut F) -> Result<(), IncomparableValues>
where
    F: FnMut(&E, &E) -> Result<bool, IncomparableValues>,
{
    for index in (0..data.len() / 2).rev() {
        sift_down(data, index, precedes)?;
    }
    Ok(())
}

/// Removes and returns the root of a heap-ordered Vec, restoring the invariant afterwards.
pub(crate) fn pop_root<E, F>(
    data: &mut Vec<E>,
    precedes: &mut F,
) -> Result<Option<E>, IncomparableValues>
where
    F: FnMut(&E, &E) -> Result<bool, IncomparableValues>,
{
    match data.pop() {
        Some(last) => exchange_root(data, last, precedes).map(Some),
        None => Ok(None),
    }
}

/// Puts `value` in place of the root of a heap-ordered Vec and sifts it down, returning the old
/// root. With `value` taken from the end of the Vec, this is a pop.
///
/// The old root is only removed once the sift has succeeded. On failure it is moved back to index
/// 0 and `value` stays somewhere in the Vec, so no element is lost.
pub(crate) fn exchange_root<E, F>(
    data: &mut Vec<E>,
    value: E,
    precedes: &mut F,
) -> Result<E, IncomparableValues>
where
    F: FnMut(&E, &E) -> Result<bool, IncomparableValues>,
{
    data.push(value);
    let last = data.len() - 1;

    // The old root waits at the end until the sift is done.
    data.swap(0, last);
    if let Err(error) = sift_down(&mut data[..last], 0, precedes) {
        data.swap(0, last);
        return Err(error);
    }
    Ok(data.swap_remove(last))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn less(a: &i32, b: &i32) -> Result<bool, IncomparableValues> {
        Ok(a < b)
    }

    fn is_heap(data: &[i32]) -> bool {
        (1..data.len()).all(|i| data[parent(i)] <= data[i])
    }

    #[test]
    fn test_heapify_and_pop() {
        let mut data = vec![9, 4, 7, 1, 8, 2, 2, 6];
        heapify(&mut data, &mut less).unwrap();
        assert!(is_heap(&data), "Heapify should establish the invariant.");

        let mut popped = Vec::new();
        while let Some(root) = pop_root(&mut data, &mut less).unwrap() {
            assert!(is_heap(&data), "Popping should preserve the invariant.");
            popped.push(root);
        }
        assert_eq!(popped, [1, 2, 2, 4, 6, 7, 8, 9]);
    }

    #[test]
    fn test_sift_up() {
        let mut data = vec![1, 3, 5, 7, 9];
        data.push(0);
        let last = data.len() - 1;
        sift_up(&mut data, last, &mut less).unwrap();
        assert_eq!(data[0], 0, "A new minimum should reach the root.");
        assert!(is_heap(&data));
    }

    #[test]
    fn test_failed_pop_keeps_root() {
        let mut data = vec![1, 2, 3, 4, 5];
        let mut calls = 0;
        let mut fail_second = |a: &i32, b: &i32| {
            calls += 1;
            if calls == 2 {
                Err(IncomparableValues)
            } else {
                Ok(a < b)
            }
        };

        let result = pop_root(&mut data, &mut fail_second);
        assert_eq!(result, Err(IncomparableValues));
        assert_eq!(data.len(), 5, "A failed pop shouldn't remove anything.");
        assert_eq!(data[0], 1, "The root should be back in place.");

        let mut sorted = data.clone();
        sorted.sort();
        assert_eq!(sorted, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_failing_predicate() {
        let mut data = vec![3, 2, 1];
        let result = heapify(&mut data, &mut |_: &i32, _: &i32| Err(IncomparableValues));
        assert_eq!(result, Err(IncomparableValues), "Comparison failures should propagate.");
    }
}
