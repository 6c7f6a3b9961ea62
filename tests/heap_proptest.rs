//! Property-based tests for Heap and SerialList
//!
//! These check the ordering guarantees against a plain sort over arbitrary inputs, rather than the
//! handful of fixed cases covered by the unit tests.

use heap_lib::collections::heap::{ByKey, Heap, Natural};
use heap_lib::collections::serial::SerialList;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    EdgeOut(i32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i32>().prop_map(Op::Push),
        2 => Just(Op::Pop),
        1 => any::<i32>().prop_map(Op::EdgeOut),
    ]
}

proptest! {
    #[test]
    fn head_is_extremal_after_any_ops(ops in prop::collection::vec(op(), 0..64), reverse: bool) {
        let mut heap = Heap::with_comparator(Natural, reverse);
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Push(value) => {
                    heap.push(value);
                    model.push(value);
                }
                Op::Pop => {
                    model.sort();
                    let expected = match (reverse, model.is_empty()) {
                        (_, true) => None,
                        (true, false) => model.pop(),
                        (false, false) => Some(model.remove(0)),
                    };
                    prop_assert_eq!(heap.pop().ok(), expected);
                }
                Op::EdgeOut(value) => {
                    model.push(value);
                    model.sort();
                    let expected = if reverse { model.pop() } else { Some(model.remove(0)) };
                    prop_assert_eq!(Some(heap.edge_out(value)), expected);
                }
            }

            let extremal = if reverse { model.iter().max() } else { model.iter().min() };
            prop_assert_eq!(heap.headn(1).first().copied(), extremal);
            prop_assert_eq!(heap.len(), model.len());
        }
    }

    #[test]
    fn selection_matches_sort(values in prop::collection::vec(-50_i32..50, 0..48), n in 0_usize..64, reverse: bool) {
        let heap = Heap::from_iter_with(values.clone(), Natural, reverse);

        let mut sorted = values;
        sorted.sort();
        if reverse {
            sorted.reverse();
        }

        let iterated: Vec<i32> = heap.iter().copied().collect();
        prop_assert_eq!(&iterated, &sorted);

        let take = n.min(sorted.len());
        let head: Vec<i32> = heap.headn(n).into_iter().copied().collect();
        prop_assert_eq!(&head[..], &sorted[..take]);

        let tail: Vec<i32> = heap.tailn(n).into_iter().copied().collect();
        let expected: Vec<i32> = sorted.iter().rev().take(take).copied().collect();
        prop_assert_eq!(tail, expected);

        prop_assert_eq!(heap.into_sorted_vec(), sorted);
    }

    #[test]
    fn key_projection_orders_by_key(pairs in prop::collection::vec((0_u8..10, any::<u16>()), 0..32)) {
        let heap = Heap::from_iter_with(pairs.clone(), ByKey(|pair: &(u8, u16)| pair.0), false);
        let keys: Vec<u8> = heap.iter().map(|pair| pair.0).collect();

        let mut expected: Vec<u8> = pairs.iter().map(|pair| pair.0).collect();
        expected.sort();
        prop_assert_eq!(keys, expected);
    }

    #[test]
    fn serial_list_releases_in_order(mut sns in Just((0_u64..40).collect::<Vec<_>>()).prop_shuffle(), duplicates in prop::collection::vec(0_u64..40, 0..10)) {
        sns.extend(duplicates);

        let mut list = SerialList::new();
        let mut delivered = Vec::new();
        for sn in sns {
            list.push(sn, sn);
            delivered.extend(list.drain_ready().map(|item| item.sn));
        }

        prop_assert_eq!(delivered, (0_u64..40).collect::<Vec<_>>());
        prop_assert!(list.is_empty() || list.pop(true).is_none());
        prop_assert_eq!(list.next_sn(), 40);
    }

    #[test]
    fn forced_delivery_never_goes_backwards(sns in prop::collection::vec(0_u64..100, 0..64)) {
        let mut list = SerialList::new();
        for sn in &sns {
            list.push(*sn, ());
        }

        let mut last: Option<u64> = None;
        while let Some(item) = list.pop_item(true) {
            prop_assert!(last.is_none_or(|last| item.sn > last), "sequence numbers must strictly increase");
            prop_assert_eq!(list.next_sn(), item.sn + 1);
            last = Some(item.sn);
        }
        prop_assert!(list.is_empty());
    }
}
