#![cfg(test)]

use super::*;

#[test]
fn test_usage() {
    let mut list = SerialList::new();
    assert_eq!(list.next_sn(), 0);
    list.push(1, 1);
    list.push(0, 2);
    list.push(3, 3);

    let item = list.pop_item(false).unwrap();
    assert_eq!((item.sn, item.value), (0, 2));
    assert_eq!(list.next_sn(), 1);

    let item = list.pop_item(false).unwrap();
    assert_eq!((item.sn, item.value), (1, 1));
    assert_eq!(list.next_sn(), 2);

    assert_eq!(list.pop_item(false), None, "Sequence number 2 is missing.");
    assert_eq!(list.next_sn(), 2, "A gap shouldn't move the cursor.");
    assert_eq!(list.len(), 1, "A gap shouldn't remove anything.");

    let item = list.pop_item(true).unwrap();
    assert_eq!((item.sn, item.value), (3, 3));
    assert_eq!(list.next_sn(), 4, "Forcing should move the cursor past the item.");

    list.push(2, 4);
    assert_eq!(list.pop_item(false), None, "A late item should be discarded as stale.");
    assert_eq!(list.next_sn(), 4);
    assert!(list.is_empty());

    list.push(4, 5);
    let item = list.pop_item(false).unwrap();
    assert_eq!((item.sn, item.value), (4, 5));
    assert_eq!(list.next_sn(), 5);
}

#[test]
fn test_shuffled_delivery() {
    let mut list = SerialList::new();
    list.push(1, "a");
    list.push(0, "b");
    list.push(3, "c");

    assert_eq!(list.pop(false), Some("b"));
    assert_eq!(list.pop(false), Some("a"));
    assert_eq!(list.pop(false), None);
    assert_eq!(list.pop(false), None, "Repeated polling shouldn't change the outcome.");
    assert_eq!(list.pop(true), Some("c"));
    assert_eq!(list.next_sn(), 4);
    assert_eq!(list.pop(true), None, "Forcing an empty list should produce nothing.");
}

#[test]
fn test_stale_discard() {
    let mut list = SerialList::new();
    for sn in 0..5 {
        list.push(sn, sn);
    }
    assert_eq!(list.drain_ready().count(), 5);

    for sn in 0..5 {
        list.push(sn, 100 + sn);
    }
    list.push(6, 6);
    assert_eq!(list.len(), 6);
    assert_eq!(list.peek_sn(), Some(0), "Stale items remain until they are reached.");

    assert_eq!(list.pop(false), None, "Stale items should never be delivered again.");
    assert_eq!(list.len(), 1, "Every stale item should have been discarded.");
    assert_eq!(list.pop(true), Some(6));
}

#[test]
fn test_duplicates() {
    let mut list = SerialList::new();
    list.push(0, 'x');
    list.push(0, 'y');
    list.push(1, 'z');

    let first = list.pop(false).unwrap();
    assert!(first == 'x' || first == 'y', "One of the duplicates should be delivered.");
    assert_eq!(list.pop(false), Some('z'), "The other duplicate should be discarded.");
    assert!(list.is_empty());
}

#[test]
fn test_starting_at() {
    let mut list = SerialList::starting_at(10);
    list.extend([(9, "old"), (11, "later"), (10, "now")].map(SerialItem::from));

    let ready: Vec<_> = list.drain_ready().map(SerialItem::into_value).collect();
    assert_eq!(ready, ["now", "later"]);
    assert_eq!(list.next_sn(), 12);
    assert!(list.is_empty(), "The stale item should be discarded while draining.");
}

#[test]
fn test_cursor_exhausts() {
    let mut list = SerialList::starting_at(u64::MAX);
    assert!(!list.is_exhausted());
    list.push_item(SerialItem::new(u64::MAX, "first"));
    assert_eq!(list.pop(false), Some("first"));
    assert_eq!(list.next_sn(), u64::MAX);
    assert!(list.is_exhausted(), "Nothing should be left to deliver after u64::MAX.");

    list.push(u64::MAX, "again");
    list.push(7, "old");
    assert_eq!(list.pop(false), None, "The last sequence number shouldn't be delivered twice.");
    list.push(u64::MAX, "again");
    assert_eq!(list.pop(true), None, "Forcing shouldn't deliver an exhausted sequence number.");
    assert!(list.is_empty(), "Everything pushed after exhaustion is stale.");
}

#[test]
fn test_forced_delivery_to_max() {
    let mut list = SerialList::new();
    list.push(u64::MAX, 'z');
    list.push(u64::MAX - 1, 'y');
    assert_eq!(list.pop(true), Some('y'));
    assert!(!list.is_exhausted());
    assert_eq!(list.pop(false), Some('z'));
    assert!(list.is_exhausted());
    assert_eq!(list.pop(true), None);
}

#[test]
fn test_debug() {
    let mut list = SerialList::new();
    list.push(3, 'a');
    assert_eq!(
        format!("{list:?}"),
        "SerialList { next_sn: 0, exhausted: false, pending: 1, lowest_sn: Some(3) }"
    );
}
