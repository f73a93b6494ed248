use aa_tree::{Error, OrderedTree};
use compare::{Compare, natural};

fn items<C>(tree: &OrderedTree<i32, C>) -> Vec<i32> where C: Compare<i32> {
    tree.iter().cloned().collect()
}

#[test]
fn insert_remove_clear() {
    let mut tree = OrderedTree::new();
    for &item in &[5, 3, 7, 2, 4, 6, 8] { tree.insert(item).unwrap(); }

    assert_eq!(tree.len(), 7);
    assert!(!tree.is_empty());
    assert!(tree.contains(&5));
    assert!(!tree.contains(&9));
    assert_eq!(items(&tree), [2, 3, 4, 5, 6, 7, 8]);

    assert!(tree.remove(&3));
    assert!(tree.remove(&7));
    assert_eq!(tree.len(), 5);
    assert!(!tree.contains(&3));
    assert!(!tree.contains(&7));
    assert_eq!(items(&tree), [2, 4, 5, 6, 8]);

    tree.clear();
    assert_eq!(tree.len(), 0);
    assert!(tree.is_empty());
    tree.clear();
    assert!(tree.is_empty());
}

#[test]
fn construct_from_sequence() {
    let tree = OrderedTree::from_seq(vec![10, 30, 20, 15, 25]).unwrap();
    assert_eq!(items(&tree), [10, 15, 20, 25, 30]);
    assert_eq!(tree.iter().rev().cloned().collect::<Vec<_>>(), [30, 25, 20, 15, 10]);

    let mut reversed = vec![];
    let mut cursor = tree.end();
    cursor.move_prev().unwrap();
    while cursor != tree.begin() {
        reversed.push(*cursor.get().unwrap());
        cursor.move_prev().unwrap();
    }
    reversed.push(*cursor.get().unwrap());
    assert_eq!(reversed, [30, 25, 20, 15, 10]);
}

#[test]
fn construct_from_sequence_with_duplicate_fails() {
    assert_eq!(OrderedTree::from_seq(vec![1, 2, 3, 2]), Err(Error::DuplicateElement(2)));
}

#[test]
fn duplicate_insert_is_rejected() {
    let mut tree = OrderedTree::new();
    tree.insert(5).unwrap();
    assert_eq!(tree.insert(5), Err(Error::DuplicateElement(5)));
    assert_eq!(tree.len(), 1);
}

#[test]
fn remove_absent_is_benign() {
    let mut tree = OrderedTree::from_seq(vec![1, 2]).unwrap();
    assert!(!tree.remove(&3));
    assert_eq!(tree.take(&3), None);
    assert_eq!(items(&tree), [1, 2]);

    let mut empty: OrderedTree<i32> = OrderedTree::new();
    assert!(!empty.remove(&1));
}

#[test]
fn cursor_bounds() {
    let tree = OrderedTree::from_seq(vec![1, 2]).unwrap();

    let mut end = tree.end();
    assert_eq!(end.get(), Err(Error::InvalidDereference));
    assert_eq!(end.move_next(), Err(Error::InvalidAdvance));
    assert!(end.is_end());

    let mut begin = tree.begin();
    assert_eq!(begin.move_prev(), Err(Error::InvalidAdvance));
    assert_eq!(begin.get(), Ok(&1));

    let empty: OrderedTree<i32> = OrderedTree::new();
    assert!(empty.begin() == empty.end());
    let mut cursor = empty.end();
    assert_eq!(cursor.move_prev(), Err(Error::InvalidAdvance));
    assert!(cursor.is_end());
}

#[test]
fn cursor_equality_is_by_position() {
    let tree = OrderedTree::from_seq(vec![3, 1, 2]).unwrap();

    let mut a = tree.begin();
    let b = tree.cursor(&2);
    assert!(a != b);
    a.move_next().unwrap();
    assert!(a == b);
    assert!(tree.cursor(&9) == tree.end());
}

#[test]
fn custom_comparator() {
    let mut tree = OrderedTree::with_cmp(natural().rev());
    tree.try_extend(vec![1, 3, 2]).unwrap();
    assert_eq!(items(&tree), [3, 2, 1]);
    assert_eq!(tree.min(), Some(&3));
    assert_eq!(tree.max(), Some(&1));
    assert!(tree.cmp().compares_gt(&1, &2));
}

#[test]
fn try_extend_keeps_prefix() {
    let mut tree = OrderedTree::new();
    assert_eq!(tree.try_extend(vec![1, 2, 1, 3]), Err(Error::DuplicateElement(1)));
    assert_eq!(items(&tree), [1, 2]);
}

#[test]
fn swap_and_assign() {
    let mut a = OrderedTree::from_seq(vec![1, 2]).unwrap();
    let mut b = OrderedTree::from_seq(vec![3]).unwrap();

    a.swap(&mut b);
    assert_eq!(items(&a), [3]);
    assert_eq!(items(&b), [1, 2]);

    a.clone_from(&b);
    b.insert(4).unwrap();
    assert_eq!(items(&a), [1, 2]);
    assert_eq!(items(&b), [1, 2, 4]);
}

#[test]
fn debug_lists_items_in_order() {
    let tree = OrderedTree::from_seq(vec![2, 1, 3]).unwrap();
    assert_eq!(format!("{:?}", tree), "{1, 2, 3}");
    assert_eq!(format!("{:?}", OrderedTree::<i32>::new()), "{}");
}

#[test]
fn large_tree_does_not_overflow_stack() {
    let mut tree = OrderedTree::new();
    for item in 0..200_000 { tree.insert(item).unwrap(); }
    assert_eq!(tree.len(), 200_000);

    for item in (0..200_000).step_by(2) { assert!(tree.remove(&item)); }
    assert_eq!(tree.len(), 100_000);
    assert_eq!(tree.min(), Some(&1));

    tree.clear();
    assert!(tree.is_empty());
    tree.clear();

    let dropped = OrderedTree::from_seq(0..100_000).unwrap();
    drop(dropped);
}
