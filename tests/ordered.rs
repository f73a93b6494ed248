#![cfg(feature = "ordered_iter")]

use aa_tree::OrderedTree;
use ordered_iter::OrderedSetIterator;

#[test]
fn iters_join_as_ordered_sets() {
    let a = OrderedTree::from_seq(vec![5, 1, 3, 2]).unwrap();
    let b = OrderedTree::from_seq(vec![4, 2, 3]).unwrap();

    let common: Vec<_> = a.iter().inner_join_set(b.iter()).cloned().collect();
    assert_eq!(common, [2, 3]);

    let empty = OrderedTree::new();
    assert_eq!(a.iter().inner_join_set(empty.iter()).count(), 0);
}

#[test]
fn into_iters_join_as_ordered_sets() {
    let a = OrderedTree::from_seq(vec![10, 30, 20, 15, 25]).unwrap();
    let b = OrderedTree::from_seq(vec![25, 5, 15, 35]).unwrap();

    let common: Vec<_> = a.into_iter().inner_join_set(b.into_iter()).collect();
    assert_eq!(common, [15, 25]);
}
