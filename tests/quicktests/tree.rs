use balanced_bst::traversal::Order;
use balanced_bst::tree::Tree;
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts,
/// deletes and rebalances we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                assert_eq!(tree.insert(k.clone()), set.insert(k.clone()));
            }
            Op::Delete(k) => {
                assert_eq!(tree.delete(k), set.remove(k));
            }
            Op::Rebalance => tree.rebalance(),
        }
    }
}

/// Height of a tree holding `n` keys with every level but the last full.
fn minimal_height(n: usize) -> isize {
    (usize::BITS - n.leading_zeros()) as isize - 1
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.in_order().into_iter().eq(set.iter())
        && set.iter().all(|k| tree.contains(k))
        && tree.len() == set.len()
}

#[quickcheck]
fn in_order_is_strictly_ascending(ops: Vec<Op<i16>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.in_order().windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn from_keys_is_balanced_and_minimal(xs: Vec<i8>) -> bool {
    let tree = Tree::from_keys(xs.iter().copied());
    let distinct: BTreeSet<_> = xs.iter().collect();

    tree.is_balanced()
        && tree.height() == minimal_height(distinct.len())
        && tree.in_order().into_iter().eq(distinct.into_iter())
}

#[quickcheck]
fn rebalance_restores_balance(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    let before: Vec<i8> = tree.in_order().into_iter().copied().collect();
    tree.rebalance();

    tree.is_balanced()
        && tree.height() == minimal_height(set.len())
        && tree.in_order().into_iter().copied().eq(before.iter().copied())
        && tree == Tree::from_keys(before)
}

#[quickcheck]
fn insert_then_delete_round_trips(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = Tree::from_keys(xs.iter().copied().filter(|k| *k != x));
    let before = tree.clone();

    tree.insert(x) && tree.delete(&x) && tree.in_order() == before.in_order()
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::from_keys(xs.iter().copied());
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn every_node_has_a_consistent_depth(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    // A node's depth is its parent's depth plus one.
    tree.iter(Order::Level).all(|k| {
        let node = tree.find(k).unwrap();
        match tree.find_parent(node) {
            None => tree.depth(node) == Some(0),
            Some(parent) => tree.depth(node) == tree.depth(parent).map(|d| d + 1),
        }
    })
}

#[quickcheck]
fn traversals_visit_every_key_once(xs: Vec<i8>) -> bool {
    let tree = Tree::from_keys(xs);
    let expected = tree.in_order();

    [Order::Level, Order::Pre, Order::Post].iter().all(|order| {
        let mut seen = tree.walk(*order, |_| {});
        seen.sort();
        seen == expected
    })
}
