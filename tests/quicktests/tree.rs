use bst_rebuild::{NotFound, Tree};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::{init_logger, Op};

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts,
/// deletes and rebalances we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        let agrees = match op {
            Op::Insert(v) => bst.insert(v.clone()) == set.insert(v.clone()),
            Op::Delete(v) => bst.delete(v).ok() == set.take(v),
            Op::Rebalance => {
                bst.rebalance();
                bst.height() == minimal_height(set.len())
            }
        };
        if !agrees || !is_strictly_increasing(&bst.in_order()) {
            return false;
        }
    }

    true
}

fn is_strictly_increasing<T: Ord>(values: &[&T]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}

/// `ceil(log2(n + 1))`
fn minimal_height(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logger();
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.len() == set.len()
        && tree.in_order().into_iter().eq(set.iter())
}

#[quickcheck]
fn insert_is_idempotent(xs: Vec<i8>) -> bool {
    let once: Tree<_> = xs.iter().copied().collect();
    let twice: Tree<_> = xs.iter().chain(xs.iter()).copied().collect();

    once.in_order() == twice.in_order() && once.len() == twice.len()
}

#[quickcheck]
fn delete_removes_exactly_one_value(xs: Vec<i8>, index: usize) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    if tree.is_empty() {
        return true;
    }
    let before: Vec<i8> = tree.in_order().into_iter().copied().collect();
    let target = before[index % before.len()];

    let mut expected = before.clone();
    expected.retain(|x| *x != target);

    tree.delete(&target) == Ok(target)
        && tree.in_order().into_iter().copied().eq(expected)
        && tree.len() == before.len() - 1
}

#[quickcheck]
fn delete_missing_is_not_found(xs: Vec<i8>, missing: i8) -> bool {
    init_logger();
    let mut tree: Tree<_> = xs.into_iter().filter(|x| *x != missing).collect();
    let before = tree.pre_order().into_iter().copied().collect::<Vec<_>>();

    tree.delete(&missing) == Err(NotFound)
        && tree.pre_order().into_iter().copied().eq(before)
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        let _ = tree.delete(delete);
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| !tree.contains(x)) && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn rebalance_preserves_contents(xs: Vec<i16>) -> bool {
    init_logger();
    let mut tree: Tree<_> = xs.iter().copied().collect();
    tree.rebalance();

    let expected: BTreeSet<_> = xs.into_iter().collect();
    tree.in_order().into_iter().eq(expected.iter()) && tree.height() == minimal_height(tree.len())
}

#[test]
fn example_scenario() {
    init_logger();
    let mut tree: Tree<_> = [11, 5, 20, 14, 32].into_iter().collect();

    assert_eq!(tree.in_order(), [&5, &11, &14, &20, &32]);
    assert_eq!(tree.pre_order(), [&11, &5, &20, &14, &32]);

    let balanced = tree.balanced();
    assert_eq!(balanced.in_order(), [&5, &11, &14, &20, &32]);
    assert_eq!(balanced.root().map(|n| *n.value()), Some(14));

    assert_eq!(tree.delete(&20), Ok(20));
    assert_eq!(tree.pre_order(), [&11, &5, &32, &14]);
}

#[test]
fn rebalance_heights() {
    for (n, height) in [(0, 0), (1, 1), (7, 3), (8, 4), (1000, 10)] {
        let mut tree: Tree<_> = (0..n).collect();
        tree.rebalance();

        assert_eq!(tree.height(), height, "n = {}", n);
    }
}

#[test]
fn vertical_print_of_scenario() {
    let tree: Tree<_> = [11, 5, 20, 14, 32].into_iter().collect();

    assert_eq!(
        tree.vertical_print(),
        [(2, &32), (1, &20), (2, &14), (0, &11), (1, &5)]
    );
    assert_eq!(tree.to_string(), "      32\n   20\n      14\n11\n   5\n");
}
