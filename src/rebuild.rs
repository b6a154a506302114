//! Building a height-minimal tree out of sorted values.

use crate::tree::{Link, Node};

/// Builds a subtree out of the next `len` values of `values`, which must be sorted and yield at
/// least `len` items.
///
/// The root of every subtree is the value at index `len / 2` of its range (the lower middle for
/// even lengths), the left subtree is built from the values before it and the right subtree from
/// the values after it. The values are consumed in order, left subtree first, so this is a single
/// pass. The result has height `ceil(log2(len + 1))` and the recursion is no deeper than that.
///
/// ```text
/// [1, 2, 3, 4, 5]  ->      3
///                         / \
///                        2   5
///                       /   /
///                      1   4
/// ```
pub(crate) fn build<T, I>(len: usize, values: &mut I) -> Link<T>
where
    I: Iterator<Item = T>,
{
    if len == 0 {
        return None;
    }

    let mid = len / 2;
    let left = build(mid, values);
    let value = values
        .next()
        .expect("`values` yields at least `len` items");
    let right = build(len - mid - 1, values);

    Some(Box::new(Node { value, left, right }))
}
