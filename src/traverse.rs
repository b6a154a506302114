//! Walks over a tree's nodes. Each walk uses an explicit stack so a degenerate (chain shaped)
//! tree can't overflow the call stack, and each call walks the whole tree afresh.

use std::fmt;

use crate::tree::{Link, Node, Tree};

/// Spaces per level used by the `Display` implementation of [`Tree`].
pub const DEFAULT_INDENT: usize = 3;

impl<T> Tree<T> {
    /// The values in sorted order: left subtree, node, right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebuild::Tree;
    ///
    /// let tree: Tree<_> = [11, 5, 20, 14, 32].into_iter().collect();
    /// assert_eq!(tree.in_order(), [&5, &11, &14, &20, &32]);
    /// ```
    pub fn in_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut current = self.root();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            values.push(&node.value);
            current = node.right();
        }

        values
    }

    /// The values with every node before its subtrees: node, left subtree, right subtree. The
    /// first value is the root's.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebuild::Tree;
    ///
    /// let tree: Tree<_> = [11, 5, 20, 14, 32].into_iter().collect();
    /// assert_eq!(tree.pre_order(), [&11, &5, &20, &14, &32]);
    /// ```
    pub fn pre_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            values.push(&node.value);
            // Right goes on first so the left subtree is finished before it.
            stack.extend(node.right());
            stack.extend(node.left());
        }

        values
    }

    /// The values with every node after its subtrees: left subtree, right subtree, node. The last
    /// value is the root's.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebuild::Tree;
    ///
    /// let tree: Tree<_> = [11, 5, 20, 14, 32].into_iter().collect();
    /// assert_eq!(tree.post_order(), [&5, &14, &32, &20, &11]);
    /// ```
    pub fn post_order(&self) -> Vec<&T> {
        post_order_nodes(self.root())
            .into_iter()
            .map(|node| &node.value)
            .collect()
    }

    /// Moves the values out of the tree in sorted order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        into_in_order(self.root.take(), self.len)
    }

    /// Pairs each value with its depth (the root is at level 0), ordered right subtree, node,
    /// left subtree. Printed one per line and indented by level, this draws the tree on its side
    /// with the right children above their parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebuild::Tree;
    ///
    /// let tree: Tree<_> = [11, 5, 20, 14, 32].into_iter().collect();
    /// assert_eq!(
    ///     tree.vertical_print(),
    ///     [(2, &32), (1, &20), (2, &14), (0, &11), (1, &5)],
    /// );
    /// ```
    pub fn vertical_print(&self) -> Vec<(usize, &T)> {
        let mut lines = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut current = self.root().map(|node| (node, 0));
        loop {
            while let Some((node, level)) = current {
                stack.push((node, level));
                current = node.right().map(|right| (right, level + 1));
            }
            let Some((node, level)) = stack.pop() else {
                break;
            };
            lines.push((level, &node.value));
            current = node.left().map(|left| (left, level + 1));
        }

        lines
    }

    /// A [`Display`][fmt::Display] adapter drawing [`Tree::vertical_print`] with `indent` spaces
    /// per level.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebuild::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.vertical(2).to_string(), "  3\n2\n  1\n");
    /// ```
    pub fn vertical(&self, indent: usize) -> Vertical<'_, T> {
        Vertical { tree: self, indent }
    }
}

/// Draws a tree on its side, one value per line. Created by [`Tree::vertical`].
pub struct Vertical<'a, T> {
    tree: &'a Tree<T>,
    indent: usize,
}

impl<T> fmt::Display for Vertical<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (level, value) in self.tree.vertical_print() {
            writeln!(f, "{:width$}{}", "", value, width = level * self.indent)?;
        }
        Ok(())
    }
}

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.vertical(DEFAULT_INDENT), f)
    }
}

/// The nodes of the subtree rooted at `root` in post-order.
pub(crate) fn post_order_nodes<T>(root: Option<&Node<T>>) -> Vec<&Node<T>> {
    // Node, right, left is post-order reversed.
    let mut nodes = Vec::new();
    let mut stack: Vec<&Node<T>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        nodes.push(node);
        stack.extend(node.left());
        stack.extend(node.right());
    }
    nodes.reverse();

    nodes
}

/// Takes apart the subtree at `root`, returning its values in sorted order. `len` is only a
/// capacity hint.
pub(crate) fn into_in_order<T>(root: Link<T>, len: usize) -> Vec<T> {
    let mut values = Vec::with_capacity(len);
    let mut stack: Vec<Box<Node<T>>> = Vec::new();
    let mut current = root;
    loop {
        while let Some(mut node) = current {
            current = node.left.take();
            stack.push(node);
        }
        let Some(node) = stack.pop() else {
            break;
        };
        let Node { value, right, .. } = *node;
        values.push(value);
        current = right;
    }

    values
}
