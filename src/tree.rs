//! A mutable BST that owns its nodes directly. Nodes have no parent pointers: every link is an
//! `Option<Box<Node>>` owned by exactly one parent (or by the `Tree` itself for the root).
//!
//! Nothing here rebalances automatically. Inserting sorted values builds a chain whose height is
//! its length, so every walk that is proportional to the height (insert, delete, the traversals,
//! `Clone` and `Drop`) is written with an explicit loop or stack instead of recursion.
//!
//! # Examples
//!
//! ```
//! use bst_rebuild::{NotFound, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Inserting the same value again changes nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting a value hands it back.
//! assert_eq!(tree.delete(&1), Ok(1));
//! assert_eq!(tree.delete(&1), Err(NotFound));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::NotFound;
use crate::{rebuild, traverse};

/// An owning link to a subtree. `None` is an empty subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree holding unique values. This can be used for inserting, finding, and
/// deleting values, walking them in several orders, and rebuilding the tree into a
/// height-minimal shape.
pub struct Tree<T> {
    pub(crate) root: Link<T>,
    pub(crate) len: usize,
}

/// A single value and its two (possibly empty) subtrees.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, whose values are all less than this node's.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, whose values are all greater than this node's.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Detach children before each node is freed so dropping a long chain doesn't recurse.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    /// Copies the tree node for node, so the clone has the same shape as the original.
    fn clone(&self) -> Self {
        // In post-order both subtrees of a node are finished before the node itself, with the
        // right subtree on top of the stack.
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        for node in traverse::post_order_nodes(self.root()) {
            let right = node
                .right
                .as_ref()
                .map(|_| built.pop().expect("right subtree was built first"));
            let left = node
                .left
                .as_ref()
                .map(|_| built.pop().expect("left subtree was built first"));
            built.push(Box::new(Node {
                value: node.value.clone(),
                left,
                right,
            }));
        }
        debug_assert!(built.len() <= 1);

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

impl<T> From<T> for Tree<T> {
    fn from(value: T) -> Self {
        Self::with_value(value)
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    /// Inserts every value in iteration order. Duplicates are dropped.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Generates a `Tree` holding only `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebuild::Tree;
    ///
    /// let tree = Tree::with_value("a");
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.root().map(|n| *n.value()), Some("a"));
    /// ```
    pub fn with_value(value: T) -> Self {
        Self {
            root: Some(Node::new_boxed(value)),
            len: 1,
        }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if the tree isn't empty. Useful for inspecting the shape of the tree.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has height
    /// 0 and a tree with a single node has height 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }

        height
    }

    /// Returns `true` if a value equal to `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }

        false
    }

    /// Inserts `value` as a new leaf. Returns `false` (and leaves the tree untouched) if an equal
    /// value is already stored.
    ///
    /// No balancing happens here: inserting sorted values produces a chain. See
    /// [`Tree::rebalance`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebuild::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(2));
    ///
    /// assert_eq!(tree.in_order(), [&1, &2]);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    log::trace!("insert: value already present, tree unchanged");
                    return false;
                }
                Ordering::Greater => &mut node.right,
            };
        }
        *link = Some(Node::new_boxed(value));
        self.len += 1;

        if cfg!(debug_assertions) {
            self.assert_invariants();
        }
        true
    }

    /// Deletes the value equal to `value` from the tree and returns it.
    ///
    /// A node with two children takes the value of its in-order successor (the smallest value in
    /// its right subtree) and the successor's node is spliced out in its place.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if no equal value is stored. The tree is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebuild::{NotFound, Tree};
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&2), Ok(2));
    /// assert_eq!(tree.delete(&2), Err(NotFound));
    /// assert_eq!(tree.pre_order(), [&3, &1]);
    /// ```
    pub fn delete(&mut self, value: &T) -> Result<T, NotFound>
    where
        T: Ord,
    {
        let Some(link) = find_link_mut(&mut self.root, value) else {
            log::debug!("delete: value not present, tree unchanged");
            return Err(NotFound);
        };

        let Some(mut node) = link.take() else {
            unreachable!("`find_link_mut` only returns links holding a node");
        };
        let removed = match (node.left.take(), node.right.take()) {
            (None, right) => {
                *link = right;
                node.value
            }
            (left, None) => {
                *link = left;
                node.value
            }
            (Some(left), Some(right)) => {
                node.left = Some(left);
                node.right = Some(right);
                let Some(successor) = take_min(&mut node.right) else {
                    unreachable!("the right subtree was just put back");
                };
                let removed = std::mem::replace(&mut node.value, successor);
                *link = Some(node);
                removed
            }
        };
        self.len -= 1;

        if cfg!(debug_assertions) {
            self.assert_invariants();
        }
        Ok(removed)
    }

    /// Rebuilds the tree in place into a height-minimal shape holding the same values.
    ///
    /// The values are moved out in sorted order and every subtree root becomes the middle value
    /// (index `len / 2`) of its range. The old nodes are all freed; the resulting height is
    /// `ceil(log2(len + 1))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebuild::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=7).collect();
    /// assert_eq!(tree.height(), 7);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 3);
    /// assert_eq!(tree.pre_order(), [&4, &2, &1, &3, &6, &5, &7]);
    /// ```
    pub fn rebalance(&mut self)
    where
        T: Ord,
    {
        let len = self.len;
        let old_height = log::log_enabled!(log::Level::Debug).then(|| self.height());
        log::trace!("rebalance: rebuilding {} values", len);

        let values = traverse::into_in_order(self.root.take(), len);
        self.root = rebuild::build(len, &mut values.into_iter());

        if let Some(old_height) = old_height {
            log::debug!(
                "rebalance: {} values, height {} -> {}",
                len,
                old_height,
                self.height()
            );
        }

        if cfg!(debug_assertions) {
            self.assert_invariants();
        }
    }

    /// Returns a new height-minimal tree holding clones of this tree's values. `self` is left as
    /// it is. The new tree has the same shape [`Tree::rebalance`] would produce.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_rebuild::Tree;
    ///
    /// let tree: Tree<_> = [11, 5, 20, 14, 32].into_iter().collect();
    /// let balanced = tree.balanced();
    ///
    /// assert_eq!(balanced.root().map(|n| *n.value()), Some(14));
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(11));
    /// ```
    pub fn balanced(&self) -> Self
    where
        T: Clone,
    {
        let root = rebuild::build(self.len, &mut self.in_order().into_iter().cloned());
        Self {
            root,
            len: self.len,
        }
    }

    /// Panics if the values aren't strictly increasing in order or `len` doesn't match the number
    /// of nodes.
    fn assert_invariants(&self)
    where
        T: Ord,
    {
        let values = self.in_order();
        assert_eq!(values.len(), self.len, "`len` doesn't match the number of nodes");
        assert!(
            values.windows(2).all(|pair| pair[0] < pair[1]),
            "in-order values aren't strictly increasing"
        );
    }
}

/// Walks down from `link` to the link holding `value`.
fn find_link_mut<'a, T>(mut link: &'a mut Link<T>, value: &T) -> Option<&'a mut Link<T>>
where
    T: Ord,
{
    loop {
        let ordering = value.cmp(&link.as_ref()?.value);
        link = match (ordering, link) {
            (Ordering::Equal, link) => return Some(link),
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, None) => return None,
        };
    }
}

/// Removes the leftmost node of the subtree at `link`, replacing it with its right child, and
/// returns its value. Returns `None` for an empty subtree.
fn take_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }

    let node = link.take()?;
    let Node { value, right, .. } = *node;
    *link = right;
    Some(value)
}
