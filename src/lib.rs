//! This crate exposes a mutable Binary Search Tree (BST) that stays
//! exactly as unbalanced as its insertions make it, until it is explicitly
//! rebuilt into a height-minimal shape.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Inserting values in sorted order produces a tree whose height equals its
//! length. Rather than rotating on every insert (as an AVL tree would),
//! [`Tree::rebalance`] flattens the tree into its sorted sequence and rebuilds
//! it by repeatedly picking the middle element as the subtree root. The
//! rebuilt tree has height `ceil(log2(n + 1))`.
//!
//! # Examples
//!
//! ```
//! use bst_rebuild::Tree;
//!
//! let mut tree: Tree<_> = [11, 5, 20, 14, 32].into_iter().collect();
//!
//! assert_eq!(tree.in_order(), [&5, &11, &14, &20, &32]);
//! assert_eq!(tree.pre_order(), [&11, &5, &20, &14, &32]);
//!
//! tree.rebalance();
//! assert_eq!(tree.root().map(|n| *n.value()), Some(14));
//! assert_eq!(tree.height(), 3);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod rebuild;
mod traverse;
mod tree;

pub use error::NotFound;
pub use traverse::{Vertical, DEFAULT_INDENT};
pub use tree::{Node, Tree};
