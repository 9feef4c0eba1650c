//! This crate exposes an unbalanced, in-memory Binary Search Tree (BST) of
//! ordered keys, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//! > `Node`s with exactly two children are called "full nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). The tree in this
//! crate does no rebalancing, so inserting keys in sorted order degrades it
//! into a list with a height of `N`. BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the
//! right subtree, which [`OrderedTree::get_range`] uses to extract a range of
//! keys in ascending order.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod ordered;

pub use error::{Error, Result};
pub use ordered::OrderedTree;

#[cfg(test)]
mod test;
