//! This crate exposes a Binary Search Tree (BST) over unique keys that is
//! balanced on request rather than on every mutation.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). With clever construction
//! the height of a BST can be limited to `O(lg N)` where `N` is the number of
//! nodes in the tree. BSTs also naturally support sorted iteration by visiting
//! the left subtree, then the subtree root, then the right subtree.
//!
//! ## Balance
//!
//! The [`tree::Tree`] here does not rotate on `insert` or `delete`. Balance is
//! a point-in-time property checked with [`tree::Tree::is_balanced`] and
//! restored wholesale with [`tree::Tree::rebalance`], which rebuilds the tree
//! from its sorted keys by repeatedly picking the midpoint.
//!
//! ```
//! use balanced_bst::tree::Tree;
//!
//! let mut tree = Tree::from_keys(vec![5, 3, 5, 1, 3]);
//! assert_eq!(tree.in_order(), vec![&1, &3, &5]);
//!
//! for key in 6..12 {
//!     tree.insert(key);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.height(), 3);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod demo;
pub mod traversal;
pub mod tree;
