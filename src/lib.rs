//! This crate exposes an unbalanced Binary Search Tree of owned strings
//! together with a small harness that fills one with random data.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value
//! that was inserted and will sometimes have child `Node`s. The invariants
//! of this particular BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than or equal to its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    strictly greater than its own value.
//!
//! > Note that equal values always go left, so inserting the same value over
//! > and over grows a chain of left children.
//!
//! Values are compared ordinally, byte by byte, rather than by any locale
//! aware collation. Visiting the left subtree, then the subtree root, then the
//! right subtree yields the values in sorted order.
//!
//! The tree is never rebalanced: inserting already sorted values makes its
//! height equal to its length. There is no deletion either; a tree is only
//! ever torn down as a whole, with [`OrderedTree::destroy`] (values released
//! too) or [`OrderedTree::dismantle`] (values handed back to the caller).
//!
//! ## Random trees
//!
//! The [`random`] module generates lowercase strings and the [`harness`]
//! module wires them into a tree, prints it in order and frees it. The
//! `randomtree` binary drives the harness from the command line.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod harness;
pub mod random;
pub mod tree;

pub use error::{HarnessError, HarnessResult, TreeError, TreeResult};
pub use harness::HarnessConfig;
pub use tree::{Iter, NodeId, OrderedTree};
