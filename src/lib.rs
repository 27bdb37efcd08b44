//! This crate provides an unbalanced Binary Search Tree (BST) of unique
//! values, together with an interactive menu for driving it and a visualizer
//! for drawing it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, search, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)`, where `height` is the number of
//! edges on the longest path from the root `Node` to a leaf `Node`. The
//! [`Tree`] here never rebalances, so its height depends entirely on insertion
//! order: inserting sorted values gives a tree as tall as it is long. BSTs
//! also naturally support sorted iteration by visiting the left subtree, then
//! the subtree root, then the right subtree.
//!
//! ## Collaborators
//!
//! - [`layout`] places every node on a plane for drawing, and [`render`]
//!   draws those placements as terminal text or SVG.
//! - [`shell`] is the numbered menu behind the `bst-shell` binary, configured
//!   through [`settings`].

#![deny(clippy::clone_on_ref_ptr)]

pub mod error;
pub mod layout;
pub mod render;
pub mod settings;
pub mod shell;
pub mod tree;

pub use error::{SettingsError, ShellError, TreeError};
pub use tree::{Iter, Node, Tree};

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
