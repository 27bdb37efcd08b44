//! An owned, unbalanced Binary Search Tree. Every node exclusively owns its two
//! children through a `Box`, so the structure is a strict tree with no parent
//! pointers and no shared ownership.
//!
//! The tree never rebalances. Inserting values in sorted order produces a tree
//! as deep as it is long, so every operation here walks the tree with a loop or
//! an explicit stack rather than by recursing.
//!
//! # Examples
//!
//! ```
//! use bstree::{Tree, TreeError};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//! assert_eq!(tree.height(), -1);
//!
//! tree.insert(1).unwrap();
//! assert!(tree.search(&1));
//! assert_eq!(tree.height(), 0);
//!
//! // Values are unique.
//! assert_eq!(tree.insert(1), Err(TreeError::Duplicate));
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete(&1), Ok(1));
//! assert_eq!(tree.delete(&1), Err(TreeError::NotFound));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use tracing::trace;

use crate::error::TreeError;

type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree of unique values. This can be used for inserting,
/// searching, updating and deleting values and for listing them in order.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

/// A `Node` holds one value and owns up to two children. Nodes are only
/// handed out by shared reference so the tree's ordering can't be broken
/// from outside.
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, holding only smaller values.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, holding only larger values.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    // Only the immediate children are shown, a full dump could recurse arbitrarily deep.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Detach every node before it's dropped so dropping a `Box` never
        // recurses into a long chain of children.
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        // Collect the nodes in post-order (reversed pre-order with the children
        // swapped) so that both children are rebuilt before their parent.
        let mut pending: Vec<&Node<T>> = self.root().into_iter().collect();
        let mut post_order = Vec::with_capacity(self.len);
        while let Some(node) = pending.pop() {
            post_order.push(node);
            pending.extend(node.left());
            pending.extend(node.right());
        }

        let mut built: Vec<Box<Node<T>>> = Vec::new();
        for node in post_order.into_iter().rev() {
            let right = if node.right.is_some() { built.pop() } else { None };
            let left = if node.left.is_some() { built.pop() } else { None };
            built.push(Box::new(Node {
                value: node.value.clone(),
                left,
                right,
            }));
        }

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
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Two trees are equal when they hold the same values, whatever their shape.
impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if the tree isn't empty. Walking the tree from here is
    /// read-only.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Iterates over the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
    /// let values: Vec<_> = tree.iter().copied().collect();
    ///
    /// assert_eq!(values, [3, 5, 8]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.len)
    }

    /// Lists every value in ascending order. The list is built afresh on each
    /// call.
    pub fn inorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// The number of edges on the longest path from the root to a leaf. A tree
    /// with a single node has height 0 and an empty tree has height -1.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(2).unwrap();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(1).unwrap();
    /// tree.insert(3).unwrap();
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut pending: Vec<(&Node<T>, isize)> = self.root().map(|n| (n, 0)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.left().map(|n| (n, depth + 1)));
            pending.extend(node.right().map(|n| (n, depth + 1)));
        }

        height
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }

        Some(&node.value)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }

        Some(&node.value)
    }

    /// Returns `true` if the tree holds the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1).unwrap();
    ///
    /// assert!(tree.search(&1));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut link = self.root();
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }

        false
    }

    /// Inserts the value as a new leaf. The first value inserted becomes the
    /// root. Values already in the tree are rejected and the tree is left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1), Ok(()));
    /// assert_eq!(tree.insert(1), Err(TreeError::Duplicate));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> Result<(), TreeError>
    where
        T: Ord,
    {
        let link = Self::link_to(&mut self.root, &value);
        if link.is_some() {
            return Err(TreeError::Duplicate);
        }

        *link = Some(Node::new_boxed(value));
        self.len += 1;
        Ok(())
    }

    /// Deletes the value from the tree and returns it. A node with two children
    /// takes the value of its in-order successor (the smallest value of its
    /// right subtree) and the successor's node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Tree, TreeError};
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&5), Ok(5));
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(8));
    /// assert_eq!(tree.delete(&5), Err(TreeError::NotFound));
    /// ```
    pub fn delete(&mut self, value: &T) -> Result<T, TreeError>
    where
        T: Ord,
    {
        let link = Self::link_to(&mut self.root, value);
        let mut node = link.take().ok_or(TreeError::NotFound)?;

        let removed = match (node.left.take(), node.right.take()) {
            (None, None) => {
                trace!("deleted a leaf");
                node.value
            }
            (Some(child), None) | (None, Some(child)) => {
                trace!("deleted a node with one child");
                *link = Some(child);
                node.value
            }
            (Some(left), Some(right)) => {
                trace!("deleted a node with two children, promoting its successor");
                let (right, successor) = Self::split_min(right);
                let removed = mem::replace(&mut node.value, successor);
                node.left = Some(left);
                node.right = right;

                if cfg!(debug_assertions) {
                    if let Some(left) = node.left() {
                        assert!(left.value < node.value);
                    }
                    if let Some(right) = node.right() {
                        assert!(node.value < right.value);
                    }
                }

                *link = Some(node);
                removed
            }
        };

        self.len -= 1;
        Ok(removed)
    }

    /// Replaces `old` with `new` by deleting one and inserting the other, so
    /// `new` ends up wherever its ordering puts it. Nothing changes unless
    /// `old` is present and `new` is absent. In particular, updating a value
    /// to itself is refused because the new value already exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Tree, TreeError};
    ///
    /// let mut tree: Tree<_> = [1, 2].into_iter().collect();
    ///
    /// assert_eq!(tree.update(&1, 2), Err(TreeError::NewValueExists));
    /// assert_eq!(tree.update(&7, 3), Err(TreeError::OldValueNotFound));
    /// assert_eq!(tree.update(&1, 3), Ok(1));
    /// assert_eq!(tree.inorder(), [2, 3]);
    /// ```
    pub fn update(&mut self, old: &T, new: T) -> Result<T, TreeError>
    where
        T: Ord,
    {
        if !self.search(old) {
            return Err(TreeError::OldValueNotFound);
        }
        if self.search(&new) {
            return Err(TreeError::NewValueExists);
        }

        let removed = self.delete(old)?;
        self.insert(new)?;
        Ok(removed)
    }

    /// Returns the link holding `value`, or the empty link where `value` would
    /// be inserted.
    fn link_to<'a>(mut link: &'a mut Link<T>, value: &T) -> &'a mut Link<T>
    where
        T: Ord,
    {
        loop {
            let ordering = match link.as_deref() {
                Some(node) => value.cmp(&node.value),
                None => return link,
            };
            if ordering == Ordering::Equal {
                return link;
            }
            if let Some(node) = link {
                link = match ordering {
                    Ordering::Less => &mut node.left,
                    _ => &mut node.right,
                };
            }
        }
    }

    /// Splits the smallest value off the subtree rooted at `root`, returning
    /// what remains of the subtree alongside it. The left spine is unzipped
    /// down to the minimum and zipped back up once it's been unlinked.
    fn split_min(mut root: Box<Node<T>>) -> (Link<T>, T) {
        let mut spine = Vec::new();
        while let Some(left) = root.left.take() {
            spine.push(root);
            root = left;
        }

        let Node { value, right, .. } = *root;
        let mut subtree = right;
        while let Some(mut parent) = spine.pop() {
            parent.left = subtree;
            subtree = Some(parent);
        }

        (subtree, value)
    }
}

/// An in-order iterator over the values of a [`Tree`], created by
/// [`Tree::iter`]. It keeps the path of unvisited ancestors on an explicit
/// stack.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a tree by inserting values in iteration order. Repeated values are
/// skipped.
impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

/// Inserts values in iteration order, skipping any already in the tree.
impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            // Duplicates are simply left out.
            let _ = self.insert(value);
        }
    }
}
