//! Binary search tree with taller-subtree deletion
//!
//! An unbalanced BST over a total order, rejecting duplicates. Deletion of a
//! node with two children departs from the textbook in-order-successor rule:
//! the taller of the two subtrees (heights recomputed on demand, not cached)
//! is promoted into the removed node's slot, and the other subtree is grafted
//! onto the promoted subtree's extreme node. Promoting the taller side keeps
//! the tree flatter than always promoting the successor.
//!
//! Height computation walks the whole subtree, which is acceptable because it
//! only runs on two-child removals.
//!
//! # Example
//!
//! ```rust
//! use rust_classic_collections::SearchTree;
//!
//! let mut tree = SearchTree::new();
//! assert!(tree.insert(5));
//! assert!(tree.insert(3));
//! assert!(!tree.insert(5)); // duplicate rejected
//!
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree.min(), Some(&3));
//! assert!(tree.remove(&3));
//! assert_eq!(tree.min(), Some(&5));
//! ```

use std::cmp::Ordering;
use std::fmt;

#[derive(Clone)]
struct Node<T> {
    val: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(val: T) -> Box<Self> {
        Box::new(Self {
            val,
            left: None,
            right: None,
        })
    }
}

/// A binary search tree holding each value at most once.
#[derive(Clone)]
pub struct SearchTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> SearchTree<T> {
    /// Creates an empty tree.
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns the number of stored values.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Tree height: the longest root-to-leaf node count. An empty tree has
    /// height 0. Recomputed on every call.
    pub fn height(&self) -> usize {
        Self::node_height(&self.root)
    }

    /// Drops every node iteratively, avoiding deep recursive destruction on
    /// skewed trees.
    pub fn clear(&mut self) {
        let mut pending = Vec::new();
        if let Some(root) = self.root.take() {
            pending.push(root);
        }
        while let Some(mut node) = pending.pop() {
            if let Some(left) = node.left.take() {
                pending.push(left);
            }
            if let Some(right) = node.right.take() {
                pending.push(right);
            }
        }
        self.len = 0;
    }

    /// In-order (ascending) iterator over the stored values.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    fn node_height(link: &Option<Box<Node<T>>>) -> usize {
        match link {
            None => 0,
            Some(node) => {
                let lh = Self::node_height(&node.left);
                let rh = Self::node_height(&node.right);
                lh.max(rh) + 1
            }
        }
    }
}

impl<T: Ord> SearchTree<T> {
    /// Inserts a value. Returns `false` without mutating if it is already
    /// present.
    pub fn insert(&mut self, val: T) -> bool {
        let mut link = &mut self.root;
        loop {
            match link {
                None => {
                    *link = Some(Node::new(val));
                    self.len += 1;
                    return true;
                }
                Some(node) => match val.cmp(&node.val) {
                    Ordering::Less => link = &mut node.left,
                    Ordering::Greater => link = &mut node.right,
                    Ordering::Equal => return false,
                },
            }
        }
    }

    /// Returns a reference to the stored value equal to `val`, if any.
    pub fn find(&self, val: &T) -> Option<&T> {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            match val.cmp(&n.val) {
                Ordering::Less => node = n.left.as_deref(),
                Ordering::Greater => node = n.right.as_deref(),
                Ordering::Equal => return Some(&n.val),
            }
        }
        None
    }

    /// Returns `true` if `val` is stored in the tree.
    pub fn contains(&self, val: &T) -> bool {
        self.find(val).is_some()
    }

    /// Returns the smallest stored value, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.val)
    }

    /// Returns the largest stored value, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.val)
    }

    /// Removes `val` from the tree. Returns whether a node was removed.
    pub fn remove(&mut self, val: &T) -> bool {
        if Self::remove_in(&mut self.root, val) {
            self.len -= 1;
            true
        } else {
            false
        }
    }

    fn remove_in(link: &mut Option<Box<Node<T>>>, val: &T) -> bool {
        match link {
            None => false,
            Some(node) => match val.cmp(&node.val) {
                Ordering::Less => Self::remove_in(&mut node.left, val),
                Ordering::Greater => Self::remove_in(&mut node.right, val),
                Ordering::Equal => {
                    if let Some(node) = link.take() {
                        *link = Self::promote(node);
                    }
                    true
                }
            },
        }
    }

    /// Replaces a removed node by its children: a single child (or nothing)
    /// splices straight up; with two children the taller subtree is promoted
    /// and the other grafted onto its extreme node.
    fn promote(mut node: Box<Node<T>>) -> Option<Box<Node<T>>> {
        match (node.left.take(), node.right.take()) {
            (None, right) => right,
            (left, None) => left,
            (Some(mut left), Some(mut right)) => {
                let lh = Self::node_height(&left.left).max(Self::node_height(&left.right)) + 1;
                let rh = Self::node_height(&right.left).max(Self::node_height(&right.right)) + 1;
                if lh > rh {
                    Self::graft_rightmost(&mut left, right);
                    Some(left)
                } else {
                    Self::graft_leftmost(&mut right, left);
                    Some(right)
                }
            }
        }
    }

    /// Attaches `sub` as the right child of `node`'s max descendant.
    fn graft_rightmost(node: &mut Node<T>, sub: Box<Node<T>>) {
        match &mut node.right {
            Some(right) => Self::graft_rightmost(right, sub),
            None => node.right = Some(sub),
        }
    }

    /// Attaches `sub` as the left child of `node`'s min descendant.
    fn graft_leftmost(node: &mut Node<T>, sub: Box<Node<T>>) {
        match &mut node.left {
            Some(left) => Self::graft_leftmost(left, sub),
            None => node.left = Some(sub),
        }
    }
}

impl<T> Drop for SearchTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for SearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for SearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<T: Ord> FromIterator<T> for SearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: fmt::Debug> fmt::Debug for SearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a SearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`SearchTree`], using an explicit stack.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.val)
    }
}
