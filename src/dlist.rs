//! Doubly-linked list with O(1) splicing
//!
//! Heap-allocated nodes carry forward and backward links (`NonNull`, no
//! reference counting), plus `head`/`tail` entry points and a cached length.
//! Both ends support O(1) push and pop, and whole lists can be spliced onto
//! either end in O(1) by relinking the boundary nodes — the donor list is left
//! empty and no element is copied or moved in memory.
//!
//! Link invariants: `head` is `None` iff `tail` is `None` iff `len == 0`;
//! `head`'s `prev` and `tail`'s `next` are `None`; for every interior node,
//! `node.prev.next == node` and `node.next.prev == node`.
//!
//! Indexing by position is provided for completeness but walks from the head,
//! so it costs O(i).
//!
//! # Example
//!
//! ```rust
//! use rust_classic_collections::DoublyLinkedList;
//!
//! let mut list = DoublyLinkedList::new();
//! list.push_back(2);
//! list.push_front(1);
//! list.push_back(3);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.pop_front(), Some(1));
//! assert_eq!(list.pop_back(), Some(3));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

struct Node<T> {
    val: T,
    next: Option<NonNull<Node<T>>>,
    prev: Option<NonNull<Node<T>>>,
}

/// A doubly-linked list owning its chain of nodes.
pub struct DoublyLinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Prepends a value in O(1).
    pub fn push_front(&mut self, val: T) {
        let node = NonNull::from(Box::leak(Box::new(Node {
            val,
            next: self.head,
            prev: None,
        })));
        match self.head {
            Some(head) => unsafe { (*head.as_ptr()).prev = Some(node) },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Appends a value in O(1).
    pub fn push_back(&mut self, val: T) {
        let node = NonNull::from(Box::leak(Box::new(Node {
            val,
            next: None,
            prev: self.tail,
        })));
        match self.tail {
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Unlinks and returns the first element, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|node| {
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            self.head = node.next;
            match self.head {
                Some(head) => unsafe { (*head.as_ptr()).prev = None },
                None => self.tail = None,
            }
            self.len -= 1;
            node.val
        })
    }

    /// Unlinks and returns the last element, or `None` if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.tail.map(|node| {
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            self.tail = node.prev;
            match self.tail {
                Some(tail) => unsafe { (*tail.as_ptr()).next = None },
                None => self.head = None,
            }
            self.len -= 1;
            node.val
        })
    }

    /// Returns a reference to the first element, or `None` if empty.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|node| unsafe { &(*node.as_ptr()).val })
    }

    /// Returns a mutable reference to the first element, or `None` if empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).val })
    }

    /// Returns a reference to the last element, or `None` if empty.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|node| unsafe { &(*node.as_ptr()).val })
    }

    /// Returns a mutable reference to the last element, or `None` if empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.tail.map(|node| unsafe { &mut (*node.as_ptr()).val })
    }

    /// Splices all of `other`'s nodes onto the back of this list in O(1).
    /// `other` is left empty.
    pub fn append(&mut self, other: &mut Self) {
        match self.tail {
            None => std::mem::swap(self, other),
            Some(tail) => {
                if let Some(other_head) = other.head.take() {
                    unsafe {
                        (*tail.as_ptr()).next = Some(other_head);
                        (*other_head.as_ptr()).prev = Some(tail);
                    }
                    self.tail = other.tail.take();
                    self.len += other.len;
                    other.len = 0;
                }
            }
        }
    }

    /// Splices all of `other`'s nodes onto the front of this list in O(1).
    /// `other` is left empty.
    pub fn prepend(&mut self, other: &mut Self) {
        other.append(self);
        std::mem::swap(self, other);
    }

    /// Returns the element at position `i` (O(i) walk from the head), or
    /// `None` if out of bounds.
    pub fn get(&self, i: usize) -> Option<&T> {
        if i >= self.len {
            return None;
        }
        let mut cur = self.head;
        for _ in 0..i {
            cur = unsafe { (*cur.unwrap().as_ptr()).next };
        }
        cur.map(|node| unsafe { &(*node.as_ptr()).val })
    }

    /// Mutable position lookup; see [`get`](Self::get).
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        if i >= self.len {
            return None;
        }
        let mut cur = self.head;
        for _ in 0..i {
            cur = unsafe { (*cur.unwrap().as_ptr()).next };
        }
        cur.map(|node| unsafe { &mut (*node.as_ptr()).val })
    }

    /// Unlinks and drops every node iteratively.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Iterates front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    /// Deep copy, rebuilt node by node from front to back.
    fn clone(&self) -> Self {
        let mut list = Self::new();
        for v in self.iter() {
            list.push_back(v.clone());
        }
        list
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Index<usize> for DoublyLinkedList<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        let len = self.len;
        self.get(i)
            .unwrap_or_else(|| panic!("list index {i} out of bounds (len {len})"))
    }
}

impl<T> IndexMut<usize> for DoublyLinkedList<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        let len = self.len;
        self.get_mut(i)
            .unwrap_or_else(|| panic!("list index {i} out of bounds (len {len})"))
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.push_back(v);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// The list owns its nodes outright; aliasing is confined to internal links.
unsafe impl<T: Send> Send for DoublyLinkedList<T> {}
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

/// Front-to-back iterator over a [`DoublyLinkedList`].
pub struct Iter<'a, T> {
    next: Option<NonNull<Node<T>>>,
    remaining: usize,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            let node = unsafe { &*node.as_ptr() };
            self.next = node.next;
            self.remaining -= 1;
            &node.val
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_both_ends() {
        let mut list = DoublyLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_back(2);
        list.push_front(1);
        list.push_back(3);

        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));

        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_back(), Some(2));
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn test_round_trip() {
        let mut list: DoublyLinkedList<i32> = (0..=1000).collect();
        assert_eq!(list.len(), 1001);

        for _ in 0..100 {
            list.pop_back();
        }
        for _ in 0..100 {
            list.pop_front();
        }

        assert_eq!(list.len(), 801);
        assert_eq!(list.front(), Some(&100));
        assert_eq!(list.back(), Some(&900));
    }

    #[test]
    fn test_indexing_walks_from_head() {
        let list: DoublyLinkedList<i32> = (10..20).collect();
        assert_eq!(list[0], 10);
        assert_eq!(list[9], 19);
        assert_eq!(list.get(10), None);
    }

    #[test]
    #[should_panic(expected = "list index")]
    fn test_index_out_of_bounds_panics() {
        let list: DoublyLinkedList<i32> = (0..3).collect();
        let _ = list[3];
    }

    #[test]
    fn test_append_splices_all_nodes() {
        let mut a: DoublyLinkedList<i32> = (0..3).collect();
        let mut b: DoublyLinkedList<i32> = (3..6).collect();

        a.append(&mut b);
        assert_eq!(a.len(), 6);
        assert!(b.is_empty());
        assert_eq!(b.front(), None);
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);

        // Boundary back-links patched: popping from the back walks the
        // spliced-in section first, then crosses the seam.
        for expect in (0..6).rev() {
            assert_eq!(a.pop_back(), Some(expect));
        }
    }

    #[test]
    fn test_append_into_empty() {
        let mut a: DoublyLinkedList<i32> = DoublyLinkedList::new();
        let mut b: DoublyLinkedList<i32> = (0..4).collect();
        a.append(&mut b);
        assert_eq!(a.len(), 4);
        assert!(b.is_empty());
        assert_eq!(a.back(), Some(&3));

        // Donor stays usable.
        b.push_back(9);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn test_prepend() {
        let mut a: DoublyLinkedList<i32> = (3..6).collect();
        let mut b: DoublyLinkedList<i32> = (0..3).collect();
        a.prepend(&mut b);
        assert!(b.is_empty());
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(a.front(), Some(&0));
        assert_eq!(a.back(), Some(&5));
        assert_eq!(a.pop_front(), Some(0));
        assert_eq!(a.pop_back(), Some(5));
    }

    #[test]
    fn test_clone_independence() {
        let list: DoublyLinkedList<i32> = (0..10).collect();
        let mut copy = list.clone();
        assert_eq!(copy, list);

        copy.pop_front();
        copy.push_back(99);
        assert_eq!(list.len(), 10);
        assert_eq!(list.front(), Some(&0));
        assert_ne!(copy, list);
    }

    #[test]
    fn test_clear_leaves_usable() {
        let mut list: DoublyLinkedList<i32> = (0..100).collect();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_front(5);
        assert_eq!(list.back(), Some(&5));
    }

    #[test]
    fn test_iteration_order() {
        let list: DoublyLinkedList<i32> = (0..5).collect();
        let collected: Vec<i32> = list.iter().copied().collect();
        assert_eq!(collected, vec![0, 1, 2, 3, 4]);
        assert_eq!(list.iter().len(), 5);
    }

    #[test]
    fn test_drops_all_nodes() {
        use std::rc::Rc;

        let probe = Rc::new(());
        let mut list = DoublyLinkedList::new();
        for _ in 0..8 {
            list.push_back(Rc::clone(&probe));
        }
        assert_eq!(Rc::strong_count(&probe), 9);

        list.pop_front();
        list.pop_back();
        assert_eq!(Rc::strong_count(&probe), 7);

        drop(list);
        assert_eq!(Rc::strong_count(&probe), 1);
    }

    #[test]
    fn test_front_back_mut() {
        let mut list: DoublyLinkedList<i32> = (0..3).collect();
        *list.front_mut().unwrap() = 10;
        *list.back_mut().unwrap() = 30;
        list[1] = 20;
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
    }
}
