//! Stack, queue, and deque adapters
//!
//! Thin delegation wrappers that restrict a backing container to one access
//! discipline: [`Stack`] exposes LIFO access over an [`Array`], while
//! [`Queue`] and [`Deque`] expose FIFO and double-ended access over a
//! [`DoublyLinkedList`]. No operation here does more than forward to the
//! backing structure.

use crate::array::Array;
use crate::dlist::DoublyLinkedList;

/// LIFO stack over an [`Array`] (push and pop at the back).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Array<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub const fn new() -> Self {
        Self { items: Array::new() }
    }

    /// Pushes a value onto the top.
    pub fn push(&mut self, val: T) {
        self.items.push_back(val);
    }

    /// Removes and returns the top value, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// Returns the top value without removing it, or `None` if empty.
    pub fn peek(&self) -> Option<&T> {
        self.items.back()
    }

    /// Returns the number of stacked values.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes all values.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// FIFO queue over a [`DoublyLinkedList`] (push at the back, pop at the
/// front).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: DoublyLinkedList<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            items: DoublyLinkedList::new(),
        }
    }

    /// Enqueues a value at the back.
    pub fn push_back(&mut self, val: T) {
        self.items.push_back(val);
    }

    /// Dequeues the front value, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns the front value without removing it, or `None` if empty.
    pub fn peek_front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns the number of queued values.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes all values.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Double-ended queue over a [`DoublyLinkedList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deque<T> {
    items: DoublyLinkedList<T>,
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deque<T> {
    /// Creates an empty deque.
    pub const fn new() -> Self {
        Self {
            items: DoublyLinkedList::new(),
        }
    }

    /// Pushes a value at the front.
    pub fn push_front(&mut self, val: T) {
        self.items.push_front(val);
    }

    /// Pushes a value at the back.
    pub fn push_back(&mut self, val: T) {
        self.items.push_back(val);
    }

    /// Pops the front value, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Pops the back value, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// Returns the front value, or `None` if empty.
    pub fn peek_front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns the back value, or `None` if empty.
    pub fn peek_back(&self) -> Option<&T> {
        self.items.back()
    }

    /// Returns the number of held values.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the deque holds no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes all values.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
