//! Growable array with explicit doubling growth
//!
//! [`Array`] is a from-scratch dynamic array: a raw, exclusively owned buffer
//! plus a length and a capacity. It grows by doubling (0 → 1 → 2 → 4 …) when a
//! `push_back` runs out of room, and `reserve` reallocates to an exact size.
//! `clear` drops the elements but keeps the buffer, so a cleared array can be
//! refilled without reallocating.
//!
//! Sub-ranges are expressed with [`ArrayView`]/[`ArrayViewMut`](crate::view::ArrayViewMut)
//! (see [`Array::view`]), which borrow the array for their lifetime, so a view
//! can never outlive or dangle against its source.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity     |
//! |---------------|----------------|
//! | `push_back`   | O(1) amortized |
//! | `pop_back`    | O(1)           |
//! | `insert`      | O(n)           |
//! | `remove`      | O(n)           |
//! | indexing      | O(1)           |
//!
//! # Example
//!
//! ```rust
//! use rust_classic_collections::Array;
//!
//! let mut arr = Array::new();
//! arr.push_back(10);
//! arr.push_back(1);
//! arr.push_back(2);
//!
//! assert_eq!(arr.len(), 3);
//! assert_eq!(arr[0], 10);
//! assert_eq!(arr.pop_back(), Some(2));
//! ```

use std::alloc::{self, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::mem::size_of;
use std::ops::{Index, IndexMut};
use std::ptr::{self, NonNull};

use crate::view::{ArrayView, ArrayViewMut};

/// A growable array backed by a single contiguous buffer.
///
/// Slots `[0, len)` hold live values; slots `[len, capacity)` are
/// uninitialized. Zero-sized element types never allocate.
pub struct Array<T> {
    buf: NonNull<T>,
    cap: usize,
    len: usize,
    _marker: PhantomData<T>,
}

impl<T> Array<T> {
    /// Creates an empty array without allocating.
    pub const fn new() -> Self {
        Self {
            buf: NonNull::dangling(),
            // A ZST buffer can hold any number of elements.
            cap: if size_of::<T>() == 0 { usize::MAX } else { 0 },
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Creates an empty array with room for at least `cap` elements.
    pub fn with_capacity(cap: usize) -> Self {
        let mut arr = Self::new();
        arr.reserve(cap);
        arr
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Appends a value, growing the buffer by doubling if full.
    pub fn push_back(&mut self, value: T) {
        if self.len == self.cap {
            self.grow();
        }
        unsafe {
            ptr::write(self.buf.as_ptr().add(self.len), value);
        }
        self.len += 1;
    }

    /// Removes and returns the last element, or `None` if the array is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        unsafe { Some(ptr::read(self.buf.as_ptr().add(self.len))) }
    }

    /// Inserts `value` at `pos`, shifting `[pos, len)` one slot to the right.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    pub fn insert(&mut self, value: T, pos: usize) {
        assert!(pos <= self.len, "insert position {pos} out of bounds (len {})", self.len);
        if self.len == self.cap {
            self.grow();
        }
        unsafe {
            let p = self.buf.as_ptr().add(pos);
            ptr::copy(p, p.add(1), self.len - pos);
            ptr::write(p, value);
        }
        self.len += 1;
    }

    /// Removes and returns the element at `pos`, shifting `[pos + 1, len)` one
    /// slot to the left. Removing the last index is a plain truncation.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len`.
    pub fn remove(&mut self, pos: usize) -> T {
        assert!(pos < self.len, "remove position {pos} out of bounds (len {})", self.len);
        unsafe {
            let p = self.buf.as_ptr().add(pos);
            let value = ptr::read(p);
            ptr::copy(p.add(1), p, self.len - pos - 1);
            self.len -= 1;
            value
        }
    }

    /// Grows the buffer to exactly `cap` slots. No-op if `cap` does not exceed
    /// the current capacity.
    pub fn reserve(&mut self, cap: usize) {
        if cap <= self.cap || size_of::<T>() == 0 {
            return;
        }
        self.realloc_to(cap);
    }

    /// Returns a reference to the first element, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns a reference to the last element, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns a reference to the element at `i`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns a mutable reference to the element at `i`, or `None` if out of
    /// bounds.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Swaps the elements at indices `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }

    /// Drops all elements. The buffer is kept, so the array can be refilled
    /// without reallocating.
    pub fn clear(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.buf.as_ptr(), self.len);
        // Length goes to zero first so a panicking destructor cannot leave
        // the array observing dropped slots.
        self.len = 0;
        unsafe {
            ptr::drop_in_place(live);
        }
    }

    /// Views the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Views the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }

    /// Iterates over the elements in index order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a read-only view over `[from, to)`.
    ///
    /// The view borrows the array, so the borrow checker rejects any resizing
    /// mutation while the view is alive.
    ///
    /// # Panics
    ///
    /// Panics if `from > to` or `to > len`.
    pub fn view(&self, from: usize, to: usize) -> ArrayView<'_, T> {
        ArrayView::new(self, from, to)
    }

    /// Returns a read-only view over `[from, len)`.
    pub fn view_from(&self, from: usize) -> ArrayView<'_, T> {
        ArrayView::new(self, from, self.len)
    }

    /// Returns a view over the whole array.
    pub fn as_view(&self) -> ArrayView<'_, T> {
        ArrayView::new(self, 0, self.len)
    }

    /// Returns a mutable view over `[from, to)`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to` or `to > len`.
    pub fn view_mut(&mut self, from: usize, to: usize) -> ArrayViewMut<'_, T> {
        ArrayViewMut::new(&mut self.as_mut_slice()[from..to])
    }

    /// Returns a mutable view over the whole array.
    pub fn as_view_mut(&mut self) -> ArrayViewMut<'_, T> {
        ArrayViewMut::new(self.as_mut_slice())
    }

    /// Doubles the capacity (or goes from 0 to 1).
    fn grow(&mut self) {
        debug_assert!(size_of::<T>() != 0, "ZST arrays never run out of capacity");
        let new_cap = if self.cap == 0 { 1 } else { self.cap * 2 };
        self.realloc_to(new_cap);
    }

    fn realloc_to(&mut self, new_cap: usize) {
        let new_layout = Layout::array::<T>(new_cap).expect("capacity overflow");
        assert!(new_layout.size() <= isize::MAX as usize, "capacity overflow");

        let new_ptr = if self.cap == 0 {
            unsafe { alloc::alloc(new_layout) }
        } else {
            let old_layout = Layout::array::<T>(self.cap).expect("capacity overflow");
            unsafe { alloc::realloc(self.buf.as_ptr() as *mut u8, old_layout, new_layout.size()) }
        };

        self.buf = match NonNull::new(new_ptr as *mut T) {
            Some(p) => p,
            None => alloc::handle_alloc_error(new_layout),
        };
        self.cap = new_cap;
    }
}

impl<T: Clone> Array<T> {
    /// Creates an array of `len` copies of `value`.
    pub fn filled(len: usize, value: T) -> Self {
        let mut arr = Self::with_capacity(len);
        for _ in 0..len {
            arr.push_back(value.clone());
        }
        arr
    }

    /// Copies a view's elements into a fresh array.
    pub fn from_view(view: ArrayView<'_, T>) -> Self {
        let mut arr = Self::with_capacity(view.len());
        for v in view.iter() {
            arr.push_back(v.clone());
        }
        arr
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        self.clear();
        if self.cap != 0 && size_of::<T>() != 0 {
            let layout = Layout::array::<T>(self.cap).expect("capacity overflow");
            unsafe {
                alloc::dealloc(self.buf.as_ptr() as *mut u8, layout);
            }
        }
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        let mut arr = Self::with_capacity(self.len);
        for v in self.iter() {
            arr.push_back(v.clone());
        }
        arr
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Index<usize> for Array<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.as_slice()[i]
    }
}

impl<T> IndexMut<usize> for Array<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.as_mut_slice()[i]
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        arr.extend(iter);
        arr
    }
}

impl<T> Extend<T> for Array<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.push_back(v);
        }
    }
}

impl<T: Clone> From<&[T]> for Array<T> {
    fn from(slice: &[T]) -> Self {
        slice.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Same ownership story as a plain buffer of T.
unsafe impl<T: Send> Send for Array<T> {}
unsafe impl<T: Sync> Sync for Array<T> {}
