//! Linear and binary search over arrays and views
//!
//! Binary search recurses over narrower [`ArrayView`]s instead of carrying
//! explicit bounds; the returned index is relative to the view passed in (so
//! for `arr.as_view()` it is the array index). The input must already be
//! sorted ascending; this is the caller's responsibility and is not checked.

use std::cmp::Ordering;

use crate::array::Array;
use crate::view::ArrayView;

/// Scans the array front to back; returns the index of the first match.
pub fn linear_search<T: PartialEq>(arr: &Array<T>, val: &T) -> Option<usize> {
    arr.iter().position(|v| v == val)
}

/// Binary search over a sorted view. Returns the index of a matching element
/// within the view, or `None`.
pub fn binary_search<T: Ord>(view: ArrayView<'_, T>, val: &T) -> Option<usize> {
    if view.is_empty() {
        return None;
    }

    let middle = view.len() / 2;
    match val.cmp(&view[middle]) {
        Ordering::Equal => Some(middle),
        Ordering::Greater => {
            binary_search(view.view_from(middle + 1), val).map(|i| i + middle + 1)
        }
        Ordering::Less => binary_search(view.view(0, middle), val),
    }
}
