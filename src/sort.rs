//! Classic sorting algorithms over arrays and views
//!
//! Every sort here is a consumer of the [`Array`]/[`ArrayViewMut`] contract:
//! the quadratic sorts index a whole array, while merge sort and quicksort
//! recurse over sub-views obtained with [`ArrayViewMut::split_at`], sorting in
//! place without copying the input (merge sort allocates one scratch array per
//! merge step).
//!
//! Quicksort takes its pivot selection as an injected strategy function, so
//! the partitioning core carries no embedded policy; [`middle_pivot`] is the
//! provided default.
//!
//! All sorts order ascending.

use crate::array::Array;
use crate::heap::MaxHeap;
use crate::traits::Heap;
use crate::view::{ArrayView, ArrayViewMut};

/// Returns `true` if the view is in non-decreasing order.
pub fn is_sorted<T: Ord>(view: ArrayView<'_, T>) -> bool {
    view.as_slice().windows(2).all(|w| w[0] <= w[1])
}

/// Selection sort: O(n²) comparisons, O(n) swaps.
pub fn selection_sort<T: Ord>(arr: &mut Array<T>) {
    let len = arr.len();
    for i in 0..len {
        let mut min_pos = i;
        for j in i + 1..len {
            if arr[j] < arr[min_pos] {
                min_pos = j;
            }
        }
        if i != min_pos {
            arr.swap(i, min_pos);
        }
    }
}

/// Insertion sort: O(n²) worst case, O(n) on nearly-sorted input.
pub fn insertion_sort<T: Ord>(arr: &mut Array<T>) {
    for i in 1..arr.len() {
        let mut pos = i;
        while pos > 0 && arr[pos - 1] > arr[pos] {
            arr.swap(pos - 1, pos);
            pos -= 1;
        }
    }
}

/// Bubble sort: O(n²).
pub fn bubble_sort<T: Ord>(arr: &mut Array<T>) {
    let len = arr.len();
    for i in 0..len {
        for j in 0..len - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
            }
        }
    }
}

/// Merge sort over a whole array.
pub fn merge_sort<T: Ord + Clone>(arr: &mut Array<T>) {
    merge_sort_view(arr.as_view_mut());
}

/// Merge sort over a view: recursively sorts both halves, then merges them
/// through a scratch array.
pub fn merge_sort_view<T: Ord + Clone>(view: ArrayViewMut<'_, T>) {
    if view.len() <= 1 {
        return;
    }

    let middle = view.len() / 2;
    let (mut left, mut right) = view.split_at(middle);
    merge_sort_view(left.reborrow());
    merge_sort_view(right.reborrow());
    merge(&mut left, &mut right);
}

/// Merges two sorted adjacent views back into themselves in order.
fn merge<T: Ord + Clone>(left: &mut ArrayViewMut<'_, T>, right: &mut ArrayViewMut<'_, T>) {
    let mut scratch: Array<T> = Array::with_capacity(left.len() + right.len());
    let mut li = 0;
    let mut ri = 0;

    while li < left.len() && ri < right.len() {
        if right[ri] < left[li] {
            scratch.push_back(right[ri].clone());
            ri += 1;
        } else {
            scratch.push_back(left[li].clone());
            li += 1;
        }
    }
    while li < left.len() {
        scratch.push_back(left[li].clone());
        li += 1;
    }
    while ri < right.len() {
        scratch.push_back(right[ri].clone());
        ri += 1;
    }

    for (i, v) in scratch.iter().enumerate() {
        if i < left.len() {
            left[i] = v.clone();
        } else {
            right[i - left.len()] = v.clone();
        }
    }
}

/// Picks the middle element as the quicksort pivot.
pub fn middle_pivot<T: Clone>(view: &ArrayViewMut<'_, T>) -> T {
    view[view.len() / 2].clone()
}

/// Quicksort over a whole array with the [`middle_pivot`] strategy.
pub fn quick_sort<T: Ord + Clone>(arr: &mut Array<T>) {
    quick_sort_with(arr.as_view_mut(), middle_pivot);
}

/// Quicksort over a view with an injected pivot-selection strategy.
pub fn quick_sort_with<T, F>(view: ArrayViewMut<'_, T>, pivot_strategy: F)
where
    T: Ord + Clone,
    F: Fn(&ArrayViewMut<'_, T>) -> T + Copy,
{
    if view.len() <= 1 {
        return;
    }

    let pivot = pivot_strategy(&view);
    let len = view.len() as isize;
    // Signed indices: j legitimately passes below zero when the pivot is the
    // smallest element.
    let mut i: isize = 0;
    let mut j: isize = len - 1;
    let mut view = view;
    while i <= j {
        while view[i as usize] < pivot {
            i += 1;
        }
        while view[j as usize] > pivot {
            j -= 1;
        }
        if i < j {
            view.swap(i as usize, j as usize);
        }
        if i <= j {
            i += 1;
            j -= 1;
        }
    }

    let (left, right) = view.split_at(i as usize);
    if j > 0 {
        quick_sort_with(left.view(0, (j + 1) as usize), pivot_strategy);
    }
    if (i as usize) < len as usize {
        quick_sort_with(right, pivot_strategy);
    }
}

/// Heap sort: bulk-heapify the array's elements, then drain the maxima.
/// O(n log n), no comparisons beyond `Ord`, no cloning.
pub fn heap_sort<T: Ord>(arr: &mut Array<T>) {
    let mut heap = MaxHeap::from(std::mem::take(arr));
    // pop_max drains in descending order.
    while let Some(v) = heap.pop_max() {
        arr.push_back(v);
    }
    arr.as_mut_slice().reverse();
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURES: &[&[i32]] = &[
        &[],
        &[1],
        &[2, 1],
        &[1, 2, 3, 4, 5],
        &[5, 4, 3, 2, 1],
        &[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5],
        &[7, 7, 7, 7],
        &[0, -3, 8, -3, 2, 100, -50],
    ];

    fn check(sort: impl Fn(&mut Array<i32>)) {
        for fixture in FIXTURES {
            let mut arr: Array<i32> = Array::from(*fixture);
            sort(&mut arr);
            assert!(is_sorted(arr.as_view()), "failed on {fixture:?}: {arr:?}");
            assert_eq!(arr.len(), fixture.len());

            let mut expected = fixture.to_vec();
            expected.sort();
            assert_eq!(arr.as_slice(), expected.as_slice());
        }
    }

    #[test]
    fn test_selection_sort() {
        check(selection_sort);
    }

    #[test]
    fn test_insertion_sort() {
        check(insertion_sort);
    }

    #[test]
    fn test_bubble_sort() {
        check(bubble_sort);
    }

    #[test]
    fn test_merge_sort() {
        check(merge_sort);
    }

    #[test]
    fn test_quick_sort() {
        check(quick_sort);
    }

    #[test]
    fn test_heap_sort() {
        check(heap_sort);
    }

    #[test]
    fn test_quick_sort_custom_strategy() {
        let mut arr: Array<i32> = [9, 1, 8, 2, 7, 3].iter().copied().collect();
        // First element as pivot.
        quick_sort_with(arr.as_view_mut(), |v| v[0].clone());
        assert!(is_sorted(arr.as_view()));
    }

    #[test]
    fn test_sorting_a_sub_view_leaves_rest_alone() {
        let mut arr: Array<i32> = [9, 8, 7, 6, 5, 4].iter().copied().collect();
        merge_sort_view(arr.view_mut(1, 5));
        assert_eq!(arr.as_slice(), &[9, 5, 6, 7, 8, 4]);
    }

    #[test]
    fn test_is_sorted() {
        let sorted: Array<i32> = (0..10).collect();
        assert!(is_sorted(sorted.as_view()));

        let unsorted: Array<i32> = [3, 1, 2].iter().copied().collect();
        assert!(!is_sorted(unsorted.as_view()));
        assert!(is_sorted(unsorted.view(1, 3)));
    }

    #[test]
    fn test_heap_sort_large_descending() {
        let mut arr: Array<i32> = (0..500).map(|i| 499 - i).collect();
        heap_sort(&mut arr);
        assert!(is_sorted(arr.as_view()));
        assert_eq!(arr[0], 0);
        assert_eq!(arr[499], 499);
    }
}
