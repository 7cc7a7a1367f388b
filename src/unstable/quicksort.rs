//! Recursive quicksort with a Lomuto partition around the last element.

use std::cmp::Ordering;
use std::mem;

sort_impl!("classic_quicksort_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

pub(crate) fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() < 2 {
            return;
        }

        let pivot_pos = lomuto_partition(v, is_less);

        let (left, right) = mem::take(&mut v).split_at_mut(pivot_pos);
        let right = &mut right[1..];

        // Recurse into the shorter side and continue with the longer one. Sorted input puts every
        // element on one side, this keeps the stack depth at O(log n) regardless.
        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Moves every element that `is_less` than the last element to the front, then swaps the last
/// element right behind them. Returns the final position of that pivot.
fn lomuto_partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(len > 0);

    let (rest, pivot) = v.split_at_mut(len - 1);
    let pivot = &pivot[0];

    let mut lt_count = 0;
    for r in 0..rest.len() {
        if is_less(&rest[r], pivot) {
            rest.swap(lt_count, r);
            lt_count += 1;
        }
    }

    v.swap(lt_count, len - 1);

    lt_count
}
