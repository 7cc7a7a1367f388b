//! Top-down merge sort. Splits at the midpoint, sorts both halves and merges them through a
//! scratch buffer that holds the left half.

use std::cmp::Ordering;
use std::mem;
use std::ptr;

sort_impl!("classic_merge_sort_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

pub(crate) fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    let len = v.len();
    if len < 2 {
        return;
    }

    // The left half is never longer than `len / 2`, one buffer of that size serves every merge.
    let mut buf = Vec::<T>::with_capacity(len / 2);

    // SAFETY: `buf` has room for `len / 2` elements and stays alive for the whole sort. Its length
    // remains 0, so it never drops the elements that temporarily pass through it.
    unsafe {
        merge_sort_impl(v, buf.as_mut_ptr(), is_less);
    }
}

/// # Safety
///
/// `buf` must be valid for writes of `v.len() / 2` elements and must not overlap `v`.
unsafe fn merge_sort_impl<T, F>(v: &mut [T], buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // The left half gets the smaller share.
    let mid = len / 2;

    merge_sort_impl(&mut v[..mid], buf, is_less);
    merge_sort_impl(&mut v[mid..], buf, is_less);

    merge(v, mid, buf, is_less);
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` into `v`.
///
/// # Safety
///
/// `buf` must be valid for writes of `mid` elements and must not overlap `v`. `T` must not be a
/// zero-sized type.
unsafe fn merge<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let v = v.as_mut_ptr();
    let v_mid = v.add(mid);
    let v_end = v.add(len);

    // Move the left run out of the way. From here on the slice has a hole of exactly as many slots
    // as there are unconsumed elements in `buf`, located at `hole.dest`. If `is_less` panics,
    // dropping `hole` fills it with those elements and every element is in `v` exactly once again.
    ptr::copy_nonoverlapping(v, buf, mid);
    let mut hole = MergeHole {
        start: buf,
        end: buf.add(mid),
        dest: v,
    };

    let mut right = v_mid;

    while hole.start < hole.end && right < v_end {
        // Take from the right run only if it is strictly less. Ties go to the left run, which
        // keeps equal elements in their original order.
        if is_less(&*right, &*hole.start) {
            ptr::copy_nonoverlapping(right, hole.dest, 1);
            right = right.add(1);
        } else {
            ptr::copy_nonoverlapping(hole.start, hole.dest, 1);
            hole.start = hole.start.add(1);
        }
        hole.dest = hole.dest.add(1);
    }

    // Whatever is left of the right run is already in place. `hole` copies the rest of the left
    // run, if any, into the remaining gap when dropped.
}

// When dropped, copies the range `start..end` into `dest..`.
struct MergeHole<T> {
    start: *mut T,
    end: *mut T,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: `T` is not a zero-sized type, `start..end` is the unconsumed part of the
        // buffer and `dest` points to a gap of exactly that length.
        unsafe {
            let len = self.end.offset_from(self.start) as usize;
            ptr::copy_nonoverlapping(self.start, self.dest, len);
        }
    }
}
