//! Heapsort over an implicit max-heap, "max" being the element that sorts last.

use std::cmp::Ordering;

sort_impl!("classic_heapsort_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    heapsort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    heapsort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

pub(crate) fn heapsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // Build the heap bottom-up, starting at the last node that has children.
    for node in (0..len / 2).rev() {
        heapify(v, node, is_less);
    }

    // Pop maximal elements from the heap.
    for end in (1..len).rev() {
        v.swap(0, end);
        heapify(&mut v[..end], 0, is_less);
    }
}

/// Restores the heap property for the subtree rooted at `node`, assuming both child subtrees
/// already are heaps.
fn heapify<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    loop {
        let left = 2 * node + 1;
        let right = left + 1;

        let mut largest = node;
        if left < len && is_less(&v[largest], &v[left]) {
            largest = left;
        }
        if right < len && is_less(&v[largest], &v[right]) {
            largest = right;
        }

        if largest == node {
            return;
        }

        v.swap(node, largest);
        node = largest;
    }
}
