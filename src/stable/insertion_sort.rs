use std::cmp::Ordering;

sort_impl!("classic_insertion_sort_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

pub(crate) fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        insert_tail(&mut v[..=i], is_less);
    }
}

/// Moves the last element of `v` to the left until it no longer sorts before its predecessor.
/// `v[..v.len() - 1]` must already be sorted.
///
/// Shifting happens one swap at a time, so the slice holds every element at any point, even if
/// `is_less` panics.
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut i = v.len() - 1;

    // Stops at the first element that is not greater, equal elements keep their order.
    while i > 0 && is_less(&v[i], &v[i - 1]) {
        v.swap(i - 1, i);
        i -= 1;
    }
}
