use std::cmp::Ordering;

sort_impl!("classic_bubble_sort_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

pub(crate) fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Everything at or after `unsorted_len` is in its final position.
    let mut unsorted_len = v.len();

    while unsorted_len > 1 {
        let mut swapped = false;

        for j in 0..unsorted_len - 1 {
            if is_less(&v[j + 1], &v[j]) {
                v.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            // A pass without swaps saw only ordered neighbours.
            return;
        }

        unsorted_len -= 1;
    }
}
