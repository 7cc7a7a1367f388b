//! Classic comparison sorts over any element type.
//!
//! Every algorithm takes the slice to sort and an `is_less` predicate, which returns `true` iff the
//! first argument must be placed before the second. The predicate should be a strict weak
//! ordering. If it is not, the resulting order is unspecified, but every element of the input is
//! still present exactly once, even if the predicate panics.
//!
//! ```ignore
//! let mut v = [5, 2, 8, 1, 9, 3];
//! classic_sort::quicksort(&mut v, |a, b| a < b);
//! assert!(classic_sort::is_sorted(&v, |a, b| a < b));
//! ```
//!
//! The `stable` and `unstable` modules additionally expose each algorithm in the `sort`/`sort_by`
//! shape of the standard library.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: Ord,
            {
                sort(v);
            }

            #[inline]
            fn sort_by<T, F>(v: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(v, compare);
            }
        }
    };
}

mod algorithm;

pub mod stable;
pub mod unstable;

pub use algorithm::{Algorithm, ParseAlgorithmError};

/// Sorts `v` with a Lomuto partition quicksort, using the last element as pivot.
///
/// Not stable. O(n log n) on average, O(n²) for already sorted input. Stack depth stays
/// O(log n).
#[inline]
pub fn quicksort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    unstable::quicksort::quicksort(v, &mut is_less);
}

/// Sorts `v` with a top-down merge sort.
///
/// Stable. O(n log n), allocates one scratch buffer of `v.len() / 2` elements.
#[inline]
pub fn merge_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    stable::merge_sort::merge_sort(v, &mut is_less);
}

/// Sorts `v` with insertion sort.
///
/// Stable. O(n²), O(n) for nearly sorted input.
#[inline]
pub fn insertion_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    stable::insertion_sort::insertion_sort(v, &mut is_less);
}

/// Sorts `v` with bubble sort, stopping after the first pass without swaps.
///
/// Stable. O(n²), O(n) for sorted input.
#[inline]
pub fn bubble_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    stable::bubble_sort::bubble_sort(v, &mut is_less);
}

/// Sorts `v` with heapsort.
///
/// Not stable. O(n log n) for every input, no allocation.
#[inline]
pub fn heapsort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    unstable::heapsort::heapsort(v, &mut is_less);
}

/// Returns `true` if no element of `v` must be placed before its predecessor.
#[inline]
pub fn is_sorted<T, F>(v: &[T], mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    v.windows(2).all(|w| !is_less(&w[1], &w[0]))
}
