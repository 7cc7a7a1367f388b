//! Sorts that keep equal elements in their original order.

pub mod bubble_sort;
pub mod insertion_sort;
pub mod merge_sort;
