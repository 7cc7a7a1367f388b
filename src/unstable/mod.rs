//! Sorts that may reorder equal elements.

pub mod heapsort;
pub mod quicksort;
