/// Shared surface every sort implementation in the workspace is tested and benchmarked through.
///
/// By convention `name` ends with `_stable` or `_unstable`, the stability tests rely on it.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
