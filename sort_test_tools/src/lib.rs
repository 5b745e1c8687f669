use std::cmp::Ordering;

/// A descending sort under test.
///
/// `compare(a, b) == Ordering::Greater` places `a` before `b`, so `sort_by(v, |a, b| a.cmp(b))`
/// orders `v` from greatest to least.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Sorts the inclusive window `arr[low..=high]`, does nothing for invalid windows.
    fn sort_range_by<T, F>(arr: &mut [T], low: usize, high: usize, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

pub mod patterns;
