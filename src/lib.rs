//! In-place, comparator-driven sorts that order a slice, or an inclusive window of it, from
//! greatest to least.
//!
//! Both algorithms share the same entry points:
//!
//! - `sort` / `sort_by` sort the whole slice.
//! - `sort_range` / `sort_range_by` sort the inclusive window `[low, high]` and silently do
//!   nothing if the window is empty, a single element, or out of bounds.
//! - `try_sort_range_by` sorts the same window but reports invalid windows as [`RangeError`].
//!
//! A comparator returning [`Ordering::Greater`] for `(a, b)` places `a` before `b`.

use std::cmp::Ordering;

/// Generates the public front end of a sort module around its private `sort_impl`.
///
/// `sort_impl` receives an already validated window of at least two elements and the caller's
/// comparator.
macro_rules! sort_frontend {
    () => {
        /// Sorts `v` from greatest to least according to [`Ord`].
        #[inline]
        pub fn sort<T>(v: &mut [T])
        where
            T: Ord,
        {
            sort_by(v, T::cmp);
        }

        /// Sorts `v` so that `compare(&v[i], &v[i + 1])` is never [`Ordering::Less`].
        ///
        /// Slices with fewer than two elements are left untouched.
        #[inline]
        pub fn sort_by<T, F>(v: &mut [T], compare: F)
        where
            F: FnMut(&T, &T) -> Ordering,
        {
            if v.len() < 2 {
                return;
            }

            let high = v.len() - 1;
            sort_range_by(v, 0, high, compare);
        }

        /// Sorts the inclusive window `v[low..=high]` from greatest to least according to [`Ord`].
        #[inline]
        pub fn sort_range<T>(v: &mut [T], low: usize, high: usize)
        where
            T: Ord,
        {
            sort_range_by(v, low, high, T::cmp);
        }

        /// Sorts the inclusive window `v[low..=high]`. Elements outside the window are untouched.
        ///
        /// Does nothing if `high >= v.len()` or `low >= high`.
        pub fn sort_range_by<T, F>(v: &mut [T], low: usize, high: usize, mut compare: F)
        where
            F: FnMut(&T, &T) -> Ordering,
        {
            if let Ok(Some(window)) = crate::range::sort_window(v.len(), low, high) {
                sort_impl(&mut v[window], &mut compare);
            }
        }

        /// Like [`sort_range_by`], but reports an out of bounds or reversed window instead of
        /// ignoring it. A single element window (`low == high`) is already sorted and is `Ok`.
        pub fn try_sort_range_by<T, F>(
            v: &mut [T],
            low: usize,
            high: usize,
            mut compare: F,
        ) -> Result<(), crate::RangeError>
        where
            F: FnMut(&T, &T) -> Ordering,
        {
            if let Some(window) = crate::range::sort_window(v.len(), low, high)? {
                sort_impl(&mut v[window], &mut compare);
            }

            Ok(())
        }
    };
}

mod range;

pub mod heap;
pub mod selection;

pub use range::RangeError;

/// Returns `true` if no adjacent pair of `v` compares as [`Ordering::Less`], i.e. `v` is in the
/// order the sorts in this crate produce for `compare`.
pub fn is_sorted_descending_by<T, F>(v: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    v.windows(2).all(|w| compare(&w[0], &w[1]) != Ordering::Less)
}
