//! Selection sort, *O*(*n*^2) comparisons and at most *n* - 1 swaps regardless of input order.

use std::cmp::Ordering;

sort_frontend!();

fn sort_impl<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();

    for i in 0..len - 1 {
        // Find the greatest element of the unsorted tail. Only a strictly greater element moves
        // the candidate, so the first of several equal maxima is selected.
        let mut max_index = i;
        for j in (i + 1)..len {
            if compare(&v[j], &v[max_index]) == Ordering::Greater {
                max_index = j;
            }
        }

        if max_index != i {
            v.swap(i, max_index);
        }
    }
}
