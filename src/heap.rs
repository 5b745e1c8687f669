//! Heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case and sorts fully in place.

use std::cmp::Ordering;

sort_frontend!();

fn sort_impl<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // The root of this binary heap is the element that belongs at the very end of the output.
    // Popping it to the back of the shrinking heap therefore yields greatest-to-least order.

    // Build the heap in linear time.
    for i in (0..v.len() / 2).rev() {
        sift_down(v, i, compare);
    }

    // Pop the remaining least element into its final position.
    for end in (1..v.len()).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0, compare);
    }
}

/// Restores the heap invariant `compare(child, parent) != Less` for the subtree at `node`, where
/// the heap is all of `v`.
fn sift_down<T, F>(v: &mut [T], mut node: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let left = 2 * node + 1;
        let right = left + 1;
        let mut least = node;

        // Strict comparisons, on ties the node and then the left child are kept.
        if left < v.len() && compare(&v[left], &v[least]) == Ordering::Less {
            least = left;
        }
        if right < v.len() && compare(&v[right], &v[least]) == Ordering::Less {
            least = right;
        }

        // Stop if the invariant holds at `node`.
        if least == node {
            break;
        }

        v.swap(node, least);
        node = least;
    }
}
