use std::cmp::Ordering;

/// Signature shared by `selection::sort_range_by` and `heap::sort_range_by`.
pub type SortRangeFn = fn(&mut [u8], usize, usize, fn(&u8, &u8) -> Ordering);

/// Interprets the first two bytes as the window bounds and the rest as the values to sort, then
/// checks the order, permutation and window isolation properties.
pub fn check_sort_range(data: &[u8], sort_range_by: SortRangeFn) {
    let (low, high, values) = match data {
        [low, high, values @ ..] => (*low as usize, *high as usize, values),
        _ => return,
    };

    let mut v = values.to_vec();
    sort_range_by(&mut v, low, high, u8::cmp);

    if high >= values.len() || low >= high {
        assert_eq!(v, values);
        return;
    }

    assert_eq!(v[..low], values[..low]);
    assert_eq!(v[(high + 1)..], values[(high + 1)..]);
    assert!(desc_sort::is_sorted_descending_by(&v[low..=high], u8::cmp));

    let mut counts = [0usize; 256];
    for val in &values[low..=high] {
        counts[*val as usize] += 1;
    }
    for val in &v[low..=high] {
        counts[*val as usize] -= 1;
    }
    assert!(counts.iter().all(|count| *count == 0));
}
