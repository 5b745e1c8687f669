use std::ops::RangeInclusive;

use thiserror::Error;

/// An inclusive `[low, high]` window that cannot be sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("range end {high} is out of bounds for slice of length {len}")]
    OutOfBounds { high: usize, len: usize },

    #[error("range start {low} is greater than range end {high}")]
    Reversed { low: usize, high: usize },
}

/// Validates `[low, high]` against a slice of length `len`.
///
/// Returns `Ok(None)` for a single element window, there is nothing to do.
pub(crate) fn sort_window(
    len: usize,
    low: usize,
    high: usize,
) -> Result<Option<RangeInclusive<usize>>, RangeError> {
    if high >= len {
        return Err(RangeError::OutOfBounds { high, len });
    }

    if low > high {
        return Err(RangeError::Reversed { low, high });
    }

    if low == high {
        return Ok(None);
    }

    Ok(Some(low..=high))
}
