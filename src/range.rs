use std::ops::{Bound, Range, RangeBounds};

use crate::QueueError;

/// Resolves `range` against a queue of length `len` into a half-open `[lo, hi)`.
pub(crate) fn resolve<R: RangeBounds<usize>>(range: R, len: usize) -> Result<Range<usize>, QueueError> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start
            .checked_add(1)
            .ok_or(QueueError::RangeOutOfBounds { end: start, len })?,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end
            .checked_add(1)
            .ok_or(QueueError::RangeOutOfBounds { end, len })?,
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };

    if start > end {
        Err(QueueError::InvalidRange { start, end })
    } else if end > len {
        Err(QueueError::RangeOutOfBounds { end, len })
    } else {
        Ok(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolves_every_bound_shape() {
        assert_eq!(resolve(.., 4), Ok(0..4));
        assert_eq!(resolve(1.., 4), Ok(1..4));
        assert_eq!(resolve(..2, 4), Ok(0..2));
        assert_eq!(resolve(2..=3, 4), Ok(2..4));
        assert_eq!(resolve(4..4, 4), Ok(4..4));
        assert_eq!(
            resolve((Bound::Excluded(0), Bound::Included(1)), 4),
            Ok(1..2)
        );
    }

    #[test]
    fn rejects_malformed_ranges() {
        #[allow(clippy::reversed_empty_ranges)]
        let backwards = 3..1;
        assert_eq!(
            resolve(backwards, 4),
            Err(QueueError::InvalidRange { start: 3, end: 1 })
        );
        assert_eq!(
            resolve(2..5, 4),
            Err(QueueError::RangeOutOfBounds { end: 5, len: 4 })
        );
        assert_eq!(
            resolve(..=usize::MAX, 4),
            Err(QueueError::RangeOutOfBounds {
                end: usize::MAX,
                len: 4
            })
        );
    }
}
