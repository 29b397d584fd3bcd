use crate::error::validate_indexes;
use crate::{Error, ScrollOffsetIndex, ScrollOverflow, VisibleRange};

/// Resolves the items intersecting a scroll window of `window_length` starting at
/// `scroll_offset`.
///
/// - `start_index` is the first item whose trailing edge lies past `scroll_offset` (`0` when the
///   window sits at the origin, so leading zero-length items are kept).
/// - `stop_index` is the first item at or after `start_index` whose trailing edge lies past the
///   window's far edge.
///
/// When no item qualifies (the window reaches past the end of the list) the index is clamped to
/// the last item. Empty and zero-length lists resolve to [`VisibleRange::EMPTY`].
///
/// Both lookups are `O(log n)`; the second one is seeded with `start_index`.
pub fn resolve_visible_range(
    index: &ScrollOffsetIndex,
    window_length: u32,
    scroll_offset: u64,
) -> VisibleRange {
    if index.is_empty() || index.total() == 0 {
        return VisibleRange::EMPTY;
    }

    let last = index.len() - 1;
    let start_index = if scroll_offset == 0 {
        0
    } else {
        index
            .partition_point_from(0, |end| end > scroll_offset)
            .min(last)
    };

    let window_end = scroll_offset.saturating_add(window_length as u64);
    let stop_index = index
        .partition_point_from(start_index, |end| end > window_end)
        .min(last);

    wtrace!(
        scroll_offset,
        window_length,
        start_index,
        stop_index,
        "resolve_visible_range"
    );
    VisibleRange {
        start_index,
        stop_index,
    }
}

/// Inclusive length covered by items `start..=stop`.
///
/// # Errors
///
/// [`Error::InvalidRange`] when `start > stop`, [`Error::IndexOutOfBounds`] when `stop` is not a
/// valid item index.
pub fn length_between(index: &ScrollOffsetIndex, start: usize, stop: usize) -> Result<u64, Error> {
    validate_indexes(index.len(), start, stop)?;
    Ok(span_length(index, start, stop))
}

/// Length fully outside `start..=stop` on each side.
///
/// # Errors
///
/// Same validation as [`length_between`].
pub fn overflow(
    index: &ScrollOffsetIndex,
    start: usize,
    stop: usize,
) -> Result<ScrollOverflow, Error> {
    validate_indexes(index.len(), start, stop)?;
    Ok(span_overflow(index, start, stop))
}

// Callers guarantee `start <= stop < index.len()`.
pub(crate) fn span_length(index: &ScrollOffsetIndex, start: usize, stop: usize) -> u64 {
    index.end_of(stop).saturating_sub(index.start_of(start))
}

pub(crate) fn span_overflow(index: &ScrollOffsetIndex, start: usize, stop: usize) -> ScrollOverflow {
    debug_assert!(start <= stop && stop < index.len());
    let last = index.len().saturating_sub(1);
    let after = if stop >= last {
        0
    } else {
        span_length(index, stop + 1, last)
    };
    ScrollOverflow {
        before: index.start_of(start),
        after,
    }
}
