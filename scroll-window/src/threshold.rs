use crate::error::validate_indexes;
use crate::range::span_length;
use crate::{Error, ScrollDirection, ScrollOffsetIndex, VisibleRange};

/// Remaining scroll distance, per side, before a cached visible range goes stale.
///
/// `leading` refers to the start of the window (top/left), `trailing` to its end
/// (bottom/right). Negative values mean the range no longer matches the window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollThresholds {
    pub leading: i64,
    pub trailing: i64,
}

impl ScrollThresholds {
    /// Returns `true` when the cached range must be resolved again.
    ///
    /// Any negative value is stale. When moving forward a value of exactly `0` is stale as well:
    /// the boundary item's trailing edge then coincides with the window edge, and the resolver
    /// already attributes that position to the next item.
    pub fn is_stale(&self, direction: ScrollDirection) -> bool {
        match direction {
            ScrollDirection::Forward => self.leading <= 0 || self.trailing <= 0,
            ScrollDirection::Backward => self.leading < 0 || self.trailing < 0,
        }
    }
}

/// Estimates how much further the window can move in `direction` before `range` (resolved for
/// an earlier offset) stops describing the items inside the window at `scroll_offset`.
///
/// This is `O(1)` over the offset index, so hosts can call it on every scroll tick and only fall
/// back to [`crate::resolve_visible_range`] when [`ScrollThresholds::is_stale`] says so.
///
/// # Errors
///
/// Same validation as [`crate::length_between`] applied to `range`.
pub fn estimate_thresholds(
    index: &ScrollOffsetIndex,
    window_length: u32,
    range: VisibleRange,
    scroll_offset: u64,
    direction: ScrollDirection,
) -> Result<ScrollThresholds, Error> {
    let VisibleRange {
        start_index,
        stop_index,
    } = range;
    validate_indexes(index.len(), start_index, stop_index)?;

    let visible = to_signed(span_length(index, start_index, stop_index));
    let window = window_length as i64;

    if scroll_offset == 0 && direction == ScrollDirection::Forward {
        return Ok(ScrollThresholds {
            leading: 0,
            trailing: visible - window,
        });
    }

    // How far the window has moved into the first visible item, and how much of the visible
    // items still hangs past the window's far edge.
    let front = to_signed(scroll_offset) - to_signed(index.start_of(start_index));
    let back = visible - window - front;

    let thresholds = match direction {
        ScrollDirection::Backward => ScrollThresholds {
            leading: front,
            trailing: to_signed(index.item_length(stop_index)) - back,
        },
        ScrollDirection::Forward => ScrollThresholds {
            leading: to_signed(index.item_length(start_index)) - front,
            trailing: back,
        },
    };
    Ok(thresholds)
}

fn to_signed(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}
