/// The scrolling axis of a list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

impl Axis {
    pub fn is_vertical(self) -> bool {
        self == Self::Vertical
    }

    /// Picks the viewport extent along this axis (height for vertical lists).
    pub fn window_length(self, width: u32, height: u32) -> u32 {
        match self {
            Self::Vertical => height,
            Self::Horizontal => width,
        }
    }

    /// Picks the scroll displacement along this axis (`top` for vertical lists).
    pub fn scroll_offset(self, left: u64, top: u64) -> u64 {
        match self {
            Self::Vertical => top,
            Self::Horizontal => left,
        }
    }
}

/// Direction of the most recent scroll movement.
///
/// `Forward` is down for vertical lists and right for horizontal ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

impl ScrollDirection {
    /// Positive distances scroll forward; zero and negative distances count as backward.
    pub fn from_distance(distance: i64) -> Self {
        if distance > 0 {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

/// An inclusive range of item indexes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub stop_index: usize, // inclusive
}

impl VisibleRange {
    /// The "nothing to show" range reported for empty or zero-length lists.
    pub const EMPTY: Self = Self {
        start_index: 0,
        stop_index: 0,
    };

    pub fn new(start_index: usize, stop_index: usize) -> Self {
        Self {
            start_index,
            stop_index,
        }
    }

    /// Number of indexes covered by the range.
    pub fn len(&self) -> usize {
        self.stop_index.saturating_sub(self.start_index) + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start_index <= index && index <= self.stop_index
    }

    /// Expands the range by `overscan` on each side, clamped to `[0, count - 1]`.
    pub fn expand(self, overscan: usize, count: usize) -> Self {
        let last = count.saturating_sub(1);
        Self {
            start_index: self.start_index.saturating_sub(overscan),
            stop_index: self.stop_index.saturating_add(overscan).min(last),
        }
    }
}

/// Length fully outside a rendered range, used to size leading/trailing spacers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollOverflow {
    pub before: u64,
    pub after: u64,
}

/// Payload of a visible-range change notification.
///
/// `start_index`/`stop_index` are inclusive and already expanded by `overscan`. `overflow` is
/// `None` when spacer virtualization is disabled. `total_length` is the summed length of all
/// items, i.e. the scrollable extent the spacers preserve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeChange {
    pub start_index: usize,
    pub stop_index: usize,
    pub overscan: usize,
    pub count: usize,
    pub total_length: u64,
    pub overflow: Option<ScrollOverflow>,
}

impl RangeChange {
    /// Returns `true` when there is nothing to render: no items, or only zero-length ones.
    ///
    /// Both cases report the `{0, 0}` range, which is otherwise a valid single-item range.
    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.total_length == 0
    }

    pub fn range(&self) -> VisibleRange {
        VisibleRange::new(self.start_index, self.stop_index)
    }
}
