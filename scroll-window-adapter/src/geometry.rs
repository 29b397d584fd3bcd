use scroll_window::Axis;

/// Raw viewport extent as reported by the host (client width/height).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn length_along(self, axis: Axis) -> u32 {
        axis.window_length(self.width, self.height)
    }
}

/// Raw scroll position as reported by the host (scroll left/top).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollPosition {
    pub left: u64,
    pub top: u64,
}

impl ScrollPosition {
    pub fn new(left: u64, top: u64) -> Self {
        Self { left, top }
    }

    pub fn offset_along(self, axis: Axis) -> u64 {
        axis.scroll_offset(self.left, self.top)
    }
}
