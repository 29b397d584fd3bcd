use alloc::sync::Arc;

use crate::Axis;

/// Maps an item index to its length along the scroll axis.
///
/// Lengths are unsigned, so negative lengths cannot reach the offset index.
pub type ItemLengthFn = Arc<dyn Fn(usize) -> u32 + Send + Sync>;

/// Configuration for [`crate::ScrollWindow`].
///
/// All fields are plain data, so options are cheap to clone and (with `feature = "serde"`)
/// can be persisted alongside other UI settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WindowOptions {
    /// Extra items reported on each side of the strictly visible range.
    pub overscan: usize,

    /// The scrolling axis.
    pub axis: Axis,

    /// Whether resize notifications (`ScrollWindow::on_resize`) are honored.
    ///
    /// Explicit window-length updates (`ScrollWindow::set_window_length`) always apply.
    pub enable_resize: bool,

    /// Whether range changes carry leading/trailing overflow lengths for spacer sizing.
    pub virtualize_spacers: bool,

    /// Viewport extent along `axis` known at construction time.
    pub initial_window_length: u32,

    /// Scroll offset along `axis` known at construction time.
    pub initial_offset: u64,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            overscan: 3,
            axis: Axis::Vertical,
            enable_resize: true,
            virtualize_spacers: true,
            initial_window_length: 0,
            initial_offset: 0,
        }
    }
}

impl WindowOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_enable_resize(mut self, enable_resize: bool) -> Self {
        self.enable_resize = enable_resize;
        self
    }

    pub fn with_virtualize_spacers(mut self, virtualize_spacers: bool) -> Self {
        self.virtualize_spacers = virtualize_spacers;
        self
    }

    /// Sets the viewport extent used until the host reports a measurement.
    pub fn with_initial_window_length(mut self, window_length: u32) -> Self {
        self.initial_window_length = window_length;
        self
    }

    pub fn with_initial_offset(mut self, offset: u64) -> Self {
        self.initial_offset = offset;
        self
    }
}
