use scroll_window::{ScrollOverflow, ScrollWindow, WindowOptions};

use crate::{Debounce, ScrollPosition, Throttle, Viewport};

/// Resize notifications are debounced by this many milliseconds unless configured otherwise.
pub const DEFAULT_RESIZE_WAIT_MS: u64 = 20;

/// Scroll notifications are not throttled unless configured otherwise.
pub const DEFAULT_SCROLL_WAIT_MS: u64 = 0;

/// A framework-neutral controller that wraps a [`ScrollWindow`] and turns raw host signals into
/// window updates.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `connect` once the scroll container exists, `disconnect` when it goes away
/// - `on_scroll` / `on_resize` when UI events occur
/// - `tick(now_ms)` each frame/timer tick, to release debounced or throttled signals
///
/// Viewport sizes and scroll positions are passed as reported by the host and projected onto the
/// window's axis here.
#[derive(Clone, Debug)]
pub struct Controller {
    w: ScrollWindow,
    resize: Debounce<u32>,
    scroll: Throttle<u64>,
}

impl Controller {
    /// Creates and initializes a window for `item_count` items.
    pub fn new(
        item_count: usize,
        item_length: impl Fn(usize) -> u32 + Send + Sync + 'static,
        options: WindowOptions,
    ) -> Self {
        let mut w = ScrollWindow::new();
        w.init(item_count, item_length, options);
        Self::from_window(w)
    }

    pub fn from_window(w: ScrollWindow) -> Self {
        Self {
            w,
            resize: Debounce::new(DEFAULT_RESIZE_WAIT_MS),
            scroll: Throttle::new(DEFAULT_SCROLL_WAIT_MS),
        }
    }

    pub fn with_resize_wait_ms(mut self, wait_ms: u64) -> Self {
        self.resize = Debounce::new(wait_ms);
        self
    }

    pub fn with_scroll_wait_ms(mut self, wait_ms: u64) -> Self {
        self.scroll = Throttle::new(wait_ms);
        self
    }

    pub fn window(&self) -> &ScrollWindow {
        &self.w
    }

    pub fn window_mut(&mut self) -> &mut ScrollWindow {
        &mut self.w
    }

    pub fn into_window(self) -> ScrollWindow {
        self.w
    }

    /// Whether a debounced resize or throttled scroll is waiting for `tick`.
    pub fn is_pending(&self) -> bool {
        self.resize.is_pending() || self.scroll.is_pending()
    }

    /// Attaches the controller to a scroll container.
    ///
    /// Re-initializes a window that was disconnected, then applies the viewport and position in
    /// one batch so listeners see a single range.
    pub fn connect(&mut self, viewport: Viewport, position: ScrollPosition) {
        self.resize.reset();
        self.scroll.reset();
        let axis = self.w.axis();
        self.w.batch_update(|w| {
            if !w.is_ready() && !w.reinit() {
                trace_adapter!("connect ignored: window has no item lengths");
                return;
            }
            w.set_window_length(viewport.length_along(axis));
            w.update(Some(position.offset_along(axis)));
        });
    }

    /// Detaches from the scroll container. Pending signals are dropped.
    pub fn disconnect(&mut self) {
        self.resize.reset();
        self.scroll.reset();
        self.w.teardown();
    }

    /// Call this when the UI reports a scroll position change.
    pub fn on_scroll(&mut self, position: ScrollPosition, now_ms: u64) {
        let offset = position.offset_along(self.w.axis());
        if let Some(offset) = self.scroll.signal(offset, now_ms) {
            self.w.on_scroll(offset);
        }
    }

    /// Call this when the UI reports a viewport size change.
    ///
    /// Ignored when the window's `enable_resize` option is off.
    pub fn on_resize(&mut self, viewport: Viewport, now_ms: u64) {
        if !self.w.options().enable_resize {
            return;
        }
        let window_length = viewport.length_along(self.w.axis());
        if let Some(window_length) = self.resize.signal(window_length, now_ms) {
            self.w.on_resize(window_length);
        }
    }

    /// Releases due signals. Returns `true` if anything was applied.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let resize = self.resize.poll(now_ms);
        let scroll = self.scroll.poll(now_ms);
        if resize.is_none() && scroll.is_none() {
            return false;
        }
        trace_adapter!(?resize, ?scroll, now_ms, "Controller::tick");
        self.w.batch_update(|w| {
            if let Some(window_length) = resize {
                w.on_resize(window_length);
            }
            if let Some(offset) = scroll {
                w.on_scroll(offset);
            }
        });
        true
    }

    /// Leading and trailing spacer lengths for the current range.
    ///
    /// `None` when spacer virtualization is off or the window is not connected.
    pub fn spacer_lengths(&self) -> Option<ScrollOverflow> {
        (self.w.is_ready() && self.w.options().virtualize_spacers).then(|| self.w.overflow())
    }

    /// Scroll offset along the window's axis at which item `index` starts.
    pub fn scroll_to_item(&self, index: usize) -> Option<u64> {
        self.w.scroll_to_item(index)
    }
}
