use alloc::sync::Arc;

use crate::emitter::{ListenerToken, RangeListeners};
use crate::range::span_overflow;
use crate::{
    Axis, Error, ItemLengthFn, RangeChange, ScrollDirection, ScrollOffsetIndex, ScrollOverflow,
    ScrollState, UpdateSnapshot, VisibleRange, WindowOptions, estimate_thresholds,
    resolve_visible_range,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Uninitialized,
    Ready,
}

/// Keeps the visible range of a virtualized list in sync with its viewport.
///
/// The window is UI-agnostic:
/// - It does not hold any UI objects and never renders.
/// - The host drives it with item counts, an item-length function, scroll offsets and viewport
///   extents, all projected onto the scrolling axis.
/// - Range changes are pushed to registered listeners, at most once per distinct result.
///
/// Before [`Self::init`] the window is inert: scroll and resize notifications are ignored and
/// queries report nothing.
#[derive(Clone)]
pub struct ScrollWindow {
    options: WindowOptions,
    phase: Phase,

    item_count: usize,
    item_length: Option<ItemLengthFn>,
    index: ScrollOffsetIndex,
    index_version: u64,

    window_length: u32,
    scroll_offset: u64,
    scroll_direction: Option<ScrollDirection>,

    visible: VisibleRange,
    offset_range: VisibleRange,
    overflow: ScrollOverflow,
    last_update: Option<UpdateSnapshot>,

    listeners: RangeListeners,
    batch_depth: usize,
    resolve_pending: bool,
}

impl Default for ScrollWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollWindow {
    /// Creates an uninitialized window. Call [`Self::init`] once the data is known.
    pub fn new() -> Self {
        Self {
            options: WindowOptions::default(),
            phase: Phase::Uninitialized,
            item_count: 0,
            item_length: None,
            index: ScrollOffsetIndex::default(),
            index_version: 0,
            window_length: 0,
            scroll_offset: 0,
            scroll_direction: None,
            visible: VisibleRange::EMPTY,
            offset_range: VisibleRange::EMPTY,
            overflow: ScrollOverflow::default(),
            last_update: None,
            listeners: RangeListeners::new(),
            batch_depth: 0,
            resolve_pending: false,
        }
    }

    /// Builds the offset index and resolves the first range.
    ///
    /// Calling `init` again re-initializes from scratch (the next range is always reported).
    pub fn init(
        &mut self,
        item_count: usize,
        item_length: impl Fn(usize) -> u32 + Send + Sync + 'static,
        options: WindowOptions,
    ) {
        wdebug!(
            item_count,
            overscan = options.overscan,
            axis = ?options.axis,
            "ScrollWindow::init"
        );
        self.options = options;
        self.item_count = item_count;
        self.item_length = Some(Arc::new(item_length));
        self.window_length = options.initial_window_length;
        self.scroll_offset = options.initial_offset;
        self.scroll_direction = None;
        self.last_update = None;
        self.phase = Phase::Ready;
        self.rebuild_index();
        self.request_resolve();
    }

    /// Drops the offset index and returns to the uninitialized state.
    ///
    /// The item count, length function, options and listeners are kept for the next `init`.
    pub fn teardown(&mut self) {
        wdebug!("ScrollWindow::teardown");
        self.phase = Phase::Uninitialized;
        self.index = ScrollOffsetIndex::default();
        self.visible = VisibleRange::EMPTY;
        self.offset_range = VisibleRange::EMPTY;
        self.overflow = ScrollOverflow::default();
        self.last_update = None;
        self.scroll_direction = None;
        self.resolve_pending = false;
    }

    /// Re-initializes after [`Self::teardown`] with the kept item count, length function and
    /// options. Returns `false` when no length function was ever provided.
    pub fn reinit(&mut self) -> bool {
        if self.item_length.is_none() {
            return false;
        }
        wdebug!(item_count = self.item_count, "ScrollWindow::reinit");
        self.phase = Phase::Ready;
        self.last_update = None;
        self.rebuild_index();
        self.request_resolve();
        true
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    /// Replaces the options, recomputing only what the change requires.
    ///
    /// Changing the axis resets the scroll offset and window length (they were measured along
    /// the old axis). Toggling spacer virtualization forces the next range to be reported.
    pub fn set_options(&mut self, options: WindowOptions) {
        let prev = self.options;
        self.options = options;
        wtrace!(
            overscan = options.overscan,
            axis = ?options.axis,
            "ScrollWindow::set_options"
        );

        if prev.axis != options.axis {
            self.reset_layout();
        } else if prev.virtualize_spacers != options.virtualize_spacers {
            self.last_update = None;
        }
        if prev != options {
            self.request_resolve();
        }
    }

    /// Clones the current options, applies `f`, then delegates to [`Self::set_options`].
    pub fn update_options(&mut self, f: impl FnOnce(&mut WindowOptions)) {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.update_options(|o| o.overscan = overscan);
    }

    pub fn set_axis(&mut self, axis: Axis) {
        self.update_options(|o| o.axis = axis);
    }

    pub fn set_virtualize_spacers(&mut self, virtualize_spacers: bool) {
        self.update_options(|o| o.virtualize_spacers = virtualize_spacers);
    }

    pub fn set_enable_resize(&mut self, enable_resize: bool) {
        self.update_options(|o| o.enable_resize = enable_resize);
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        if self.item_count == item_count {
            return;
        }
        self.item_count = item_count;
        if self.is_ready() {
            self.rebuild_index();
            self.request_resolve();
        }
    }

    pub fn set_item_length(&mut self, item_length: impl Fn(usize) -> u32 + Send + Sync + 'static) {
        self.item_length = Some(Arc::new(item_length));
        if self.is_ready() {
            self.rebuild_index();
            self.request_resolve();
        }
    }

    /// Recomputes the offset index for items at and after `index` only.
    ///
    /// Call this when the lengths of those items changed (the length function is consulted
    /// again), keeping the cost proportional to the affected suffix.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] when `index > item_count`.
    pub fn reset_from_index(&mut self, index: usize) -> Result<(), Error> {
        self.set_item_count_from(index, self.item_count)
    }

    /// Changes the item count while keeping the offset index before `index`.
    ///
    /// This is the partial-rebuild counterpart of [`Self::set_item_count`] for inserts and
    /// removals at or after `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] when `index` exceeds either the old or the new item count.
    pub fn set_item_count_from(&mut self, index: usize, item_count: usize) -> Result<(), Error> {
        let bound = self.item_count.min(item_count);
        if index > bound {
            wwarn!(index, count = bound, "partial rebuild index out of bounds");
            return Err(Error::IndexOutOfBounds {
                index,
                count: bound,
            });
        }
        self.item_count = item_count;
        if !self.is_ready() {
            return Ok(());
        }
        if let Some(length) = &self.item_length {
            self.index = self
                .index
                .rebuilt_from(index, item_count, |i| length(i));
        }
        self.index_version = self.index_version.wrapping_add(1);
        wdebug!(
            from_index = index,
            item_count,
            version = self.index_version,
            "partial index rebuild"
        );
        self.request_resolve();
        Ok(())
    }

    /// Sets the viewport extent along the scroll axis (e.g. when the host first connects).
    ///
    /// Unlike [`Self::on_resize`] this always applies, regardless of `enable_resize`.
    pub fn set_window_length(&mut self, window_length: u32) {
        if self.window_length == window_length {
            return;
        }
        self.window_length = window_length;
        self.request_resolve();
    }

    /// Handles a resize notification from the host.
    ///
    /// Ignored before `init`, when `enable_resize` is off, or when the extent did not change.
    pub fn on_resize(&mut self, window_length: u32) {
        if !self.is_ready() || !self.options.enable_resize {
            return;
        }
        wtrace!(window_length, "on_resize");
        self.set_window_length(window_length);
    }

    /// Handles a scroll notification from the host.
    ///
    /// The cached range is re-resolved only when the scroll thresholds show that it went stale,
    /// so redundant calls are cheap.
    pub fn on_scroll(&mut self, scroll_offset: u64) {
        if !self.is_ready() {
            return;
        }
        let direction = self.move_to(scroll_offset);
        if self.item_count == 0 || self.index.total() == 0 {
            return;
        }

        // The origin keeps leading zero-length items in range, which thresholds can't see.
        if scroll_offset == 0 && self.visible.start_index != 0 {
            self.request_resolve();
            return;
        }

        let stale = estimate_thresholds(
            &self.index,
            self.window_length,
            self.visible,
            scroll_offset,
            direction,
        )
        .map_or(true, |t| {
            wtrace!(
                scroll_offset,
                leading = t.leading,
                trailing = t.trailing,
                "scroll thresholds"
            );
            t.is_stale(direction)
        });
        if stale {
            self.request_resolve();
        }
    }

    /// Resolves the range for `scroll_offset` (or the current offset when `None`).
    pub fn update(&mut self, scroll_offset: Option<u64>) {
        if !self.is_ready() {
            return;
        }
        if let Some(offset) = scroll_offset {
            self.move_to(offset);
        }
        self.request_resolve();
    }

    /// Returns the scroll offset at which item `index` starts (clamped to the last item).
    ///
    /// Returns `None` before `init`.
    pub fn scroll_to_item(&self, index: usize) -> Option<u64> {
        if !self.is_ready() {
            return None;
        }
        if self.item_count == 0 {
            return Some(0);
        }
        Some(self.index.start_of(index.min(self.item_count - 1)))
    }

    /// Batches multiple updates into a single resolve (and at most one notification).
    ///
    /// Hosts that receive several signals per frame (e.g. a resize together with a scroll) should
    /// apply them inside one batch.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        self.batch_depth = self.batch_depth.saturating_add(1);

        f(self);

        debug_assert!(self.batch_depth > 0, "batch_depth underflow");
        self.batch_depth = self.batch_depth.saturating_sub(1);

        if self.batch_depth == 0 && self.resolve_pending {
            self.resolve_now();
        }
    }

    pub fn add_listener(
        &mut self,
        listener: impl Fn(&RangeChange) + Send + Sync + 'static,
    ) -> ListenerToken {
        self.listeners.add(listener)
    }

    pub fn remove_listener(&mut self, token: ListenerToken) -> bool {
        self.listeners.remove(token)
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn axis(&self) -> Axis {
        self.options.axis
    }

    pub fn window_length(&self) -> u32 {
        self.window_length
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    /// The strictly visible range (no overscan).
    pub fn visible_range(&self) -> VisibleRange {
        self.visible
    }

    /// The visible range expanded by the overscan margin, as reported to listeners.
    pub fn offset_range(&self) -> VisibleRange {
        self.offset_range
    }

    /// Overflow around [`Self::offset_range`]. Always zero when spacers are not virtualized.
    pub fn overflow(&self) -> ScrollOverflow {
        self.overflow
    }

    pub fn total_length(&self) -> u64 {
        self.index.total()
    }

    pub fn offset_index(&self) -> &ScrollOffsetIndex {
        &self.index
    }

    /// Bumped on every (full or partial) rebuild of the offset index.
    pub fn index_version(&self) -> u64 {
        self.index_version
    }

    pub fn last_update(&self) -> Option<UpdateSnapshot> {
        self.last_update
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.index
            .total()
            .saturating_sub(self.window_length as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// Returns a lightweight snapshot of the scroll position and viewport extent.
    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll_offset,
            window_length: self.window_length,
        }
    }

    /// Restores a previously captured [`ScrollState`] with a single resolve.
    pub fn restore_scroll_state(&mut self, state: ScrollState) {
        self.batch_update(|w| {
            w.set_window_length(state.window_length);
            w.update(Some(state.offset));
        });
    }

    fn move_to(&mut self, offset: u64) -> ScrollDirection {
        let distance = offset as i128 - self.scroll_offset as i128;
        let distance = i64::try_from(distance).unwrap_or(if distance > 0 {
            i64::MAX
        } else {
            i64::MIN
        });
        let direction = ScrollDirection::from_distance(distance);
        if distance != 0 {
            self.scroll_direction = Some(direction);
        }
        self.scroll_offset = offset;
        direction
    }

    fn reset_layout(&mut self) {
        self.scroll_offset = 0;
        self.window_length = 0;
        self.scroll_direction = None;
        self.last_update = None;
    }

    fn rebuild_index(&mut self) {
        self.index = match &self.item_length {
            Some(length) => ScrollOffsetIndex::build(self.item_count, |i| length(i)),
            None => ScrollOffsetIndex::default(),
        };
        self.index_version = self.index_version.wrapping_add(1);
        wdebug!(
            item_count = self.item_count,
            total = self.index.total(),
            version = self.index_version,
            "rebuild_index"
        );
    }

    fn request_resolve(&mut self) {
        if !self.is_ready() {
            return;
        }
        if self.batch_depth > 0 {
            self.resolve_pending = true;
            return;
        }
        self.resolve_now();
    }

    fn resolve_now(&mut self) {
        self.resolve_pending = false;
        if !self.is_ready() {
            return;
        }

        let count = self.item_count;
        let total = self.index.total();
        if count == 0 || total == 0 {
            self.visible = VisibleRange::EMPTY;
            self.offset_range = VisibleRange::EMPTY;
            self.overflow = ScrollOverflow::default();
        } else {
            self.visible = resolve_visible_range(&self.index, self.window_length, self.scroll_offset);
            self.offset_range = self.visible.expand(self.options.overscan, count);
            self.overflow = if self.options.virtualize_spacers {
                span_overflow(
                    &self.index,
                    self.offset_range.start_index,
                    self.offset_range.stop_index,
                )
            } else {
                ScrollOverflow::default()
            };
        }

        let snapshot = UpdateSnapshot {
            start_index: self.offset_range.start_index,
            stop_index: self.offset_range.stop_index,
            overscan: self.options.overscan,
            index_version: self.index_version,
        };
        if self.last_update == Some(snapshot) {
            wtrace!(
                start_index = snapshot.start_index,
                stop_index = snapshot.stop_index,
                "range unchanged"
            );
            return;
        }
        self.last_update = Some(snapshot);

        let change = RangeChange {
            start_index: snapshot.start_index,
            stop_index: snapshot.stop_index,
            overscan: snapshot.overscan,
            count,
            total_length: total,
            overflow: self.options.virtualize_spacers.then_some(self.overflow),
        };
        wdebug!(
            start_index = change.start_index,
            stop_index = change.stop_index,
            overscan = change.overscan,
            "visible range change"
        );
        self.listeners.emit(&change);
    }
}

impl core::fmt::Debug for ScrollWindow {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollWindow")
            .field("options", &self.options)
            .field("phase", &self.phase)
            .field("item_count", &self.item_count)
            .field("index_version", &self.index_version)
            .field("window_length", &self.window_length)
            .field("scroll_offset", &self.scroll_offset)
            .field("visible", &self.visible)
            .field("offset_range", &self.offset_range)
            .field("overflow", &self.overflow)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}
