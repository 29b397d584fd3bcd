//! Incremental visible-range windowing for virtualized lists.
//!
//! For host-side utilities (resize debouncing, scroll throttling, axis projection), see the
//! `scroll-window-adapter` crate.
//!
//! Given an item count and a function mapping an index to its length along the scroll axis, this
//! crate works out which contiguous slice of items intersects a viewport, plus the empty space
//! needed before and after that slice so the scrollbar keeps its true proportions. The pieces:
//!
//! - [`ScrollOffsetIndex`]: cumulative end offsets, rebuilt fully or from an index onward.
//! - [`resolve_visible_range`]: `O(log n)` offset → range lookup.
//! - [`estimate_thresholds`]: `O(1)` check whether a cached range survives a scroll movement.
//! - [`ScrollWindow`]: the state machine tying these together and notifying listeners only when
//!   the reported range actually changes.
//!
//! It is UI-agnostic. A host is expected to provide:
//! - the viewport extent along the scroll axis (height for vertical lists)
//! - the scroll offset along that axis
//! - item lengths
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod emitter;
mod error;
mod offset_index;
mod options;
mod range;
mod state;
mod threshold;
mod types;
mod window;


pub use emitter::{ListenerToken, RangeListener, RangeListeners};
pub use error::Error;
pub use offset_index::ScrollOffsetIndex;
pub use options::{ItemLengthFn, WindowOptions};
pub use range::{length_between, overflow, resolve_visible_range};
pub use state::{ScrollState, UpdateSnapshot};
pub use threshold::{ScrollThresholds, estimate_thresholds};
pub use types::{Axis, RangeChange, ScrollDirection, ScrollOverflow, VisibleRange};
pub use window::ScrollWindow;
