//! Adapter utilities for the `scroll-window` crate.
//!
//! The `scroll-window` crate is UI-agnostic and focuses on the range math and state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Viewport and scroll-position projection onto the scrolling axis
//! - Leading-edge resize debouncing and scroll throttling over caller-supplied timestamps
//! - A [`Controller`] tying both to a [`scroll_window::ScrollWindow`]
//!
//! This crate is intentionally framework-agnostic (no DOM/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[cfg(feature = "tracing")]
macro_rules! trace_adapter {
    ($($tt:tt)*) => {
        tracing::trace!(target: "scroll_window_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_adapter {
    ($($tt:tt)*) => {};
}

mod controller;
mod geometry;
mod timing;


pub use controller::{Controller, DEFAULT_RESIZE_WAIT_MS, DEFAULT_SCROLL_WAIT_MS};
pub use geometry::{ScrollPosition, Viewport};
pub use timing::{Debounce, Throttle};
