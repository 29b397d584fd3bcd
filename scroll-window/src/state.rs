/// The last range change handed to listeners.
///
/// Used only to suppress duplicate notifications. `index_version` changes whenever the offset
/// index is rebuilt, so new item lengths are reported even when the indexes stay the same.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateSnapshot {
    pub start_index: usize,
    pub stop_index: usize,
    pub overscan: usize,
    pub index_version: u64,
}

/// A lightweight, serializable snapshot of the scroll position and viewport extent.
///
/// Useful to restore a list across sessions without coupling the window to a UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: u64,
    pub window_length: u32,
}
