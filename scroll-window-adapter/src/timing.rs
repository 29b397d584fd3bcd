/// Leading-edge debounce over caller-supplied millisecond timestamps.
///
/// The first signal passes through immediately. Every later signal replaces the pending value
/// and restarts the quiet period; [`Self::poll`] releases it once `wait_ms` elapsed without a
/// newer signal. Adapter-driven: nothing happens between calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Debounce<T> {
    pub wait_ms: u64,
    leading: bool,
    pending: Option<Pending<T>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Pending<T> {
    value: T,
    at_ms: u64,
}

impl<T> Debounce<T> {
    pub fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            leading: true,
            pending: None,
        }
    }

    /// Feeds a signal. Returns it back when it may be applied right away.
    pub fn signal(&mut self, value: T, now_ms: u64) -> Option<T> {
        if self.leading {
            self.leading = false;
            return Some(value);
        }
        self.pending = Some(Pending {
            value,
            at_ms: now_ms,
        });
        None
    }

    /// Releases the pending signal once the quiet period is over.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|p| now_ms.saturating_sub(p.at_ms) >= self.wait_ms);
        if !due {
            return None;
        }
        self.pending.take().map(|p| p.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the pending signal without releasing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Cancels any pending signal and re-arms the leading edge.
    pub fn reset(&mut self) {
        self.pending = None;
        self.leading = true;
    }
}

/// Passes at most one signal per `wait_ms`.
///
/// Signals arriving too early are not lost: the most recent one is kept and released by
/// [`Self::poll`] once the interval is over, so the final scroll position always lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Throttle<T> {
    pub wait_ms: u64,
    last_ms: Option<u64>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    pub fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            last_ms: None,
            pending: None,
        }
    }

    /// Feeds a signal. Returns it back when it may be applied right away.
    pub fn signal(&mut self, value: T, now_ms: u64) -> Option<T> {
        if self.is_open(now_ms) {
            self.last_ms = Some(now_ms);
            self.pending = None;
            return Some(value);
        }
        self.pending = Some(value);
        None
    }

    /// Releases the most recent suppressed signal once the interval is over.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        if self.pending.is_none() || !self.is_open(now_ms) {
            return None;
        }
        self.last_ms = Some(now_ms);
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
        self.pending = None;
    }

    fn is_open(&self, now_ms: u64) -> bool {
        match self.last_ms {
            Some(last) => now_ms.saturating_sub(last) >= self.wait_ms,
            None => true,
        }
    }
}
