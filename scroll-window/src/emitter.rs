use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::RangeChange;

/// A listener invoked synchronously with every distinct range change.
pub type RangeListener = Arc<dyn Fn(&RangeChange) + Send + Sync>;

/// Handle returned by [`RangeListeners::add`], used to remove the listener again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerToken(u64);

/// An ordered registry of range-change listeners.
///
/// Listeners run in registration order. Tokens are never reused, so removing a stale token is a
/// harmless no-op.
#[derive(Clone, Default)]
pub struct RangeListeners {
    entries: Vec<(ListenerToken, RangeListener)>,
    next_token: u64,
}

impl RangeListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, listener: impl Fn(&RangeChange) + Send + Sync + 'static) -> ListenerToken {
        let token = ListenerToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        self.entries.push((token, Arc::new(listener)));
        token
    }

    /// Removes a listener. Returns `false` if the token is unknown.
    pub fn remove(&mut self, token: ListenerToken) -> bool {
        let Some(pos) = self.entries.iter().position(|(t, _)| *t == token) else {
            wwarn!(?token, "RangeListeners: unknown listener token");
            return false;
        };
        self.entries.remove(pos);
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn emit(&self, change: &RangeChange) {
        for (_, listener) in &self.entries {
            listener(change);
        }
    }
}

impl core::fmt::Debug for RangeListeners {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RangeListeners")
            .field("len", &self.entries.len())
            .field("next_token", &self.next_token)
            .finish()
    }
}
