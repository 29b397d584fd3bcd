use alloc::vec::Vec;

/// Cumulative end offsets for every item along the scroll axis.
///
/// Entry `i` is the sum of the lengths of items `0..=i`, so it marks the trailing edge of item
/// `i`. The entry before the first item is conceptually `0`. Entries never decrease.
///
/// The index is rebuilt as a whole value (see [`Self::build`] and [`Self::rebuilt_from`]) rather
/// than patched in place, so a reader always sees a consistent snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollOffsetIndex {
    ends: Vec<u64>,
}

impl ScrollOffsetIndex {
    /// Builds the full index for `item_count` items.
    pub fn build(item_count: usize, length: impl Fn(usize) -> u32) -> Self {
        let mut ends = Vec::with_capacity(item_count);
        accumulate(&mut ends, 0, item_count, &length);
        Self { ends }
    }

    /// Returns a new index that keeps entries `0..from_index` and recomputes the rest.
    ///
    /// Use this when only items at or after `from_index` changed length, or when items were
    /// inserted/removed past that point. `item_count` is the new item count; `from_index == 0`
    /// rebuilds everything.
    pub fn rebuilt_from(
        &self,
        from_index: usize,
        item_count: usize,
        length: impl Fn(usize) -> u32,
    ) -> Self {
        let keep = from_index.min(self.ends.len()).min(item_count);
        let mut ends = Vec::with_capacity(item_count);
        ends.extend_from_slice(&self.ends[..keep]);
        accumulate(&mut ends, keep, item_count, &length);
        Self { ends }
    }

    pub fn len(&self) -> usize {
        self.ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// Total length of all items (the last entry, or `0`).
    pub fn total(&self) -> u64 {
        self.ends.last().copied().unwrap_or(0)
    }

    /// Trailing edge of item `index`. Out-of-range indexes read as `0`.
    pub fn end_of(&self, index: usize) -> u64 {
        self.ends.get(index).copied().unwrap_or(0)
    }

    /// Leading edge of item `index`, i.e. the entry before it (`0` for the first item).
    pub fn start_of(&self, index: usize) -> u64 {
        match index.checked_sub(1) {
            Some(prev) => self.end_of(prev),
            None => 0,
        }
    }

    /// Length of a single item, recovered from the cumulative entries.
    pub fn item_length(&self, index: usize) -> u64 {
        self.end_of(index).saturating_sub(self.start_of(index))
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.ends
    }

    /// Returns the smallest index `>= lower` whose entry satisfies `pred`, or `len()` if none.
    ///
    /// `pred` must be monotone over the entries (false ... false, true ... true). Seeding
    /// `lower` with a known bound keeps follow-up searches from rescanning the prefix.
    pub fn partition_point_from(&self, lower: usize, mut pred: impl FnMut(u64) -> bool) -> usize {
        let lower = lower.min(self.ends.len());
        lower + self.ends[lower..].partition_point(|&end| !pred(end))
    }
}

fn accumulate(ends: &mut Vec<u64>, from: usize, to: usize, length: &impl Fn(usize) -> u32) {
    let mut acc = match from.checked_sub(1) {
        Some(prev) => ends[prev],
        None => 0,
    };
    for i in from..to {
        acc = acc.saturating_add(length(i) as u64);
        ends.push(acc);
    }
}
