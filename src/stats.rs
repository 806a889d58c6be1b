/// Counts of the element moves a queue has performed behind the scenes.
///
/// `rebalanced` never exceeds the number of elements ever enqueued: an element
/// crosses from the back buffer to the front buffer at most once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QueueStats {
    /// Number of times `dequeue` found the front empty and flipped the back over.
    pub rebalances: usize,
    /// Elements moved by those rebalances.
    pub rebalanced: usize,
    pub normalizations: usize,
    pub normalized: usize,
}

impl QueueStats {
    pub fn total_moved(&self) -> usize {
        self.rebalanced + self.normalized
    }

    pub(crate) fn record_rebalance(&mut self, moved: usize) {
        self.rebalances += 1;
        self.rebalanced += moved;
    }

    pub(crate) fn record_normalization(&mut self, moved: usize) {
        self.normalizations += 1;
        self.normalized += moved;
    }
}
