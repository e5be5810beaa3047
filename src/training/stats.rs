/// What a single call to `Regression::train` did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrainStats {
    iterations: usize,
    checkpoints: usize,
    cancelled: bool,
}

impl TrainStats {
    #[inline]
    pub fn bump_iteration(&mut self) {
        self.iterations += 1;
    }

    #[inline]
    pub fn bump_checkpoint(&mut self) {
        self.checkpoints += 1;
    }

    #[inline]
    pub fn mark_cancelled(&mut self) {
        self.cancelled = true;
    }

    /// Returns the amount of completed iterations.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the amount of checkpoints emitted.
    pub fn checkpoints(&self) -> usize {
        self.checkpoints
    }

    /// Returns whether the run stopped before doing every requested iteration.
    pub fn cancelled(&self) -> bool {
        self.cancelled
    }
}
