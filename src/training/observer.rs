use log::info;

use super::CancelToken;

/// Progress report emitted periodically while training.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkpoint {
    /// The amount of iterations completed so far in the current run.
    pub iteration: usize,
    /// The cost over the training set after that iteration.
    pub cost: f64,
}

/// Receives the checkpoints of a training run and decides whether it should keep going.
pub trait TrainObserver {
    fn checkpoint(&mut self, checkpoint: Checkpoint);

    /// Polled once per iteration boundary, never in the middle of an iteration.
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F: FnMut(Checkpoint)> TrainObserver for F {
    fn checkpoint(&mut self, checkpoint: Checkpoint) {
        self(checkpoint)
    }
}

/// Collects every checkpoint in order.
impl TrainObserver for Vec<Checkpoint> {
    fn checkpoint(&mut self, checkpoint: Checkpoint) {
        self.push(checkpoint);
    }
}

/// Logs every checkpoint and stops once its token, if any, gets cancelled.
#[derive(Debug, Default, Clone)]
pub struct LogObserver {
    alias: String,
    cancel: Option<CancelToken>,
}

impl LogObserver {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            cancel: None,
        }
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

impl TrainObserver for LogObserver {
    fn checkpoint(&mut self, Checkpoint { iteration, cost }: Checkpoint) {
        info!(model = self.alias.as_str(); "iteration: {iteration}, cost: {cost}");
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}
