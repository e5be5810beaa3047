mod cancel;
mod config;
mod observer;
mod stats;

pub use cancel::CancelToken;
pub use config::TrainConfig;
pub use observer::{Checkpoint, LogObserver, TrainObserver};
pub use stats::TrainStats;
