pub mod config;
pub mod data;
pub mod error;
pub mod params;
pub mod regression;
pub mod storage;
pub mod training;
pub mod vector;

pub use error::{RegressionErr, Result};
