use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used in the entire regression crate.
pub type Result<T> = std::result::Result<T, RegressionErr>;

/// The regression crate's error type.
#[derive(Debug)]
pub enum RegressionErr {
    /// Two operands that must agree in length don't.
    DimensionMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
    /// A computation that averages over a dataset was given no examples.
    EmptyDataset {
        what: &'static str,
    },
    InvalidConfig(String),
    Persistence {
        alias: String,
        source: io::Error,
    },
    /// Malformed or missing input data.
    DataSource(String),
}

impl Display for RegressionErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionErr::DimensionMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "dimension mismatch for {what}: got {got}, expected {expected}"
            ),
            RegressionErr::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for a vector of size {len}")
            }
            RegressionErr::EmptyDataset { what } => write!(f, "empty dataset in {what}"),
            RegressionErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            RegressionErr::Persistence { alias, source } => {
                write!(f, "failed to persist parameters of '{alias}': {source}")
            }
            RegressionErr::DataSource(msg) => write!(f, "data source error: {msg}"),
        }
    }
}

impl Error for RegressionErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RegressionErr::Persistence { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<csv::Error> for RegressionErr {
    fn from(value: csv::Error) -> Self {
        Self::DataSource(value.to_string())
    }
}
