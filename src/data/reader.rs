use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord};
use log::debug;

use super::Sample;
use crate::{RegressionErr, Result, vector::Vector};

/// Reads a table of numbers and splits it into a training and a test set.
///
/// The first row is a header and is never turned into a sample. Every other cell of a row is a
/// feature except the one at the label column, which becomes the target.
pub struct DatasetReader<R: Read> {
    inner: csv::Reader<R>,
}

impl DatasetReader<File> {
    /// Opens the CSV file at `path`.
    ///
    /// # Errors
    /// `DataSource` if the file doesn't exist or can't be opened.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            RegressionErr::DataSource(format!("cannot open '{}': {e}", path.display()))
        })?;

        Ok(Self::from_reader(file))
    }
}

impl<R: Read> DatasetReader<R> {
    pub fn from_reader(rdr: R) -> Self {
        let inner = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(rdr);

        Self { inner }
    }

    /// Consumes the reader and splits its rows in order, without shuffling.
    ///
    /// The training set size threshold is `floor(rows * train_fraction)` where `rows` counts the
    /// header too, a data row goes to the training set iff its header-inclusive index is below
    /// that threshold.
    ///
    /// # Arguments
    /// * `label_column` - The index of the column holding the target.
    /// * `train_fraction` - The portion of rows for the training set, within `[0, 1]`.
    ///
    /// # Returns
    /// The training and test sets, or an error if the data is malformed.
    pub fn split(
        mut self,
        label_column: usize,
        train_fraction: f64,
    ) -> Result<(Vec<Sample>, Vec<Sample>)> {
        if !(0.0..=1.0).contains(&train_fraction) {
            return Err(RegressionErr::InvalidConfig(format!(
                "train fraction must be within [0, 1], got {train_fraction}"
            )));
        }

        let rows = self
            .inner
            .records()
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let train_size = (rows.len() as f64 * train_fraction) as usize;
        debug!(
            "splitting {} rows with a training threshold of {train_size}",
            rows.len()
        );

        let mut train = Vec::new();
        let mut test = Vec::new();

        for (row, record) in rows.iter().enumerate().skip(1) {
            let sample = parse_sample(row, record, label_column)?;

            if row < train_size {
                train.push(sample);
            } else {
                test.push(sample);
            }
        }

        Ok((train, test))
    }
}

fn parse_sample(row: usize, record: &StringRecord, label_column: usize) -> Result<Sample> {
    if label_column >= record.len() {
        return Err(RegressionErr::DataSource(format!(
            "row {row}: label column {label_column} is missing, the row has {} cells",
            record.len()
        )));
    }

    let parse = |column: usize, cell: &str| {
        cell.parse::<f64>().map_err(|_| {
            RegressionErr::DataSource(format!(
                "row {row}, column {column}: cannot parse '{cell}' as a number"
            ))
        })
    };

    let x = record
        .iter()
        .enumerate()
        .filter(|&(column, _)| column != label_column)
        .map(|(column, cell)| parse(column, cell))
        .collect::<Result<Vector>>()?;
    let y = parse(label_column, &record[label_column])?;

    Ok(Sample { x, y })
}
