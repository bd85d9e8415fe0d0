#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! CSV ingestion and read-only dataset access for the wildfire map.
//!
//! The whole dataset is small enough to hold in memory, so there is no
//! database: [`Dataset::load`] reads the derived CSV files once at
//! startup and the result is shared read-only for the process lifetime.
//! The [`prepare`] module holds the one-time derivation from the raw
//! upstream exports to those derived files.

pub mod prepare;

use std::path::Path;

use wildfire_map_dataset_models::{ExpenditureRecord, FireRecord};

/// Errors that can occur while loading or preparing the dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parse or serialize error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// The in-memory wildfire dataset.
///
/// Constructed once, then only read. Every aggregation query takes
/// `&Dataset`, which keeps the engine free of file I/O and lets tests
/// build a dataset from literal records.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    fires: Vec<FireRecord>,
    expenditures: Vec<ExpenditureRecord>,
}

impl Dataset {
    /// Builds a dataset from already-loaded records.
    #[must_use]
    pub const fn new(fires: Vec<FireRecord>, expenditures: Vec<ExpenditureRecord>) -> Self {
        Self {
            fires,
            expenditures,
        }
    }

    /// Loads the dataset from `main_data.csv` and `expenditure.csv` in
    /// the given directory.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if either file is missing or fails to
    /// parse.
    pub fn load(data_dir: &Path) -> Result<Self, DatasetError> {
        let fires = read_csv::<FireRecord>(&data_dir.join("main_data.csv"))?;
        let expenditures = read_csv::<ExpenditureRecord>(&data_dir.join("expenditure.csv"))?;

        log::info!(
            "Loaded {} fire records and {} expenditure rows from {}",
            fires.len(),
            expenditures.len(),
            data_dir.display()
        );

        Ok(Self::new(fires, expenditures))
    }

    /// All fire records, in file order.
    #[must_use]
    pub fn fires(&self) -> &[FireRecord] {
        &self.fires
    }

    /// Yearly expenditure rows, in file order.
    #[must_use]
    pub fn expenditures(&self) -> &[ExpenditureRecord] {
        &self.expenditures
    }
}

/// Reads every row of a headed CSV file into `T`.
fn read_csv<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new().from_path(path)?;
    reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(DatasetError::from)
}
