//! One-time derivation from the raw upstream exports.
//!
//! The upstream `fire_final.csv` encodes causes as binary flag columns
//! and mixes casings in the sub-cause labels; `fire_brigade.csv` has
//! spreadsheet-style headers. This module normalizes both into the
//! derived `main_data.csv` and the joined `expenditure.csv` that
//! [`crate::Dataset::load`] consumes. Run via the CLI `prepare`
//! subcommand whenever the upstream exports change.

use std::path::Path;

use wildfire_map_dataset_models::{ExpenditureRecord, FireRecord, RawExpenditureRow, RawFireRow};

use crate::DatasetError;

/// Reads the raw `fire_final.csv` export and derives [`FireRecord`]s
/// from it (cause flags collapsed, sub-cause labels title-cased).
///
/// # Errors
///
/// Returns [`DatasetError`] if the file is missing or fails to parse.
pub fn load_raw_fires(path: &Path) -> Result<Vec<FireRecord>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new().from_path(path)?;
    let records = reader
        .deserialize::<RawFireRow>()
        .map(|row| row.map(FireRecord::from))
        .collect::<Result<Vec<_>, csv::Error>>()?;

    log::info!("Derived {} fire records from {}", records.len(), path.display());
    Ok(records)
}

/// Reads the raw `fire_brigade.csv` export.
///
/// # Errors
///
/// Returns [`DatasetError`] if the file is missing or fails to parse.
pub fn load_raw_expenditures(path: &Path) -> Result<Vec<RawExpenditureRow>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new().from_path(path)?;
    reader
        .deserialize()
        .collect::<Result<Vec<RawExpenditureRow>, csv::Error>>()
        .map_err(DatasetError::from)
}

/// Writes the derived fire records to `main_data.csv`.
///
/// # Errors
///
/// Returns [`DatasetError`] if the file cannot be written.
pub fn write_fire_records(path: &Path, records: &[FireRecord]) -> Result<(), DatasetError> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    log::info!("Wrote {} fire records to {}", records.len(), path.display());
    Ok(())
}

/// Writes the joined expenditure table to `expenditure.csv`.
///
/// # Errors
///
/// Returns [`DatasetError`] if the file cannot be written.
pub fn write_expenditure_records(
    path: &Path,
    records: &[ExpenditureRecord],
) -> Result<(), DatasetError> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    log::info!(
        "Wrote {} expenditure rows to {}",
        records.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use wildfire_map_fire_models::MainCategory;

    use super::*;

    #[test]
    fn raw_fire_csv_parses_and_derives() {
        let csv_text = "\
code,region,county,year,total_ba,category,rekindling,negligent,intentional
PT001,Porto,Amarante,2010,100.0,use of fire,0,1,0
PT002,Faro,Loulé,2010,50.0,ARSON,0,0,1
PT003,Coimbra,Lousã,2011,7.25,nan,0,0,0
";
        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        let records: Vec<FireRecord> = reader
            .deserialize::<RawFireRow>()
            .map(|row| row.map(FireRecord::from))
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].main_category, MainCategory::Negligent);
        assert_eq!(records[0].category, "Use Of Fire");
        assert_eq!(records[1].main_category, MainCategory::Intentional);
        assert_eq!(records[1].category, "Arson");
        assert_eq!(records[2].main_category, MainCategory::Other);
    }

    #[test]
    fn raw_expenditure_accepts_spreadsheet_headers() {
        let csv_text = "\
Years,Fire Brigade expenditure
2010,1000.0
2011,1250.5
";
        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        let rows: Vec<RawExpenditureRow> = reader.deserialize().collect::<Result<_, _>>().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].year, 2010);
        assert!((rows[1].expenditure - 1250.5).abs() < f64::EPSILON);
    }
}
