use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::Result;

/// Read a header-ed CSV file into typed rows.
///
/// A missing file is not fatal: it yields an empty table and pushes exactly
/// one user-visible warning naming the path. A file that exists but fails to
/// parse into the expected row shape also yields an empty table, with a
/// load-error message; sections backed by it fall through to the "no data"
/// notice while the rest of the session keeps working.
pub fn load_rows<T: DeserializeOwned>(path: &Path, warnings: &mut Vec<String>) -> Vec<T> {
    if !path.exists() {
        let message = format!("File not found: {}", path.display());
        log::warn!("{message}");
        warnings.push(message);
        return Vec::new();
    }

    match read_csv(path) {
        Ok(rows) => {
            log::info!("loaded {} rows from {}", rows.len(), path.display());
            rows
        }
        Err(err) => {
            let message = format!("Failed to load {}: {err}", path.display());
            log::error!("{message}");
            warnings.push(message);
            Vec::new()
        }
    }
}

fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::rows::AggregatedTransactionRow;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("txn_insights_{}_{}", std::process::id(), name))
    }

    #[test]
    fn missing_file_yields_empty_table_and_one_warning() {
        let path = scratch_file("does_not_exist.csv");
        let mut warnings = Vec::new();

        let rows: Vec<AggregatedTransactionRow> = load_rows(&path, &mut warnings);

        assert!(rows.is_empty());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains(path.to_str().unwrap()));
    }

    #[test]
    fn well_formed_file_yields_every_data_row() {
        let path = scratch_file("agg_txn_ok.csv");
        fs::write(
            &path,
            "year,quarter,transaction_type,transaction_amount\n\
             2023,1,Peer-to-peer payments,1250.5\n\
             2023,2,Merchant payments,980.0\n",
        )
        .unwrap();

        let mut warnings = Vec::new();
        let rows: Vec<AggregatedTransactionRow> = load_rows(&path, &mut warnings);
        fs::remove_file(&path).unwrap();

        assert!(warnings.is_empty());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].transaction_type, "Peer-to-peer payments");
        assert_eq!(rows[1].year, 2023);
        assert_eq!(rows[1].quarter, 2);
    }

    #[test]
    fn malformed_file_is_isolated_to_its_dataset() {
        let path = scratch_file("agg_txn_bad.csv");
        fs::write(
            &path,
            "year,quarter,transaction_type,transaction_amount\n\
             not-a-year,1,Recharge,10.0\n",
        )
        .unwrap();

        let mut warnings = Vec::new();
        let rows: Vec<AggregatedTransactionRow> = load_rows(&path, &mut warnings);
        fs::remove_file(&path).unwrap();

        assert!(rows.is_empty());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Failed to load"));
    }
}
