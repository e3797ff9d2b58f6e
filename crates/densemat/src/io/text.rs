//! Delimited text reader.
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::LoadTxtConfig;
use crate::mat::Matrix;

/// Read a comma-separated file, dropping its header row, into a table of fields.
pub fn load_txt<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    load_txt_with_config(path, &LoadTxtConfig::default())
}

/// Read a delimited file into a table of fields.
///
/// Fields are kept as text; rows may have different lengths. Conversion to
/// numbers is left to the caller (see [`read_matrix`]).
pub fn load_txt_with_config<P: AsRef<Path>>(
    path: P,
    config: &LoadTxtConfig,
) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(config.skip_header)
        .comment(config.comment)
        .flexible(true)
        .from_path(&path)
        .with_context(|| format!("Failed to open text file: {}", path.as_ref().display()))?;

    let mut table = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        table.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    log::debug!(
        "Loaded {} rows from {}",
        table.len(),
        path.as_ref().display()
    );

    Ok(table)
}

/// Read a delimited file of numbers straight into a [`Matrix`].
pub fn read_matrix<P: AsRef<Path>>(path: P, config: &LoadTxtConfig) -> Result<Matrix> {
    let table = load_txt_with_config(&path, config)?;
    Matrix::parse_table(&table)
        .with_context(|| format!("Invalid numeric data in {}", path.as_ref().display()))
}
