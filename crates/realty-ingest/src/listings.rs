//! Listings CSV loading into polars frames.

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

/// Read a listings CSV into a [`DataFrame`].
///
/// The first row is treated as the header and column dtypes are inferred
/// by polars. Mixed columns such as `floor` typically infer as strings;
/// the transform stage handles both string and numeric cells.
pub fn read_listings_csv(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("Failed to create CSV reader: {}", path.display()))?
        .finish()
        .with_context(|| format!("Failed to read CSV: {}", path.display()))?;

    tracing::info!(
        rows = df.height(),
        columns = df.width(),
        path = %path.display(),
        "loaded listings"
    );
    Ok(df)
}
