//! Economic-statistics CSV loading.
//!
//! The statistics export is a small per-region table with the header
//! `region,avg_salary,population,grp`. Extra columns are ignored and
//! malformed numeric cells become nulls with a warning, so a partially
//! filled export still loads.

use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;

use realty_model::{EconomicRecord, EconomicTable};

const REGION: &str = "region";
const AVG_SALARY: &str = "avg_salary";
const POPULATION: &str = "population";
const GRP: &str = "grp";

pub fn read_economic_csv(path: &Path) -> Result<EconomicTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open economic statistics: {}", path.display()))?;

    let headers = reader.headers().context("read economic header")?.clone();
    let region_idx = match column_index(&headers, REGION) {
        Some(idx) => idx,
        None => bail!(
            "economic statistics missing required column '{REGION}': {}",
            path.display()
        ),
    };
    let salary_idx = column_index(&headers, AVG_SALARY);
    let population_idx = column_index(&headers, POPULATION);
    let grp_idx = column_index(&headers, GRP);

    let mut table = EconomicTable::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("read economic row {}", idx + 1))?;
        let region = record.get(region_idx).unwrap_or_default().trim();
        if region.is_empty() {
            tracing::warn!(row = idx + 1, "economic row has empty region, skipped");
            continue;
        }
        table.insert(EconomicRecord {
            region: region.to_string(),
            avg_salary: numeric_cell(&record, salary_idx, AVG_SALARY, idx),
            population: integer_cell(&record, population_idx, POPULATION, idx),
            grp: numeric_cell(&record, grp_idx, GRP, idx),
        });
    }

    tracing::info!(regions = table.len(), path = %path.display(), "loaded economic statistics");
    Ok(table)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
}

fn numeric_cell(
    record: &csv::StringRecord,
    idx: Option<usize>,
    column: &str,
    row: usize,
) -> Option<f64> {
    let raw = record.get(idx?)?.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(row = row + 1, column, value = raw, "malformed numeric cell");
            None
        }
    }
}

fn integer_cell(
    record: &csv::StringRecord,
    idx: Option<usize>,
    column: &str,
    row: usize,
) -> Option<i64> {
    let raw = record.get(idx?)?.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(row = row + 1, column, value = raw, "malformed integer cell");
            None
        }
    }
}
