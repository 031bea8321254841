use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::info_span;

use realty_ingest::{read_economic_csv, read_listings_csv};
use realty_model::FeatureOptions;
use realty_transform::{FeatureContext, build_default_pipeline, city_lookup, region_lookup};

use crate::cli::RunArgs;
use crate::summary::apply_table_style;
use crate::types::RunResult;

pub fn run_steps() -> Result<()> {
    let pipeline = build_default_pipeline();
    let mut table = Table::new();
    table.set_header(vec!["#", "Step"]);
    apply_table_style(&mut table);
    for (idx, name) in pipeline.step_names().iter().enumerate() {
        table.add_row(vec![(idx + 1).to_string(), (*name).to_string()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_features(args: &RunArgs) -> Result<RunResult> {
    let span = info_span!("run", input = %args.input.display());
    let _guard = span.enter();

    let mut df = read_listings_csv(&args.input)?;
    let columns_before = df.width();

    let options = FeatureOptions::default()
        .with_metro_distance_km(args.metro_distance_km)
        .with_poi_min_count(args.poi_min_count)
        .with_join_economic(!args.no_econ_join);
    let regions = region_lookup();
    let cities = city_lookup();

    let economic = match &args.econ_stats {
        Some(path) => Some(read_economic_csv(path)?),
        None => None,
    };
    let mut ctx = FeatureContext::new(&options, &regions, &cities);
    if let Some(table) = economic.as_ref() {
        ctx = ctx.with_economic(table);
    }

    let state = build_default_pipeline()
        .execute(&mut df, &ctx)
        .context("feature pipeline")?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    if !args.dry_run {
        write_features_csv(&mut df, &output)?;
    }

    Ok(RunResult {
        input: args.input.clone(),
        output,
        dry_run: args.dry_run,
        records: df.height(),
        columns_before,
        columns_after: df.width(),
        steps: state.reports,
        rows_missing_economic: state.rows_missing_economic,
    })
}

fn default_output_path(input: &Path) -> PathBuf {
    input.with_file_name("features.csv")
}

fn write_features_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("Failed to write features CSV: {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = df.height(), "wrote features");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_next_to_the_input() {
        let output = default_output_path(Path::new("data/train.csv"));
        assert_eq!(output, PathBuf::from("data/features.csv"));
    }
}
