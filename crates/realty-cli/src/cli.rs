//! CLI argument definitions for the realty feature pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "realty-features",
    version,
    about = "Realty feature pipeline - engineer model features from listings data",
    long_about = "Engineer model-training features from real-estate listings CSV data.\n\n\
                  Normalizes the floor attribute, fills categorical gaps, canonicalizes\n\
                  region/city names, derives POI indicator flags, and joins per-region\n\
                  economic statistics."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the feature pipeline over a listings CSV.
    Run(RunArgs),

    /// List the pipeline steps in execution order.
    Steps,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the listings CSV file.
    #[arg(value_name = "LISTINGS_CSV")]
    pub input: PathBuf,

    /// Output CSV path (default: features.csv next to the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Per-region economic statistics CSV to join.
    #[arg(long = "econ-stats", value_name = "PATH")]
    pub econ_stats: Option<PathBuf>,

    /// Skip the economic-statistics join even when a table is supplied.
    #[arg(long = "no-econ-join")]
    pub no_econ_join: bool,

    /// Maximum distance to the nearest metro station, in kilometres,
    /// for the metro_nearby flag.
    #[arg(long = "metro-distance-km", default_value_t = 1.0)]
    pub metro_distance_km: f64,

    /// Minimum POI count for an indicator flag to fire.
    #[arg(long = "poi-min-count", default_value_t = 1)]
    pub poi_min_count: i64,

    /// Run the pipeline and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_defaults() {
        let cli = Cli::try_parse_from(["realty-features", "run", "listings.csv"]).unwrap();
        let Command::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(args.metro_distance_km, 1.0);
        assert_eq!(args.poi_min_count, 1);
        assert!(!args.dry_run);
        assert!(args.econ_stats.is_none());
    }
}
