use std::path::PathBuf;

use realty_transform::StepReport;

/// Outcome of a pipeline run, feeding the summary table.
pub struct RunResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub dry_run: bool,
    pub records: usize,
    pub columns_before: usize,
    pub columns_after: usize,
    pub steps: Vec<StepReport>,
    pub rows_missing_economic: usize,
}
