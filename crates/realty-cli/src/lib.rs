//! CLI library components for the realty feature pipeline.

pub mod logging;
