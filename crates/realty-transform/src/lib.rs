//! Feature-engineering transforms for real-estate listing data.
//!
//! - **normalization**: floor parsing (the interesting part) and
//!   region/city name canonicalization
//! - **steps**: the pipeline steps, one module per feature family
//! - **pipeline**: the ordered `FeatureStep` executor
//! - **data_utils**: DataFrame value extraction helpers

pub mod context;
pub mod data_utils;
pub mod normalization;
pub mod pipeline;
pub mod steps;

pub use context::FeatureContext;
pub use normalization::{city_lookup, parse_floor, parse_floor_cat, region_lookup};
pub use pipeline::{FeaturePipeline, FeatureStep, PipelineState, StepReport, build_default_pipeline};
