//! ChartMark Report — exports and artifact bundles for parsed chart annotations.
//!
//! This crate builds on `chartmark-core` to provide:
//! - A versioned, serializable report around one analysis
//! - JSON, CSV, Markdown, and plain-text renderings
//! - Artifact directories (`analysis.json`, `signals.csv`, `report.md`)

pub mod export;
pub mod report;

pub use export::{
    export_json, export_signals_csv, generate_markdown, import_json, load_artifacts,
    render_summary, save_artifacts,
};
pub use report::{AnalysisReport, KindCounts, SCHEMA_VERSION};
