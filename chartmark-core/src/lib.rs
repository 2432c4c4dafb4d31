//! ChartMark Core — annotation data model, analysis text extractor, annotation board.
//!
//! This crate contains:
//! - Domain types (signals, groups, the parsed analysis)
//! - The line-oriented extractor for LLM chart analyses
//! - The annotation board holding parsed and hand-placed markers
//! - Bundled prompt and example templates
//! - TOML configuration

pub mod board;
pub mod config;
pub mod domain;
pub mod parser;
pub mod templates;

pub use board::AnnotationBoard;
pub use config::{Config, ConfigError, ImageSize, OutputFormat};
pub use domain::{Analysis, Group, GroupTable, Signal, SignalId, SignalKind, SourceHash};
pub use parser::{extract, parse, ParseError};
