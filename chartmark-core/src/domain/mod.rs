//! Domain types for ChartMark

pub mod analysis;
pub mod group;
pub mod signal;

pub use analysis::{Analysis, SourceHash};
pub use group::{Group, GroupTable};
pub use signal::{
    percent_from_pixels, Signal, SignalId, SignalKind, DEFAULT_DATE, DEFAULT_DESCRIPTION,
    MANUAL_DATE, MANUAL_DESCRIPTION, MANUAL_GROUP,
};
