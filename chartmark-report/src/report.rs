//! Serializable report wrapping one parsed analysis.

use serde::{Deserialize, Serialize};

use chartmark_core::domain::{Analysis, GroupTable, Signal, SignalKind, SourceHash};

/// Current schema version of persisted reports. Newer versions are rejected on load.
pub const SCHEMA_VERSION: u32 = 1;

/// Per-kind signal counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCounts {
    pub buy: usize,
    pub sell: usize,
    pub resistance: usize,
    pub support: usize,
}

impl KindCounts {
    pub fn of(signals: &[Signal]) -> Self {
        signals.iter().fold(Self::default(), |mut c, s| {
            match s.kind {
                SignalKind::Buy => c.buy += 1,
                SignalKind::Sell => c.sell += 1,
                SignalKind::Resistance => c.resistance += 1,
                SignalKind::Support => c.support += 1,
            }
            c
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub schema_version: u32,
    /// Where the analysis text came from (usually a file path).
    pub source: String,
    pub source_hash: SourceHash,
    pub counts: KindCounts,
    pub signals: Vec<Signal>,
    pub groups: GroupTable,
}

impl AnalysisReport {
    pub fn new(source: impl Into<String>, analysis: Analysis) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            source: source.into(),
            counts: KindCounts::of(&analysis.signals),
            source_hash: analysis.source_hash,
            signals: analysis.signals,
            groups: analysis.groups,
        }
    }

    pub fn into_analysis(self) -> Analysis {
        Analysis {
            source_hash: self.source_hash,
            signals: self.signals,
            groups: self.groups,
        }
    }

    pub fn signal_count(&self) -> usize {
        self.signals.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}
