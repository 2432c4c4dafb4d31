//! The full result of reading one analysis text.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::group::GroupTable;
use super::signal::{Signal, SignalId};

/// Content hash of the analysis text that produced a model.
///
/// BLAKE3 for a stable digest across builds and platforms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceHash(pub String);

impl SourceHash {
    pub fn of(text: &str) -> Self {
        Self(blake3::hash(text.as_bytes()).to_hex().to_string())
    }

    /// First 12 hex characters, for display.
    pub fn short(&self) -> &str {
        &self.0[..self.0.len().min(12)]
    }
}

impl fmt::Display for SourceHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered signals plus the groups they were read under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub source_hash: SourceHash,
    pub signals: Vec<Signal>,
    pub groups: GroupTable,
}

impl Analysis {
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn signal(&self, id: SignalId) -> Option<&Signal> {
        self.signals.iter().find(|s| s.id == id)
    }

    /// Members of a group, resolved against the flat signal list.
    pub fn group_signals(&self, name: &str) -> Vec<&Signal> {
        resolve_members(&self.signals, &self.groups, name)
    }

    /// Signals read before any `GROUP:` header.
    pub fn ungrouped(&self) -> impl Iterator<Item = &Signal> {
        self.signals.iter().filter(|s| !s.is_grouped())
    }
}

pub(crate) fn resolve_members<'a>(
    signals: &'a [Signal],
    groups: &GroupTable,
    name: &str,
) -> Vec<&'a Signal> {
    let Some(group) = groups.get(name) else {
        return Vec::new();
    };
    group
        .signals
        .iter()
        .filter_map(|id| signals.iter().find(|s| s.id == *id))
        .collect()
}
