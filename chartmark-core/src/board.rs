//! Annotation board — the overlays currently shown on a chart image.
//!
//! Holds the signals from the last successful parse plus any markers placed by
//! hand. Loading new analysis text replaces the parsed model wholesale; a
//! failed load leaves the board exactly as it was.

use tracing::{debug, info};

use crate::domain::analysis::resolve_members;
use crate::domain::{
    percent_from_pixels, Analysis, GroupTable, Signal, SignalId, SignalKind, SourceHash,
};
use crate::parser::{self, ParseError};

#[derive(Debug, Clone, Default)]
pub struct AnnotationBoard {
    overlays: Vec<Signal>,
    groups: GroupTable,
    source_hash: Option<SourceHash>,
    /// Highest id ever placed on this board; manual ids grow from here.
    high_water: u64,
}

impl AnnotationBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `text` and, on success, replace the board's contents with it.
    pub fn load_analysis(&mut self, text: &str) -> Result<&[Signal], ParseError> {
        let Analysis {
            source_hash,
            signals,
            groups,
        } = parser::parse(text)?;

        info!(
            signals = signals.len(),
            groups = groups.len(),
            source = source_hash.short(),
            "analysis loaded"
        );

        self.high_water = self
            .high_water
            .max(signals.iter().map(|s| s.id.0).max().unwrap_or(0));
        self.overlays = signals;
        self.groups = groups;
        self.source_hash = Some(source_hash);
        Ok(&self.overlays)
    }

    /// Place a marker by hand at a percentage position.
    pub fn add_manual(&mut self, kind: SignalKind, x: f64, y: f64) -> &Signal {
        self.high_water += 1;
        let signal = Signal::manual(SignalId(self.high_water), kind, x, y);
        debug!(id = %signal.id, kind = %kind, x, y, "manual marker added");
        self.overlays.push(signal);
        &self.overlays[self.overlays.len() - 1]
    }

    /// Place a marker at a pixel position on an image of the given size.
    ///
    /// Returns `None` if the image size is degenerate.
    pub fn add_manual_at_pixel(
        &mut self,
        kind: SignalKind,
        px: f64,
        py: f64,
        width: f64,
        height: f64,
    ) -> Option<&Signal> {
        let (x, y) = percent_from_pixels(px, py, width, height)?;
        Some(self.add_manual(kind, x, y))
    }

    /// Remove an overlay by id, detaching it from its group.
    pub fn remove(&mut self, id: SignalId) -> Option<Signal> {
        let idx = self.overlays.iter().position(|s| s.id == id)?;
        self.groups.detach(id);
        Some(self.overlays.remove(idx))
    }

    /// Drop everything. Ids keep growing so stale references never alias.
    pub fn clear(&mut self) {
        self.overlays.clear();
        self.groups = GroupTable::new();
        self.source_hash = None;
    }

    pub fn overlays(&self) -> &[Signal] {
        &self.overlays
    }

    pub fn groups(&self) -> &GroupTable {
        &self.groups
    }

    pub fn group_signals(&self, name: &str) -> Vec<&Signal> {
        resolve_members(&self.overlays, &self.groups, name)
    }

    pub fn manual_overlays(&self) -> impl Iterator<Item = &Signal> {
        self.overlays.iter().filter(|s| s.is_manual())
    }

    pub fn source_hash(&self) -> Option<&SourceHash> {
        self.source_hash.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }
}
