//! Analysis text extractor.
//!
//! Reads the line-oriented format an LLM chart analysis is asked to produce:
//!
//! ```text
//! CANDLESTICK_ANALYSIS:
//! GROUP: EARLY_RALLY_PHASE
//! PHASE_DESCRIPTION: Initial uptrend
//! BUY_SIGNAL: x=8, y=35, label="Early Rally Buy", description="...", date="..."
//! ```
//!
//! One forward pass, no backtracking. Lines that are not understood are
//! skipped; only an input that yields no signals at all is an error.

pub mod directive;
pub mod fields;

pub use directive::Directive;
pub use fields::SignalFields;

use thiserror::Error;
use tracing::{debug, trace};

use crate::domain::{
    Analysis, GroupTable, Signal, SignalId, SignalKind, SourceHash, DEFAULT_DATE,
    DEFAULT_DESCRIPTION,
};

/// Errors surfaced to the user when analysis text cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("No valid signals found in analysis text")]
    NoSignalsFound,
}

/// Parse analysis text, failing if it yields no signals.
pub fn parse(text: &str) -> Result<Analysis, ParseError> {
    let analysis = extract(text);
    if analysis.is_empty() {
        return Err(ParseError::NoSignalsFound);
    }
    Ok(analysis)
}

/// Extract whatever the text holds. The result may contain no signals.
pub fn extract(text: &str) -> Analysis {
    let mut state = ExtractState::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim_matches(is_blank);
        if line.is_empty() {
            continue;
        }
        state.apply(idx + 1, line);
    }

    debug!(
        signals = state.signals.len(),
        groups = state.groups.len(),
        skipped = state.skipped,
        "extracted analysis"
    );

    Analysis {
        source_hash: SourceHash::of(text),
        signals: state.signals,
        groups: state.groups,
    }
}

/// Whitespace, plus the byte-order mark some editors put at the start of a file.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Accumulator for a single pass. Fresh per call.
struct ExtractState {
    current_group: String,
    next_id: SignalId,
    groups: GroupTable,
    signals: Vec<Signal>,
    skipped: usize,
}

impl Default for ExtractState {
    fn default() -> Self {
        Self {
            current_group: String::new(),
            next_id: SignalId::first(),
            groups: GroupTable::new(),
            signals: Vec::new(),
            skipped: 0,
        }
    }
}

impl ExtractState {
    fn apply(&mut self, line_no: usize, line: &str) {
        match Directive::classify(line) {
            Some(Directive::Header) => {}
            Some(Directive::Group(name)) => self.open_group(line_no, name),
            Some(Directive::PhaseDescription(text)) => self.describe_group(line_no, text),
            Some(Directive::Signal { kind, body }) => self.push_signal(line_no, kind, body),
            None => {
                trace!(line = line_no, "skipping unrecognised line");
                self.skipped += 1;
            }
        }
    }

    fn open_group(&mut self, line_no: usize, name: &str) {
        if self.groups.declare(name) {
            debug!(line = line_no, group = name, "group re-declared, previous members dropped");
        }
        self.current_group = name.to_string();
    }

    fn describe_group(&mut self, line_no: usize, text: &str) {
        if self.current_group.is_empty() {
            trace!(line = line_no, "phase description outside any group");
            self.skipped += 1;
            return;
        }
        if let Some(group) = self.groups.get_mut(&self.current_group) {
            group.description = text.to_string();
        }
    }

    fn push_signal(&mut self, line_no: usize, kind: SignalKind, body: &str) {
        let fields = SignalFields::extract(body);
        let Some((x, y)) = fields.position() else {
            debug!(line = line_no, kind = %kind, "signal line without x/y, discarded");
            self.skipped += 1;
            return;
        };

        let id = self.next_id;
        self.next_id = id.next();

        let signal = Signal {
            id,
            kind,
            x,
            y,
            label: fields
                .label
                .map(str::to_string)
                .unwrap_or_else(|| kind.default_label()),
            description: fields.description.unwrap_or(DEFAULT_DESCRIPTION).to_string(),
            date: fields.date.unwrap_or(DEFAULT_DATE).to_string(),
            group: self.current_group.clone(),
        };

        if !self.current_group.is_empty() {
            if let Some(group) = self.groups.get_mut(&self.current_group) {
                group.signals.push(id);
            }
        }
        self.signals.push(signal);
    }
}
