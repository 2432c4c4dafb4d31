//! Keyword classification of trimmed analysis lines.

use crate::domain::SignalKind;

pub const HEADER_PREFIX: &str = "CANDLESTICK_ANALYSIS:";
pub const GROUP_PREFIX: &str = "GROUP:";
pub const PHASE_DESCRIPTION_PREFIX: &str = "PHASE_DESCRIPTION:";

/// Signal keyword prefixes and the kind each one yields.
pub const SIGNAL_PREFIXES: [(&str, SignalKind); 4] = [
    ("BUY_SIGNAL:", SignalKind::Buy),
    ("SELL_SIGNAL:", SignalKind::Sell),
    ("RESISTANCE_LEVEL:", SignalKind::Resistance),
    ("SUPPORT_LEVEL:", SignalKind::Support),
];

/// A recognised line. Keywords are case-sensitive and must start the line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Directive<'a> {
    /// `CANDLESTICK_ANALYSIS:` marker. Carries no data.
    Header,
    /// `GROUP: <name>`, name trimmed.
    Group(&'a str),
    /// `PHASE_DESCRIPTION: <text>`, text trimmed.
    PhaseDescription(&'a str),
    /// A signal keyword followed by its field list.
    Signal { kind: SignalKind, body: &'a str },
}

impl<'a> Directive<'a> {
    /// Classify an already-trimmed line. Returns `None` for anything unrecognised.
    pub fn classify(line: &'a str) -> Option<Self> {
        if line.starts_with(HEADER_PREFIX) {
            return Some(Directive::Header);
        }
        if let Some(rest) = line.strip_prefix(GROUP_PREFIX) {
            return Some(Directive::Group(rest.trim()));
        }
        if let Some(rest) = line.strip_prefix(PHASE_DESCRIPTION_PREFIX) {
            return Some(Directive::PhaseDescription(rest.trim()));
        }
        SIGNAL_PREFIXES.iter().find_map(|(prefix, kind)| {
            line.strip_prefix(prefix).map(|rest| Directive::Signal {
                kind: *kind,
                body: rest.trim(),
            })
        })
    }
}
