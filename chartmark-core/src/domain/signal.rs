//! Signal — one chart annotation placed at a percentage position on an image.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Description used when an analysis line carries no `description="..."` field.
pub const DEFAULT_DESCRIPTION: &str = "LLM Analysis";

/// Date used when an analysis line carries no `date="..."` field.
pub const DEFAULT_DATE: &str = "Auto-detected";

/// Group name assigned to markers placed by hand.
pub const MANUAL_GROUP: &str = "MANUAL";

/// Description assigned to markers placed by hand.
pub const MANUAL_DESCRIPTION: &str = "User added marker";

/// Date assigned to markers placed by hand.
pub const MANUAL_DATE: &str = "Manual";

/// Sequence number of a signal. Parsed signals start at 1 in order of appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalId(pub u64);

impl SignalId {
    pub fn first() -> Self {
        Self(1)
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for SignalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Annotation kind. Closed set; anything else in the input is ignored upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Buy,
    Sell,
    Resistance,
    Support,
}

impl SignalKind {
    pub const ALL: [SignalKind; 4] = [
        SignalKind::Buy,
        SignalKind::Sell,
        SignalKind::Resistance,
        SignalKind::Support,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SignalKind::Buy => "buy",
            SignalKind::Sell => "sell",
            SignalKind::Resistance => "resistance",
            SignalKind::Support => "support",
        }
    }

    /// Label used when none is given, e.g. `"BUY Signal"`.
    pub fn default_label(self) -> String {
        format!("{} Signal", self.as_str().to_uppercase())
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One annotation.
///
/// `x` and `y` are percentages of the image width and height measured from the
/// top-left corner. They are not clamped: values outside `[0, 100]` are passed
/// through and left for the renderer to deal with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub id: SignalId,
    pub kind: SignalKind,
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub description: String,
    pub date: String,
    /// Name of the group open when the signal was read; empty if none.
    pub group: String,
}

impl Signal {
    /// Signal placed by hand rather than read from analysis text.
    pub fn manual(id: SignalId, kind: SignalKind, x: f64, y: f64) -> Self {
        Self {
            id,
            kind,
            x,
            y,
            label: kind.default_label(),
            description: MANUAL_DESCRIPTION.to_string(),
            date: MANUAL_DATE.to_string(),
            group: MANUAL_GROUP.to_string(),
        }
    }

    pub fn is_grouped(&self) -> bool {
        !self.group.is_empty()
    }

    pub fn is_manual(&self) -> bool {
        self.group == MANUAL_GROUP
    }

    /// Pixel position of this signal on an image of the given size.
    pub fn pixel_position(&self, width: f64, height: f64) -> (f64, f64) {
        (self.x / 100.0 * width, self.y / 100.0 * height)
    }
}

/// Convert a pixel position on an image of the given size into percentages.
///
/// Returns `None` for a degenerate (zero or negative) image size.
pub fn percent_from_pixels(px: f64, py: f64, width: f64, height: f64) -> Option<(f64, f64)> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some((px / width * 100.0, py / height * 100.0))
}
