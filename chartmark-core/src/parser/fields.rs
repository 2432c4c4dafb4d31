//! Field extraction for signal lines.
//!
//! Each field is an independent leftmost pattern search over the line body,
//! so field order does not matter and the first match of a key wins.

use regex::Regex;
use std::sync::OnceLock;

/// Fields found on one signal line. Every field is optional here; the caller
/// decides which ones are required.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SignalFields<'a> {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub label: Option<&'a str>,
    pub description: Option<&'a str>,
    pub date: Option<&'a str>,
}

impl<'a> SignalFields<'a> {
    pub fn extract(body: &'a str) -> Self {
        let p = patterns();
        Self {
            x: number(&p.x, body),
            y: number(&p.y, body),
            label: quoted(&p.label, body),
            description: quoted(&p.description, body),
            date: quoted(&p.date, body),
        }
    }

    /// Both coordinates, if present.
    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.x?, self.y?))
    }
}

struct Patterns {
    x: Regex,
    y: Regex,
    label: Regex,
    description: Regex,
    date: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        x: number_pattern("x"),
        y: number_pattern("y"),
        label: quoted_pattern("label"),
        description: quoted_pattern("description"),
        date: quoted_pattern("date"),
    })
}

// Unsigned integer or decimal. ASCII digits only.
fn number_pattern(key: &str) -> Regex {
    Regex::new(&format!(r"{key}=([0-9]+(?:\.[0-9]+)?)")).expect("static number pattern")
}

// Non-empty, no embedded double quote.
fn quoted_pattern(key: &str) -> Regex {
    Regex::new(&format!(r#"{key}="([^"]+)""#)).expect("static quoted pattern")
}

fn number(re: &Regex, body: &str) -> Option<f64> {
    re.captures(body)?.get(1)?.as_str().parse().ok()
}

fn quoted<'a>(re: &Regex, body: &'a str) -> Option<&'a str> {
    Some(re.captures(body)?.get(1)?.as_str())
}
