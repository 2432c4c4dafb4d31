//! The bundled templates must stay consistent with the extractor.

use chartmark_core::domain::{SignalId, SignalKind};
use chartmark_core::parse;
use chartmark_core::templates::{
    ANALYSIS_PROMPT, EXAMPLE_ANALYSIS, EXAMPLE_GROUP_COUNT, EXAMPLE_SIGNAL_COUNT,
};
use chartmark_core::ParseError;

fn count_lines_with_prefix(text: &str, prefixes: &[&str]) -> usize {
    text.lines()
        .map(str::trim)
        .filter(|l| prefixes.iter().any(|p| l.starts_with(p)))
        .count()
}

#[test]
fn example_parses_with_one_group_per_header() {
    let a = parse(EXAMPLE_ANALYSIS).unwrap();
    let headers = count_lines_with_prefix(EXAMPLE_ANALYSIS, &["GROUP:"]);
    assert_eq!(headers, EXAMPLE_GROUP_COUNT);
    assert_eq!(a.groups.len(), EXAMPLE_GROUP_COUNT);
    for group in &a.groups {
        assert!(!group.description.is_empty(), "{} has no description", group.name);
        assert!(!group.signals.is_empty(), "{} has no signals", group.name);
    }
}

#[test]
fn example_signal_total_matches_signal_lines() {
    let a = parse(EXAMPLE_ANALYSIS).unwrap();
    let lines = count_lines_with_prefix(
        EXAMPLE_ANALYSIS,
        &["BUY_SIGNAL:", "SELL_SIGNAL:", "RESISTANCE_LEVEL:", "SUPPORT_LEVEL:"],
    );
    assert_eq!(lines, EXAMPLE_SIGNAL_COUNT);
    assert_eq!(a.signals.len(), EXAMPLE_SIGNAL_COUNT);

    let grouped: usize = a.groups.iter().map(|g| g.signals.len()).sum();
    assert_eq!(grouped, EXAMPLE_SIGNAL_COUNT);
}

#[test]
fn example_first_and_last_signals() {
    let a = parse(EXAMPLE_ANALYSIS).unwrap();

    let first = &a.signals[0];
    assert_eq!(first.id, SignalId(1));
    assert_eq!(first.kind, SignalKind::Buy);
    assert_eq!(first.label, "Early Rally Buy");
    assert_eq!(first.group, "EARLY_RALLY_PHASE");

    let last = a.signals.last().unwrap();
    assert_eq!(last.id, SignalId(EXAMPLE_SIGNAL_COUNT as u64));
    assert_eq!(last.label, "Volume Recovery");
    assert_eq!((last.x, last.y), (58.0, 90.0));
    assert_eq!(last.group, "VOLUME_CONFIRMATION");
}

#[test]
fn example_keeps_non_ascii_text() {
    let a = parse(EXAMPLE_ANALYSIS).unwrap();
    assert_eq!(
        a.signals[1].description,
        "Explosive move 214→219, strong bullish engulfing"
    );
}

#[test]
fn example_group_order_follows_the_text() {
    let a = parse(EXAMPLE_ANALYSIS).unwrap();
    assert_eq!(
        a.groups.names(),
        vec![
            "EARLY_RALLY_PHASE",
            "CONSOLIDATION_PHASE",
            "FAILURE_PHASE",
            "RECOVERY_PHASE",
            "CURRENT_PHASE",
            "VOLUME_CONFIRMATION",
        ]
    );
}

#[test]
fn prompt_placeholders_do_not_parse() {
    assert_eq!(parse(ANALYSIS_PROMPT), Err(ParseError::NoSignalsFound));
}

#[test]
fn prompt_documents_every_keyword() {
    for keyword in [
        "CANDLESTICK_ANALYSIS:",
        "GROUP:",
        "PHASE_DESCRIPTION:",
        "BUY_SIGNAL:",
        "SELL_SIGNAL:",
        "RESISTANCE_LEVEL:",
        "SUPPORT_LEVEL:",
    ] {
        assert!(ANALYSIS_PROMPT.contains(keyword), "prompt is missing {keyword}");
    }
}
