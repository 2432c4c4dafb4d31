//! Annotation board lifecycle: load, replace, fail, annotate by hand, remove.

use std::collections::HashSet;

use chartmark_core::domain::{SignalId, SignalKind, MANUAL_GROUP};
use chartmark_core::templates::{EXAMPLE_ANALYSIS, EXAMPLE_SIGNAL_COUNT};
use chartmark_core::{AnnotationBoard, ParseError};

const SMALL: &str = "GROUP: ONLY\nPHASE_DESCRIPTION: tiny\nBUY_SIGNAL: x=5, y=5\nSELL_SIGNAL: x=6, y=6";

#[test]
fn load_replaces_previous_model() {
    let mut board = AnnotationBoard::new();
    board.load_analysis(EXAMPLE_ANALYSIS).unwrap();
    assert_eq!(board.overlays().len(), EXAMPLE_SIGNAL_COUNT);

    board.load_analysis(SMALL).unwrap();
    assert_eq!(board.overlays().len(), 2);
    assert_eq!(board.groups().names(), vec!["ONLY"]);
}

#[test]
fn failed_load_leaves_board_untouched() {
    let mut board = AnnotationBoard::new();
    board.load_analysis(SMALL).unwrap();
    board.add_manual(SignalKind::Buy, 1.0, 1.0);
    let before_overlays = board.overlays().to_vec();
    let before_groups = board.groups().clone();
    let before_hash = board.source_hash().cloned();

    let err = board.load_analysis("no directives at all").unwrap_err();
    assert_eq!(err, ParseError::NoSignalsFound);
    assert_eq!(board.overlays(), before_overlays.as_slice());
    assert_eq!(board.groups(), &before_groups);
    assert_eq!(board.source_hash().cloned(), before_hash);
}

#[test]
fn manual_markers_use_manual_shape() {
    let mut board = AnnotationBoard::new();
    let s = board.add_manual(SignalKind::Resistance, 33.3, 66.6).clone();
    assert_eq!(s.group, MANUAL_GROUP);
    assert_eq!(s.label, "RESISTANCE Signal");
    assert_eq!(s.description, "User added marker");
    assert_eq!(s.date, "Manual");
    assert_eq!(s.id, SignalId(1));
}

#[test]
fn manual_ids_never_collide_across_reloads() {
    let mut board = AnnotationBoard::new();
    board.load_analysis(EXAMPLE_ANALYSIS).unwrap();
    let m1 = board.add_manual(SignalKind::Buy, 1.0, 1.0).id;
    assert_eq!(m1, SignalId(EXAMPLE_SIGNAL_COUNT as u64 + 1));

    board.load_analysis(SMALL).unwrap();
    let m2 = board.add_manual(SignalKind::Sell, 2.0, 2.0).id;
    assert!(m2 > m1);

    let ids: HashSet<SignalId> = board.overlays().iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), board.overlays().len());
}

#[test]
fn remove_detaches_from_group() {
    let mut board = AnnotationBoard::new();
    board.load_analysis(SMALL).unwrap();

    let removed = board.remove(SignalId(1)).unwrap();
    assert_eq!(removed.kind, SignalKind::Buy);
    assert_eq!(board.overlays().len(), 1);
    assert_eq!(board.groups().get("ONLY").unwrap().signals, vec![SignalId(2)]);
    assert_eq!(board.group_signals("ONLY").len(), 1);
    assert!(board.remove(SignalId(1)).is_none());
}

#[test]
fn clear_drops_everything() {
    let mut board = AnnotationBoard::new();
    board.load_analysis(SMALL).unwrap();
    board.add_manual(SignalKind::Support, 9.0, 9.0);

    board.clear();
    assert!(board.is_empty());
    assert!(board.groups().is_empty());
    assert!(board.source_hash().is_none());

    // Ids keep growing after a clear.
    assert_eq!(board.add_manual(SignalKind::Buy, 1.0, 1.0).id, SignalId(4));
}
