//! Artifact bundles written to disk and read back.

use chartmark_core::templates::EXAMPLE_ANALYSIS;
use chartmark_core::{parse, ImageSize};
use chartmark_report::{load_artifacts, save_artifacts, AnalysisReport};

fn example_report() -> AnalysisReport {
    AnalysisReport::new("charts/example.txt", parse(EXAMPLE_ANALYSIS).unwrap())
}

#[test]
fn save_then_load_roundtrip() {
    let tmp = tempfile::tempdir().unwrap();
    let report = example_report();

    let dir = save_artifacts(&report, tmp.path(), None).unwrap();
    assert!(dir.starts_with(tmp.path()));
    let name = dir.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("example_"), "unexpected dir name {name}");

    for file in ["analysis.json", "signals.csv", "report.md"] {
        assert!(dir.join(file).is_file(), "{file} missing");
    }

    let loaded = load_artifacts(&dir).unwrap();
    assert_eq!(loaded, report);
}

#[test]
fn saved_csv_has_every_signal() {
    let tmp = tempfile::tempdir().unwrap();
    let report = example_report();
    let dir = save_artifacts(&report, tmp.path(), None).unwrap();

    let csv = std::fs::read_to_string(dir.join("signals.csv")).unwrap();
    assert_eq!(csv.lines().count(), report.signal_count() + 1);
}

#[test]
fn saved_markdown_uses_image_size() {
    let tmp = tempfile::tempdir().unwrap();
    let image = ImageSize::new(800, 600).unwrap();
    let dir = save_artifacts(&example_report(), tmp.path(), Some(image)).unwrap();

    let md = std::fs::read_to_string(dir.join("report.md")).unwrap();
    assert!(md.contains("| Image | 800x600 px |"));
    assert!(md.contains("Pixels"));
}

#[test]
fn load_from_missing_dir_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let err = load_artifacts(&tmp.path().join("absent")).unwrap_err();
    assert!(err.to_string().contains("analysis.json"));
}
