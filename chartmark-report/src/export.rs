//! Reporting and export — JSON, CSV, Markdown, and plain-text summaries.
//!
//! Provides the output formats for a parsed analysis:
//! - **JSON**: full round-trip serialization with schema versioning
//! - **CSV**: flat signal table for spreadsheets
//! - **Markdown**: grouped report with one table per phase
//! - **Summary**: compact terminal listing
//!
//! Persisted JSON carries a `schema_version` field. Newer versions are
//! rejected on load.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::info;

use chartmark_core::domain::Signal;
use chartmark_core::ImageSize;

use crate::report::{AnalysisReport, SCHEMA_VERSION};

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize an `AnalysisReport` to pretty JSON.
pub fn export_json(report: &AnalysisReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize AnalysisReport to JSON")
}

/// Deserialize an `AnalysisReport` from JSON, rejecting unknown schema versions.
pub fn import_json(json: &str) -> Result<AnalysisReport> {
    let report: AnalysisReport =
        serde_json::from_str(json).context("failed to deserialize AnalysisReport from JSON")?;
    if report.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            report.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(report)
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Export signals as CSV.
///
/// Columns: id, kind, x, y, label, description, date, group
pub fn export_signals_csv(signals: &[Signal]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record([
        "id",
        "kind",
        "x",
        "y",
        "label",
        "description",
        "date",
        "group",
    ])?;

    for s in signals {
        let (id, x, y) = (s.id.to_string(), s.x.to_string(), s.y.to_string());
        wtr.write_record([
            id.as_str(),
            s.kind.as_str(),
            x.as_str(),
            y.as_str(),
            s.label.as_str(),
            s.description.as_str(),
            s.date.as_str(),
            s.group.as_str(),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

// ─── Markdown report ────────────────────────────────────────────────

/// Generate a Markdown report: metadata, then one section per group in
/// declaration order, then any signals read outside a group.
///
/// With an image size, each table gains a pixel-position column.
pub fn generate_markdown(report: &AnalysisReport, image: Option<ImageSize>) -> String {
    let mut md = String::with_capacity(2048);

    md.push_str("# Chart Annotation Report\n\n");

    md.push_str("## Metadata\n\n");
    md.push_str("| Field | Value |\n");
    md.push_str("| --- | --- |\n");
    md.push_str(&format!("| Source | {} |\n", escape_cell(&report.source)));
    md.push_str(&format!("| Source Hash | {} |\n", report.source_hash.short()));
    md.push_str(&format!("| Signals | {} |\n", report.signal_count()));
    md.push_str(&format!("| Groups | {} |\n", report.group_count()));
    let c = &report.counts;
    md.push_str(&format!(
        "| Kinds | {} buy / {} sell / {} resistance / {} support |\n",
        c.buy, c.sell, c.resistance, c.support
    ));
    if let Some(img) = image {
        md.push_str(&format!("| Image | {}x{} px |\n", img.width, img.height));
    }
    md.push('\n');

    for group in &report.groups {
        md.push_str(&format!("## {}\n\n", group.name));
        if !group.description.is_empty() {
            md.push_str(&format!("{}\n\n", group.description));
        }
        let members: Vec<&Signal> = group
            .signals
            .iter()
            .filter_map(|id| report.signals.iter().find(|s| s.id == *id))
            .collect();
        if members.is_empty() {
            md.push_str("_No signals._\n\n");
        } else {
            push_signal_table(&mut md, &members, image);
        }
    }

    let ungrouped: Vec<&Signal> = report.signals.iter().filter(|s| !s.is_grouped()).collect();
    if !ungrouped.is_empty() {
        md.push_str("## Ungrouped\n\n");
        push_signal_table(&mut md, &ungrouped, image);
    }

    md
}

fn push_signal_table(md: &mut String, signals: &[&Signal], image: Option<ImageSize>) {
    if image.is_some() {
        md.push_str("| # | Kind | Position | Pixels | Label | Description | Date |\n");
        md.push_str("| --- | --- | --- | --- | --- | --- | --- |\n");
    } else {
        md.push_str("| # | Kind | Position | Label | Description | Date |\n");
        md.push_str("| --- | --- | --- | --- | --- | --- |\n");
    }
    for s in signals {
        let pixels = image
            .map(|img| format!(" {} |", pixel_cell(s, img)))
            .unwrap_or_default();
        md.push_str(&format!(
            "| {} | {} | {} |{} {} | {} | {} |\n",
            s.id,
            s.kind,
            position_cell(s),
            pixels,
            escape_cell(&s.label),
            escape_cell(&s.description),
            escape_cell(&s.date),
        ));
    }
    md.push('\n');
}

// ─── Plain-text summary ─────────────────────────────────────────────

/// Compact grouped listing for terminals.
pub fn render_summary(report: &AnalysisReport, image: Option<ImageSize>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}: {} signals in {} groups ({})\n",
        report.source,
        report.signal_count(),
        report.group_count(),
        report.source_hash.short()
    ));

    let line = |s: &Signal| {
        let pixels = image
            .map(|img| format!(" {}", pixel_cell(s, img)))
            .unwrap_or_default();
        format!(
            "  #{:<3} {:<10} {}{}  {} — {} [{}]\n",
            s.id.to_string(),
            s.kind.as_str(),
            position_cell(s),
            pixels,
            s.label,
            s.description,
            s.date
        )
    };

    for group in &report.groups {
        if group.description.is_empty() {
            out.push_str(&format!("\n{}\n", group.name));
        } else {
            out.push_str(&format!("\n{} — {}\n", group.name, group.description));
        }
        for id in &group.signals {
            if let Some(s) = report.signals.iter().find(|s| s.id == *id) {
                out.push_str(&line(s));
            }
        }
    }

    let ungrouped: Vec<&Signal> = report.signals.iter().filter(|s| !s.is_grouped()).collect();
    if !ungrouped.is_empty() {
        out.push_str("\n(ungrouped)\n");
        for s in ungrouped {
            out.push_str(&line(s));
        }
    }
    out
}

// ─── Artifact bundle ────────────────────────────────────────────────

/// Save the full artifact set for one analysis.
///
/// Creates a directory named `{stem}_{timestamp}/` under `output_dir`
/// containing:
/// - `analysis.json` — the full `AnalysisReport`
/// - `signals.csv` — flat signal table
/// - `report.md` — grouped Markdown report
///
/// Returns the path to the created directory.
pub fn save_artifacts(
    report: &AnalysisReport,
    output_dir: &Path,
    image: Option<ImageSize>,
) -> Result<PathBuf> {
    let dirname = format!(
        "{}_{}",
        artifact_stem(&report.source),
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    let run_dir = output_dir.join(dirname);
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("failed to create artifact dir: {}", run_dir.display()))?;

    let json = export_json(report)?;
    std::fs::write(run_dir.join("analysis.json"), &json)?;

    let csv = export_signals_csv(&report.signals)?;
    std::fs::write(run_dir.join("signals.csv"), &csv)?;

    let md = generate_markdown(report, image);
    std::fs::write(run_dir.join("report.md"), &md)?;

    info!(dir = %run_dir.display(), signals = report.signal_count(), "artifacts saved");
    Ok(run_dir)
}

/// Load an `AnalysisReport` from an artifact directory's analysis.json.
pub fn load_artifacts(dir: &Path) -> Result<AnalysisReport> {
    let path = dir.join("analysis.json");
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    import_json(&json)
}

// ─── Helpers ────────────────────────────────────────────────────────

fn position_cell(s: &Signal) -> String {
    format!("({:.1}%, {:.1}%)", s.x, s.y)
}

fn pixel_cell(s: &Signal, img: ImageSize) -> String {
    let (px, py) = s.pixel_position(img.width as f64, img.height as f64);
    format!("[{:.0}px, {:.0}px]", px, py)
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// File stem of `source`, reduced to characters safe in a directory name.
fn artifact_stem(source: &str) -> String {
    let stem = Path::new(source)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("analysis");
    let cleaned: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "analysis".to_string()
    } else {
        cleaned
    }
}
