//! ChartMark CLI — parse LLM chart analyses into annotation overlays.
//!
//! Commands:
//! - `parse` — parse one or more analysis files and print them
//! - `export` — write the artifact bundle for one analysis file
//! - `example` — print the bundled example analysis
//! - `prompt` — print the LLM prompt template

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::debug;

use chartmark_core::templates::{ANALYSIS_PROMPT, EXAMPLE_ANALYSIS};
use chartmark_core::{parse, Config, ImageSize, OutputFormat, ParseError};
use chartmark_report::{
    export_json, export_signals_csv, generate_markdown, render_summary, save_artifacts,
    AnalysisReport,
};

#[derive(Parser)]
#[command(
    name = "chartmark",
    version,
    about = "ChartMark CLI — turn LLM chart analyses into chart annotations"
)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse analysis files and print the extracted annotations.
    Parse {
        /// Analysis text files. Use `-` for stdin.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format: summary, json, csv, markdown. Overrides the config file.
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Image width in pixels, for pixel positions.
        #[arg(long, requires = "height")]
        width: Option<u32>,

        /// Image height in pixels, for pixel positions.
        #[arg(long, requires = "width")]
        height: Option<u32>,
    },
    /// Write analysis.json, signals.csv, and report.md for one analysis file.
    Export {
        /// Analysis text file. Use `-` for stdin.
        file: PathBuf,

        /// Output directory. Defaults to ./annotations.
        #[arg(long, default_value = "annotations")]
        output_dir: PathBuf,
    },
    /// Print the bundled example analysis.
    Example,
    /// Print the prompt to give an LLM along with the chart image.
    Prompt,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chartmark=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    debug!(format = %config.output.format, image = ?config.image, "config loaded");

    match cli.command {
        Commands::Parse {
            files,
            format,
            width,
            height,
        } => run_parse(&files, format, width.zip(height), &config),
        Commands::Export { file, output_dir } => run_export(&file, &output_dir, &config),
        Commands::Example => {
            println!("{EXAMPLE_ANALYSIS}");
            Ok(())
        }
        Commands::Prompt => {
            println!("{ANALYSIS_PROMPT}");
            Ok(())
        }
    }
}

fn run_parse(
    files: &[PathBuf],
    format: Option<OutputFormat>,
    size: Option<(u32, u32)>,
    config: &Config,
) -> Result<()> {
    let format = format.unwrap_or(config.output.format);
    let image = match size {
        Some((w, h)) => Some(ImageSize::new(w, h)?),
        None => config.image,
    };

    // Read sequentially (stdin can only be consumed once), parse in parallel.
    let inputs = files
        .iter()
        .map(|path| -> Result<(String, String)> { Ok((source_name(path), read_input(path)?)) })
        .collect::<Result<Vec<_>>>()?;

    let results: Vec<(String, Result<AnalysisReport, ParseError>)> = inputs
        .into_par_iter()
        .map(|(source, text)| {
            let parsed = parse(&text).map(|a| AnalysisReport::new(source.clone(), a));
            (source, parsed)
        })
        .collect();

    let mut failures = 0usize;
    for (source, result) in &results {
        match result {
            Ok(report) => print!("{}", render(report, format, image)?),
            Err(e) => {
                eprintln!("Error for {source}: {e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} inputs produced no signals", results.len());
    }
    Ok(())
}

fn run_export(file: &Path, output_dir: &Path, config: &Config) -> Result<()> {
    let source = source_name(file);
    let text = read_input(file)?;
    let analysis = parse(&text).with_context(|| format!("parsing {source}"))?;
    let report = AnalysisReport::new(source, analysis);

    let dir = save_artifacts(&report, output_dir, config.image)?;
    println!(
        "{} signals in {} groups",
        report.signal_count(),
        report.group_count()
    );
    println!("Artifacts saved to: {}", dir.display());
    Ok(())
}

fn render(report: &AnalysisReport, format: OutputFormat, image: Option<ImageSize>) -> Result<String> {
    Ok(match format {
        OutputFormat::Summary => render_summary(report, image),
        OutputFormat::Json => format!("{}\n", export_json(report)?),
        OutputFormat::Csv => export_signals_csv(&report.signals)?,
        OutputFormat::Markdown => generate_markdown(report, image),
    })
}

fn source_name(path: &Path) -> String {
    if path == Path::new("-") {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return std::io::read_to_string(std::io::stdin()).context("failed to read stdin");
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
