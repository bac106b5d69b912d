//! CLI tool for extracting slide images from PowerPoint files.

use anyhow::{Context, Result};
use clap::Parser;
use pptx_images_core::ExtractionReport;
use pptx_images_pptx::ImageExtractor;
use std::path::{Path, PathBuf};

/// Extract embedded images from a PowerPoint file, named by slide and order.
#[derive(Parser, Debug)]
#[command(name = "pptx-images")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input presentation (.pptx or .pptm)
    input: PathBuf,

    /// Output directory (default: ./<input file name without extension>)
    output: Option<PathBuf>,

    /// Print a JSON report instead of the per-slide summary
    #[arg(long)]
    json: bool,

    /// Directory to unpack the archive in (default: system temp dir)
    #[arg(long, value_name = "DIR")]
    temp_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_dir = get_output_dir(&args.input, args.output.as_deref())?;

    let mut extractor = ImageExtractor::new();
    if let Some(dir) = &args.temp_dir {
        extractor = extractor.with_scratch_parent(dir);
    }

    log::debug!("Extracting {} into {}", args.input.display(), output_dir.display());
    let report = extractor
        .extract(&args.input, &output_dir)
        .with_context(|| format!("Failed to extract images from {}", args.input.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in summary_lines(&report) {
            println!("{}", line);
        }
    }

    Ok(())
}

/// Determine the output directory: the explicit one, or a directory named
/// after the input's base name in the current working directory.
fn get_output_dir(input_path: &Path, output_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = output_dir {
        return Ok(dir.to_path_buf());
    }

    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    Ok(cwd.join(stem))
}

/// Console lines for a finished run: one per slide with images, then a total.
fn summary_lines(report: &ExtractionReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .slides
        .iter()
        .map(|s| format!("Slide {}: {} image(s)", s.number, s.image_count))
        .collect();

    lines.push(format!(
        "Done. Extracted {} image(s) to: {}",
        report.total_images(),
        report.output_dir.display()
    ));
    lines
}
