//! Batch command - extract contacts from many OCR text files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use bizcard_core::{CardParser, HeuristicCardParser};

use super::load_config;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file JSON records
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Write all records to one JSON-lines file
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No files matched: {}", args.input);
    }

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)?;
    }

    let parser = HeuristicCardParser::new().with_config(config);

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let mut records = Vec::new();
    let mut failures = 0usize;

    for path in &files {
        pb.set_message(path.display().to_string());

        match fs::read_to_string(path) {
            Ok(text) => {
                let result = parser.parse(&text);
                debug!("{}: {} warnings", path.display(), result.warnings.len());

                if let Some(dir) = &args.output_dir {
                    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("card");
                    let out = dir.join(format!("{}.json", stem));
                    fs::write(&out, serde_json::to_string_pretty(&result.record)?)?;
                }

                records.push(result.record);
            }
            Err(e) => {
                failures += 1;
                warn!("failed to read {}: {}", path.display(), e);
                if !args.continue_on_error {
                    pb.abandon();
                    anyhow::bail!("Failed to read {}: {}", path.display(), e);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");

    if let Some(summary_path) = &args.summary {
        let mut lines = String::new();
        for record in &records {
            lines.push_str(&serde_json::to_string(record)?);
            lines.push('\n');
        }
        fs::write(summary_path, lines)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!(
        "{} Processed {} files ({} failed) in {:.1}s",
        style("✓").green(),
        records.len(),
        failures,
        start.elapsed().as_secs_f32()
    );

    Ok(())
}
