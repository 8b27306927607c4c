//! Process command - extract a contact from a single OCR text file.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use bizcard_core::{CardParser, ContactRecord, HeuristicCardParser};

use super::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input OCR text file ("-" reads stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Opaque image payload carried through into the record
    #[arg(long)]
    image_data: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Report invariant violations on the extracted record
    #[arg(long)]
    validate: bool,

    /// Show extraction warnings and processing time
    #[arg(long)]
    show_metadata: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let text = read_input(&args.input)?;
    info!("processing {} ({} bytes)", args.input.display(), text.len());

    let parser = HeuristicCardParser::new().with_config(config);
    let result = match args.image_data.as_deref() {
        Some(image) => parser.parse_with_image(&text, image),
        None => parser.parse(&text),
    };

    if args.validate {
        let issues = result.record.validate();
        if !issues.is_empty() {
            eprintln!("{}", style("Validation issues:").yellow());
            for issue in &issues {
                eprintln!("  - {}", issue);
            }
        }
    }

    let output = format_record(&result.record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_metadata {
        println!();
        for warning in &result.warnings {
            println!("{} {}", style("!").yellow(), warning);
        }
        println!(
            "{} Processing time: {}ms",
            style("ℹ").blue(),
            result.processing_time_ms
        );
    }

    debug!("done");

    Ok(())
}

fn read_input(input: &PathBuf) -> anyhow::Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    Ok(fs::read_to_string(input)?)
}

pub fn format_record(record: &ContactRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_text(record: &ContactRecord) -> String {
    let mut output = String::new();

    for (field, value) in record.fields() {
        if value.is_empty() {
            continue;
        }
        output.push_str(&format!("{:<12} {}\n", field, value));
    }

    if output.is_empty() {
        output.push_str("(no fields resolved)\n");
    }

    output
}
