use anyhow::Result;
use clap::{Parser, Subcommand};
use miditext_validate::{extract_metadata, quick_validate, stats, validate_and_fix};
use std::fs;

#[derive(Parser)]
#[command(name = "miditext-validate")]
#[command(about = "Validator and auto-correction engine for miditext notation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a document and auto-correct every structural problem
    Validate {
        /// Notation text (or use --file)
        #[arg(required_unless_present = "file")]
        text: Option<String>,

        /// Read the document from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<String>,

        /// Output format (json or debug)
        #[arg(short, long, default_value = "debug")]
        output_format: String,

        /// Print only the corrected document text
        #[arg(long)]
        midi_only: bool,
    },
    /// Quick presence checks without correction
    Check {
        /// Notation text (or use --file)
        #[arg(required_unless_present = "file")]
        text: Option<String>,

        /// Read the document from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<String>,

        /// Output format (json or debug)
        #[arg(short, long, default_value = "debug")]
        output_format: String,
    },
    /// Bar/voice counts and compression statistics
    Stats {
        /// Notation text (or use --file)
        #[arg(required_unless_present = "file")]
        text: Option<String>,

        /// Read the document from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<String>,

        /// Output format (json or debug)
        #[arg(short, long, default_value = "debug")]
        output_format: String,
    },
    /// Extract the metadata values
    Meta {
        /// Notation text (or use --file)
        #[arg(required_unless_present = "file")]
        text: Option<String>,

        /// Read the document from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<String>,

        /// Output format (json or debug)
        #[arg(short, long, default_value = "debug")]
        output_format: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            text,
            file,
            output_format,
            midi_only,
        } => {
            let input = read_input(text, file)?;
            let report = validate_and_fix(&input);
            if midi_only {
                println!("{}", report.midi);
            } else {
                match output_format.as_str() {
                    "json" => println!("{}", serde_json::to_string_pretty(&report)?),
                    _ => {
                        if report.success {
                            println!("✓ Document is structurally valid");
                        } else {
                            println!("✗ Validation failed");
                        }
                        for error in &report.errors {
                            println!("  error: {}", error);
                        }
                        for warning in &report.warnings {
                            println!("  warning: {}", warning);
                        }
                        for fix in &report.fixed {
                            println!("  fixed: {}", fix);
                        }
                        println!("\n{}", report.midi);
                    }
                }
            }
            if !report.success {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Check {
            text,
            file,
            output_format,
        } => {
            let input = read_input(text, file)?;
            let report = quick_validate(&input);
            match output_format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&report)?),
                _ => {
                    println!(
                        "{} tempo={} timesig={} key={} bars={} notes={}",
                        if report.valid { "✓" } else { "✗" },
                        report.has_tempo,
                        report.has_time_sig,
                        report.has_key,
                        report.has_bars,
                        report.has_notes
                    );
                }
            }
            if !report.valid {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Stats {
            text,
            file,
            output_format,
        } => {
            let input = read_input(text, file)?;
            let stats = stats(&input);
            match output_format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&stats)?),
                _ => {
                    println!("Bars: {}", stats.bars);
                    println!("Voices: {}", stats.voices);
                    println!("Compressed: {}", stats.has_compression);
                    println!("Compression ratio: {}%", stats.compression_ratio);
                }
            }
            Ok(())
        }
        Commands::Meta {
            text,
            file,
            output_format,
        } => {
            let input = read_input(text, file)?;
            let meta = extract_metadata(&input);
            match output_format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&meta)?),
                _ => println!("{:#?}", meta),
            }
            Ok(())
        }
    }
}

fn read_input(text: Option<String>, file: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    match file {
        Some(path) => fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read file '{}': {}", path, e)),
        None => Err(anyhow::anyhow!("no input given; pass TEXT or --file")),
    }
}
