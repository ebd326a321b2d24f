//! `codeindex-toon` CLI — write codebase index trees as TOON artifacts.
//!
//! ## Usage
//!
//! ```sh
//! # Encode one JSON index (stdin → stdout)
//! echo '{"framework":"react","components":[{"name":"Nav","lines":40}]}' | codeindex-toon encode
//!
//! # Encode from file to file with a pipe delimiter
//! codeindex-toon encode -i index.json -o index.toon --delimiter pipe
//!
//! # Bundle several indexes into one artifact; unreadable inputs are skipped
//! codeindex-toon encode -i web.json -i api.json -o bundle.toon
//!
//! # Emit the collected tree as pretty JSON instead
//! codeindex-toon encode -i web.json -i api.json --format json
//! ```

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use codeindex_toon::{encode_with_options, Delimiter, EncodeOptions, Map, Value};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "codeindex-toon",
    version,
    about = "Encode codebase index trees as TOON (Token-Oriented Object Notation)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode JSON index documents to TOON
    Encode {
        /// Input file; repeat to bundle several documents (reads stdin if omitted)
        #[arg(short, long)]
        input: Vec<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Field delimiter for tabular rows and inline arrays: comma, tab or pipe
        #[arg(long, value_parser = str::parse::<Delimiter>, default_value = "comma")]
        delimiter: Delimiter,
        /// Spaces per nesting level
        #[arg(long, default_value_t = 2)]
        indent: usize,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Toon)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Toon,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Encode {
            input,
            output,
            delimiter,
            indent,
            format,
        } => {
            let options = EncodeOptions::new()
                .with_delimiter(delimiter)
                .with_indent(indent)
                .context("Invalid --indent")?;

            let tree = collect_inputs(&input)?;
            let artifact = match format {
                OutputFormat::Toon => encode_with_options(&tree, &options),
                OutputFormat::Json => {
                    serde_json::to_string_pretty(&tree).context("Failed to serialize JSON")?
                }
            };
            tracing::debug!(bytes = artifact.len(), ?format, "encoded artifact");

            write_output(output.as_deref(), &artifact)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only the artifact. `RUST_LOG`
/// overrides the `-v` level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

/// Build the tree to encode.
///
/// - no inputs: one document from stdin
/// - one input: that document; failures are fatal
/// - several inputs: an object keyed by path, in argument order. Inputs that
///   cannot be read or parsed are skipped with a warning so one bad file does
///   not lose the rest.
fn collect_inputs(inputs: &[String]) -> Result<Value> {
    match inputs {
        [] => parse_document(&read_input(None)?, "stdin"),
        [path] => parse_document(&read_input(Some(path.as_str()))?, path),
        paths => {
            let mut root = Map::new();
            for path in paths {
                match read_input(Some(path.as_str())).and_then(|text| parse_document(&text, path)) {
                    Ok(value) => {
                        root.insert(path.as_str(), value);
                    }
                    Err(err) => tracing::warn!("skipping {}: {:#}", path, err),
                }
            }
            if root.is_empty() {
                bail!("None of the {} inputs could be read", paths.len());
            }
            tracing::info!(
                collected = root.len(),
                skipped = paths.len() - root.len(),
                "collected inputs"
            );
            Ok(Value::Object(root))
        }
    }
}

fn parse_document(text: &str, source: &str) -> Result<Value> {
    let parsed: serde_json::Value = serde_json::from_str(text)
        .with_context(|| format!("Failed to parse JSON from {}", source))?;
    Ok(Value::from(parsed))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
            tracing::info!("wrote {}", path);
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
