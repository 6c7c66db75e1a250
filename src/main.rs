use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use quillpath::config::{Config, OutputFormat};
use quillpath::file::loader::{load_document, load_from_stdin};
use quillpath::output::{render_getter, render_value, Getter};
use quillpath::path::{parse_path, resolve};

/// QuillPath - resolve a path in a JSON or YAML document
#[derive(Parser)]
#[command(name = "quillpath")]
#[command(version)]
#[command(about = "Resolve a slash-separated path in a JSON or YAML document", long_about = None)]
struct Cli {
    /// Path to resolve, e.g. `items/0/name` or `items/*/name` (empty for the whole document)
    path: String,

    /// Document to read (omit to read from stdin)
    file: Option<String>,

    /// Print the result through a typed getter, falling back to its zero value
    #[arg(short, long, value_enum)]
    get: Option<Getter>,

    /// Output format (default from config: json)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Keep numbers as their literal text
    #[arg(long)]
    preserve_numbers: bool,

    /// Log resolution details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = Config::load();
    let preserve_numbers = cli.preserve_numbers || config.preserve_numbers;

    let root = match &cli.file {
        Some(file_path) => load_document(file_path, preserve_numbers)
            .with_context(|| format!("Failed to load {}", file_path))?,
        None => {
            if io::stdin().is_terminal() {
                anyhow::bail!("No input: pass a file or pipe a document on stdin");
            }
            load_from_stdin(preserve_numbers)?
        }
    };

    let path = parse_path(&cli.path);
    log::debug!("resolving {:?} ({} segments)", cli.path, path.len());

    if let Some(getter) = cli.get {
        println!("{}", render_getter(getter, &root, path.as_slice()));
        return Ok(ExitCode::SUCCESS);
    }

    let format = cli.format.unwrap_or(config.output_format);
    let pretty = config.pretty && !cli.compact;

    match resolve(&root, path.as_slice()) {
        Ok(Some(found)) => {
            println!("{}", render_value(&found, format, pretty)?);
            Ok(ExitCode::SUCCESS)
        }
        Ok(None) if config.null_when_not_found => {
            println!("null");
            Ok(ExitCode::SUCCESS)
        }
        Ok(None) => {
            log::info!("{} not found", cli.path);
            Ok(ExitCode::from(1))
        }
        Err(err) => {
            eprintln!("quillpath: {}", err);
            Ok(ExitCode::from(2))
        }
    }
}
