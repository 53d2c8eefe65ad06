//! greydoc: generate GreyScript API documentation and datasets.
//!
//! Reads per-object signature and description JSON and renders one of:
//!
//! - **jsonl**: chat-turn fine-tuning dataset (`index.jsonl`)
//! - **jsonl-flat**: flat-record dataset (`index.jsonl`)
//! - **text**: word-wrapped plain-text reference (`index.txt`)
//! - **html**: single-page site (`index.html`)

mod error;
mod format;
mod join;
mod loader;
mod model;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "greydoc",
    version,
    about = "Generate GreyScript API documentation and fine-tuning datasets"
)]
struct Cli {
    /// Output format: jsonl, jsonl-flat, text, html
    #[arg(short = 'f', long, env = "GREYDOC_FORMAT", default_value = "html")]
    format: String,

    /// Directory of signature files, one `<object>.json` per object
    #[arg(
        short = 's',
        long,
        env = "GREYDOC_SIGNATURES",
        default_value = "src/signatures"
    )]
    signatures: PathBuf,

    /// Directory of description files plus optional site.json
    #[arg(
        short = 'd',
        long,
        env = "GREYDOC_DESCRIPTIONS",
        default_value = "src/descriptions/en"
    )]
    descriptions: PathBuf,

    /// Output directory, created if absent
    #[arg(short = 'o', long, env = "GREYDOC_OUTPUT", default_value = "docs")]
    output: PathBuf,

    /// Wrap column for the text format
    #[arg(short = 'w', long, default_value_t = format::DEFAULT_WIDTH)]
    width: usize,

    /// End the jsonl-flat output with a newline after the last record
    #[arg(long)]
    trailing_newline: bool,

    /// Compare against the existing output instead of writing it
    #[arg(long)]
    check: bool,

    /// Log format: text (default) or json
    #[arg(long, default_value = "text")]
    log_format: LogFormat,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Debug, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);
    run(&cli)
}

fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = match cli.verbose {
        0 => "greydoc=info",
        1 => "greydoc=debug",
        _ => "greydoc=trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = render::RenderOptions {
        width: cli.width,
        trailing_newline: cli.trailing_newline,
    };
    // Resolve the format before touching the filesystem
    let renderer = render::create_renderer(&cli.format, &options)?;

    let catalog = loader::load_catalog(&cli.signatures, &cli.descriptions)?;
    let output = renderer.render(&catalog)?;

    let out_path = cli
        .output
        .join(format!("index.{}", renderer.file_extension()));

    if cli.check {
        check_output(&out_path, &output)?;
        println!("{} is up to date", out_path.display());
        return Ok(());
    }

    fs::create_dir_all(&cli.output).with_context(|| {
        format!("failed to create output directory: {}", cli.output.display())
    })?;
    fs::write(&out_path, &output)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    info!(path = %out_path.display(), bytes = output.len(), "wrote output");
    println!("{} written to {}", renderer.artifact(), out_path.display());
    Ok(())
}

/// Fail with [`error::DocError::Stale`] unless `path` holds exactly `expected`.
fn check_output(path: &Path, expected: &str) -> Result<(), error::DocError> {
    match fs::read_to_string(path) {
        Ok(existing) if existing == expected => Ok(()),
        Ok(_) => Err(error::DocError::Stale {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(error::DocError::Stale {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(error::DocError::io(path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn check_matches_identical_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.txt");
        fs::write(&path, "same").unwrap();
        assert!(check_output(&path, "same").is_ok());
    }

    #[test]
    fn check_reports_changed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.txt");
        fs::write(&path, "old").unwrap();
        let err = check_output(&path, "new").unwrap_err();
        assert!(matches!(err, error::DocError::Stale { .. }));
    }

    #[test]
    fn check_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = check_output(&dir.path().join("index.html"), "x").unwrap_err();
        assert!(matches!(err, error::DocError::Stale { .. }));
    }

    #[test]
    fn cli_defaults_mirror_repository_layout() {
        let cli = Cli::parse_from(["greydoc"]);
        assert_eq!(cli.format, "html");
        assert_eq!(cli.signatures, PathBuf::from("src/signatures"));
        assert_eq!(cli.descriptions, PathBuf::from("src/descriptions/en"));
        assert_eq!(cli.output, PathBuf::from("docs"));
        assert_eq!(cli.width, 80);
        assert!(!cli.trailing_newline);
        assert!(!cli.check);
    }
}
