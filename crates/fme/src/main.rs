//! fme CLI - Inline footnotes.
//!
//! Provides commands for:
//! - `render`: Replace footnote markers and append the footnote list
//! - `extract`: Show the footnotes found in a document as JSON
//! - `styles`: Print the footnote list stylesheet

mod commands;
mod error;
mod input;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ExtractArgs, RenderArgs, StylesArgs};
use output::Output;

/// fme - Inline footnotes for rendered documents.
#[derive(Parser)]
#[command(name = "fme", version, about)]
struct Cli {
    /// Enable verbose output (show processing logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render footnotes in a document.
    Render(RenderArgs),
    /// Print the footnotes found in a document as JSON.
    Extract(ExtractArgs),
    /// Print the stylesheet for footnote lists.
    Styles(StylesArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Extract(args) => args.execute(),
        Commands::Styles(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// Build the log filter.
///
/// --verbose enables DEBUG level, otherwise use `rust_log` or default to WARN.
/// An unparsable `rust_log` also falls back to WARN.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}
