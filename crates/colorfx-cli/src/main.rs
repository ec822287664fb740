//! colorfx - inspect and apply CSS color filter matrices

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "colorfx")]
#[command(author, version, about = "Inspect and apply CSS color filter matrices")]
#[command(long_about = "
Builds the 3x3 color matrices behind CSS filter functions
(grayscale, sepia, saturate, hue-rotate) and applies them to colors.

Examples:
  colorfx matrix 'sepia(1)'                          # Print the sepia matrix
  colorfx matrix 'grayscale(50%) hue-rotate(90deg)'  # One matrix per filter
  colorfx apply 'saturate(2)' --color 0.8,0.4,0.2    # Filter an RGB color
  colorfx apply --chain look.json --color 1,0,0,0.5  # Chain from a JSON file
  colorfx -vv apply 'sepia(1)' --color 0.5,0.5,0.5 --json
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the color matrix of each filter operation
    #[command(visible_alias = "m")]
    Matrix(MatrixArgs),

    /// Apply a filter chain to a color
    #[command(visible_alias = "a")]
    Apply(ApplyArgs),
}

/// Where the filter chain comes from.
#[derive(Args)]
struct ChainSource {
    /// CSS filter text, e.g. "sepia(60%) hue-rotate(90deg)"
    #[arg(required_unless_present = "chain", conflicts_with = "chain")]
    filters: Option<String>,

    /// JSON file with a serialized filter chain
    #[arg(long)]
    chain: Option<PathBuf>,
}

/// Arguments for the `matrix` command.
#[derive(Args)]
struct MatrixArgs {
    #[command(flatten)]
    source: ChainSource,
}

/// Arguments for the `apply` command.
#[derive(Args)]
struct ApplyArgs {
    #[command(flatten)]
    source: ChainSource,

    /// Input color R,G,B or R,G,B,A (alpha defaults to 1)
    #[arg(short, long)]
    color: String,
}

/// Installs the tracing subscriber on stderr.
///
/// `RUST_LOG` wins over `-v` when set.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Matrix(args) => commands::matrix::run(args, cli.json),
        Commands::Apply(args) => commands::apply::run(args, cli.json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_apply() {
        let cli = Cli::try_parse_from(["colorfx", "-vv", "apply", "sepia(1)", "--color", "1,0,0"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Apply(args) = cli.command else {
            panic!("expected apply");
        };
        assert_eq!(args.source.filters.as_deref(), Some("sepia(1)"));
        assert_eq!(args.color, "1,0,0");
    }

    #[test]
    fn test_filters_or_chain_required() {
        assert!(Cli::try_parse_from(["colorfx", "matrix"]).is_err());
        assert!(Cli::try_parse_from(["colorfx", "matrix", "sepia(1)", "--chain", "x.json"]).is_err());
        assert!(Cli::try_parse_from(["colorfx", "matrix", "--chain", "x.json"]).is_ok());
    }
}
