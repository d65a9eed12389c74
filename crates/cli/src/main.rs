mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::ThemeArgs;

#[derive(Debug, Parser)]
#[command(
    name = "catwind",
    version,
    about = "Validate catwind theme descriptors and generate CSS from them"
)]
struct Cli {
    /// Log at debug level, ignoring RUST_LOG.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scan content files and write the stylesheet.
    Build {
        #[command(flatten)]
        theme: ThemeArgs,
        /// Write CSS here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        minify: bool,
    },
    /// Validate the descriptor and summarize it.
    Check {
        #[command(flatten)]
        theme: ThemeArgs,
    },
    /// Report whether the safelist keeps each class.
    Match {
        #[command(flatten)]
        theme: ThemeArgs,
        #[arg(required = true)]
        classes: Vec<String>,
    },
    /// Print the effective config as JSON.
    Dump {
        #[command(flatten)]
        theme: ThemeArgs,
    },
}

fn init_logging(verbose: bool) {
    let default_level = "warn";
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        // Fall back to `default_level` if RUST_LOG is unset or invalid.
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Build {
            theme,
            output,
            minify,
        } => commands::build(&theme, output.as_deref(), minify, &mut stdout),
        Command::Check { theme } => commands::check(&theme, &mut stdout),
        Command::Match { theme, classes } => commands::match_classes(&theme, &classes, &mut stdout),
        Command::Dump { theme } => commands::dump(&theme, &mut stdout),
    }
}
