//! CLI frontend for Gem's isekai simulator.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "GEM_LOG";

#[derive(Parser)]
#[command(
    name = "gem",
    about = "Gem's isekai simulator: be reborn, choose your gifts, and earn your epilogue",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the story (the default when no command is given)
    Play {
        /// RNG seed for reproducible rolls (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Column width for wrapped text
        #[arg(short, long, default_value = "88")]
        width: usize,
    },

    /// List every world, origin, power, legacy and event
    Catalog,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::play::run(None, gem_story::StoryConfig::default().width),
        Some(Commands::Play { seed, width }) => commands::play::run(seed, width),
        Some(Commands::Catalog) => commands::catalog::run(),
    };

    if let Err(e) = result {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}
