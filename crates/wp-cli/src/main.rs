//! CLI frontend for the weighted option picker.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wpick",
    about = "Keep a list of weighted options and pick one at random",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session for editing options and picking
    Shell {
        /// Initial option as NAME=WEIGHT (repeatable)
        #[arg(short = 'o', long = "option")]
        options: Vec<String>,

        /// RNG seed for reproducible picks
        #[arg(short, long)]
        seed: Option<u64>,

        /// Ignore weights and pick uniformly
        #[arg(short, long)]
        uniform: bool,
    },

    /// Pick once from the given options and exit
    Pick {
        /// Option as NAME=WEIGHT (repeatable)
        #[arg(short = 'o', long = "option")]
        options: Vec<String>,

        /// Tally this many picks instead of showing one
        #[arg(short, long)]
        draws: Option<u64>,

        /// RNG seed for reproducible picks
        #[arg(short, long)]
        seed: Option<u64>,

        /// Ignore weights and pick uniformly
        #[arg(short, long)]
        uniform: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show each option's chance of being picked
    Odds {
        /// Option as NAME=WEIGHT (repeatable)
        #[arg(short = 'o', long = "option")]
        options: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let result = match cli.command {
        Commands::Shell {
            options,
            seed,
            uniform,
        } => commands::shell::run(&options, seed, uniform),
        Commands::Pick {
            options,
            draws,
            seed,
            uniform,
            json,
        } => commands::pick::run(&options, draws, seed, uniform, json),
        Commands::Odds { options } => commands::odds::run(&options),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
