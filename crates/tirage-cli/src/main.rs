//! CLI frontend for the tirage oracle card deck generator.

mod commands;
#[cfg(feature = "docx")]
mod docx;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tirage",
    about = "tirage — générateur de cartes d'oracle pour le JDR",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a deck and write the text (and optional DOCX) output
    Generate {
        /// Path of the JSON configuration file
        #[arg(default_value = "deck_config.json")]
        config: PathBuf,

        /// Number of cards to generate (skips the interactive prompt)
        #[arg(short = 'n', long)]
        count: Option<u32>,

        /// RNG seed for a reproducible deck
        #[arg(short, long)]
        seed: Option<u64>,

        /// Override the text output path from the configuration
        #[arg(long)]
        txt: Option<PathBuf>,

        /// Override the DOCX output path from the configuration
        #[arg(long)]
        docx: Option<PathBuf>,

        /// Skip the DOCX output even if the configuration enables it
        #[arg(long)]
        no_docx: bool,
    },

    /// Validate a configuration file without generating anything
    Check {
        /// Path of the JSON configuration file
        #[arg(default_value = "deck_config.json")]
        config: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            config,
            count,
            seed,
            txt,
            docx,
            no_docx,
        } => commands::generate::run(&config, count, seed, txt.as_deref(), docx.as_deref(), no_docx),
        Commands::Check { config } => commands::check::run(&config),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
