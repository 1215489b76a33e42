//! CLI front end for the Questline interactive fiction engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ql",
    about = "Questline — a scene-graph interactive fiction engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new adventure directory with a template scene file
    Init {
        /// Name of the adventure to create
        name: String,
    },

    /// Validate a scene file and print a summary
    Check {
        /// Scene file to validate
        #[arg(short, long, default_value = "adventure.json")]
        file: PathBuf,
    },

    /// Show one scene's text and links
    Show {
        /// Scene id (as written in the scene file)
        id: String,

        /// Scene file to read
        #[arg(short, long, default_value = "adventure.json")]
        file: PathBuf,
    },

    /// Play an adventure interactively, resuming any saved progress
    Play {
        /// Scene file to play
        #[arg(short, long, default_value = "adventure.json")]
        file: PathBuf,

        /// Directory the save snapshot lives in
        #[arg(short, long, default_value = ".")]
        save_dir: PathBuf,
    },

    /// Delete the saved snapshot
    Reset {
        /// Directory the save snapshot lives in
        #[arg(short, long, default_value = ".")]
        save_dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { name } => commands::init::run(&name),
        Commands::Check { file } => commands::check::run(&file),
        Commands::Show { id, file } => commands::show::run(&file, &id),
        Commands::Play { file, save_dir } => commands::play::run(&file, &save_dir),
        Commands::Reset { save_dir } => commands::reset::run(&save_dir),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
