//! PictoComm - Terminal pictogram communication board
//!
//! This application lets a user with communication difficulty compose short
//! sentences by selecting symbolic tiles grouped by grammatical category,
//! with the board predicting which category to surface after every tap.

// Module declarations
mod board;
mod cli;
mod config;
mod constants;
mod models;
mod pictogram_db;
mod storage;
mod tui;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;
use constants::{APP_BINARY_NAME, APP_NAME};
use storage::{CatalogStore, SentenceStore};

/// PictoComm - Terminal pictogram communication board
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Load the catalog as a restricted viewer (unapproved tiles hidden)
    #[arg(long)]
    restricted: bool,

    /// Headless subcommand; without one the interactive board starts
    #[command(subcommand)]
    command: Option<Command>,
}

/// Headless subcommands
#[derive(Subcommand, Debug)]
enum Command {
    /// Inspect the pictogram catalog
    Catalog(cli::CatalogArgs),
    /// Trace next-category suggestions for a sentence
    Suggest(cli::SuggestArgs),
    /// Inspect the saved-sentence history
    Sentences(cli::SentencesArgs),
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Load or create default config
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {e}");
            eprintln!("Falling back to default configuration.");
            Config::new()
        }
    };

    // Fall back to files in the working directory when no platform config
    // directory can be resolved (e.g. stripped-down containers).
    let catalog_path = config
        .catalog_path()
        .unwrap_or_else(|_| std::path::PathBuf::from("catalog.json"));
    let sentences_path = config
        .sentences_path()
        .unwrap_or_else(|_| std::path::PathBuf::from("sentences.json"));

    if let Some(command) = args.command {
        return match command {
            Command::Catalog(cmd) => cmd.execute(&catalog_path, config.ui.page_size),
            Command::Suggest(cmd) => cmd.execute(&catalog_path),
            Command::Sentences(cmd) => cmd.execute(&sentences_path),
        };
    }

    // First interactive run: write the defaults so the user has a file to
    // edit instead of reconstructing the schema by hand.
    if !Config::exists() {
        if let Err(e) = config.save() {
            eprintln!("Warning: Failed to write default config: {e}");
        }
    }

    // Interactive board
    let catalog_store = CatalogStore::new(catalog_path.clone());
    let sentence_store = SentenceStore::new(sentences_path);

    let pictograms = if args.restricted {
        catalog_store.load_approved()
    } else {
        catalog_store.load()
    };
    let pictograms = match pictograms {
        Ok(pictograms) => pictograms,
        Err(e) => {
            eprintln!("Error: Failed to load catalog: {e}");
            eprintln!();
            eprintln!("The catalog file may be corrupted. To start over, remove:");
            eprintln!("  {}", catalog_path.display());
            eprintln!();
            eprintln!("For headless inspection, run:");
            eprintln!("  {APP_BINARY_NAME} catalog list --help");
            std::process::exit(1);
        }
    };

    if pictograms.is_empty() {
        println!("{APP_NAME}: the catalog is empty; the board will start blank.");
    }

    let state = board::BoardState::new(pictograms, config.ui.page_size);
    let mut app = tui::App::new(state, config, catalog_store, sentence_store);

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result?;

    Ok(())
}
