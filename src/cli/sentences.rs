//! Saved-sentence history commands.

use crate::storage::SentenceStore;
use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Inspect the saved-sentence history
#[derive(Debug, Clone, Args)]
pub struct SentencesArgs {
    /// Sentences subcommand
    #[command(subcommand)]
    pub command: SentencesCommand,
}

/// Saved-sentence subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum SentencesCommand {
    /// List saved sentences, oldest first
    List(ListSentencesArgs),
}

/// List saved sentences
#[derive(Debug, Clone, Args)]
pub struct ListSentencesArgs {
    /// Path to the sentences file (defaults to the configured store)
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct SentenceItem {
    id: String,
    text: String,
    pictogram_count: usize,
    created_at: String,
    times_used: u32,
}

#[derive(Debug, Serialize)]
struct ListSentencesResponse {
    sentences: Vec<SentenceItem>,
    count: usize,
}

impl SentencesArgs {
    /// Execute the sentences command
    pub fn execute(&self, default_file: &PathBuf) -> Result<()> {
        match &self.command {
            SentencesCommand::List(args) => args.execute(default_file),
        }
    }
}

impl ListSentencesArgs {
    /// Execute the list command
    pub fn execute(&self, default_file: &PathBuf) -> Result<()> {
        let path = self.file.clone().unwrap_or_else(|| default_file.clone());
        let store = SentenceStore::new(path);
        let sentences = store.load()?;

        if self.json {
            let response = ListSentencesResponse {
                sentences: sentences
                    .iter()
                    .map(|s| SentenceItem {
                        id: s.id.to_string(),
                        text: s.text.clone(),
                        pictogram_count: s.pictogram_ids.len(),
                        created_at: s.created_at.to_rfc3339(),
                        times_used: s.times_used,
                    })
                    .collect(),
                count: sentences.len(),
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
            return Ok(());
        }

        if sentences.is_empty() {
            println!("No saved sentences yet.");
            return Ok(());
        }

        for s in &sentences {
            println!(
                "{}  {}  ({} tiles, used {}x)",
                s.created_at.format("%Y-%m-%d %H:%M"),
                s.text,
                s.pictogram_ids.len(),
                s.times_used
            );
        }
        println!();
        println!("{} sentence(s)", sentences.len());

        Ok(())
    }
}
