//! Suggestion tracing command.
//!
//! Replays a sentence word by word against the catalog and prints the
//! category the engine would surface after each tap. Useful for verifying
//! lexicon changes without driving the TUI.

use crate::board::suggest_next_category;
use crate::models::Sentence;
use crate::storage::CatalogStore;
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Trace next-category suggestions for a sentence
#[derive(Debug, Clone, Args)]
pub struct SuggestArgs {
    /// Words to tap, in order; each must match a catalog pictogram text
    /// (case-insensitive)
    #[arg(value_name = "WORD", required = true, num_args = 1..)]
    pub words: Vec<String>,

    /// Path to the catalog file (defaults to the configured store)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct SuggestStep {
    word: String,
    category: &'static str,
    suggestion: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct SuggestResponse {
    steps: Vec<SuggestStep>,
    sentence: String,
}

impl SuggestArgs {
    /// Execute the suggest command
    pub fn execute(&self, default_catalog: &PathBuf) -> Result<()> {
        let path = self.catalog.clone().unwrap_or_else(|| default_catalog.clone());
        let store = CatalogStore::new(path);
        let catalog = store.load()?;

        let mut sentence = Sentence::new();
        let mut steps = Vec::new();

        for word in &self.words {
            let pictogram = catalog
                .iter()
                .find(|p| p.text.eq_ignore_ascii_case(word))
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("No pictogram matches '{word}' in the catalog"))?;

            let category = pictogram.category;
            sentence.append(pictogram);
            let suggestion = suggest_next_category(&sentence);

            steps.push(SuggestStep {
                word: word.clone(),
                category: category.id(),
                suggestion: suggestion.map(crate::models::Category::id),
            });
        }

        if self.json {
            let response = SuggestResponse {
                steps,
                sentence: sentence.display_text(),
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            for step in &steps {
                match step.suggestion {
                    Some(next) => {
                        println!("{:<16} [{}] -> suggest {}", step.word, step.category, next);
                    }
                    None => println!("{:<16} [{}] -> no suggestion", step.word, step.category),
                }
            }
            println!();
            println!("Sentence: {}", sentence.display_text());
        }

        Ok(())
    }
}
