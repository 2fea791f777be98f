//! Catalog inspection commands.
//!
//! Provides commands to list the pictogram catalog with the same filters the
//! board applies: by category, favorites only, or the default view.

use crate::board::Filter;
use crate::models::{Category, Pictogram};
use crate::storage::CatalogStore;
use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Inspect the pictogram catalog
#[derive(Debug, Clone, Args)]
pub struct CatalogArgs {
    /// Catalog subcommand
    #[command(subcommand)]
    pub command: CatalogCommand,
}

/// Catalog subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum CatalogCommand {
    /// List pictograms, optionally filtered like the board view
    List(ListCatalogArgs),
}

/// List pictograms in the catalog
#[derive(Debug, Clone, Args)]
pub struct ListCatalogArgs {
    /// Path to the catalog file (defaults to the configured store)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Only show pictograms of this category (person, action, thing,
    /// quality, place, time)
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Only show favorite pictograms
    #[arg(long)]
    pub favorites: bool,

    /// Show every entry instead of the board's default page
    #[arg(long)]
    pub all: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct PictogramItem {
    id: String,
    text: String,
    category: &'static str,
    favorite: bool,
    usage_count: u32,
}

#[derive(Debug, Serialize)]
struct ListCatalogResponse {
    pictograms: Vec<PictogramItem>,
    count: usize,
}

impl CatalogArgs {
    /// Execute the catalog command
    pub fn execute(&self, default_catalog: &PathBuf, page_size: usize) -> Result<()> {
        match &self.command {
            CatalogCommand::List(args) => args.execute(default_catalog, page_size),
        }
    }
}

impl ListCatalogArgs {
    /// Execute the list command
    pub fn execute(&self, default_catalog: &PathBuf, page_size: usize) -> Result<()> {
        if self.favorites && self.category.is_some() {
            anyhow::bail!("--favorites and --category are mutually exclusive");
        }

        let path = self.catalog.clone().unwrap_or_else(|| default_catalog.clone());
        let store = CatalogStore::new(path);
        let entries = store.load()?;

        let filter = if self.favorites {
            Filter::Favorites
        } else if let Some(category) = &self.category {
            Filter::Category(Category::parse_or_default(category))
        } else {
            Filter::MostUsed
        };

        let page = if self.all { usize::MAX } else { page_size };
        let view = crate::board::Catalog::new(entries).visible(filter, page);

        if self.json {
            print_json(&view)?;
        } else {
            print_table(&view);
        }

        Ok(())
    }
}

fn print_json(view: &[Pictogram]) -> Result<()> {
    let response = ListCatalogResponse {
        pictograms: view
            .iter()
            .map(|p| PictogramItem {
                id: p.id.clone(),
                text: p.text.clone(),
                category: p.category.id(),
                favorite: p.favorite,
                usage_count: p.usage_count,
            })
            .collect(),
        count: view.len(),
    };
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn print_table(view: &[Pictogram]) {
    if view.is_empty() {
        println!("No pictograms match the selected filter.");
        return;
    }

    println!("{:<6} {:<16} {:<12} {:<4} {}", "ID", "TEXT", "CATEGORY", "FAV", "USED");
    for p in view {
        println!(
            "{:<6} {:<16} {:<12} {:<4} {}",
            p.id,
            p.text,
            p.category.id(),
            if p.favorite { "*" } else { "" },
            p.usage_count
        );
    }
    println!();
    println!("{} pictogram(s)", view.len());
}
