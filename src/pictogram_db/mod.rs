//! Built-in starter pictogram set.
//!
//! This module provides the system pictograms that ship with the
//! application, embedded in the binary at compile time. The starter set
//! covers basic communication needs across all six grammatical categories
//! and seeds the catalog store on first run.

use crate::models::{Category, Pictogram};
use anyhow::{Context, Result};
use serde::Deserialize;

/// Schema of the embedded starter.json file.
#[derive(Debug, Deserialize)]
struct StarterDatabase {
    #[allow(dead_code)]
    version: String,
    pictograms: Vec<Pictogram>,
}

/// Loads the built-in starter catalog from the embedded JSON file.
///
/// All entries are system pictograms: approved, no creator, zero usage.
/// Entry order is the board's initial "most used" order.
///
/// # Errors
///
/// Returns an error only if the embedded data fails to parse, which would
/// indicate a packaging defect rather than a runtime condition.
pub fn starter_catalog() -> Result<Vec<Pictogram>> {
    let json_data = include_str!("starter.json");
    let db: StarterDatabase =
        serde_json::from_str(json_data).context("Failed to parse embedded starter.json")?;
    Ok(db.pictograms)
}

/// Number of starter pictograms in the given category.
#[must_use]
pub fn category_count(pictograms: &[Pictogram], category: Category) -> usize {
    pictograms.iter().filter(|p| p.category == category).count()
}
