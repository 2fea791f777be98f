//! Shared test fixtures for integration and E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use chrono::{TimeZone, Utc};
use pictocomm::models::{Category, Pictogram};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a system pictogram with a deterministic timestamp.
pub fn pict(id: &str, text: &str, category: Category) -> Pictogram {
    let mut p = Pictogram::system(id, text, category);
    p.created_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    p
}

/// A small catalog covering every category, in a deterministic order.
pub fn test_catalog() -> Vec<Pictogram> {
    vec![
        pict("1", "Yo", Category::Person),
        pict("5", "Mama", Category::Person),
        pict("9", "Quiero", Category::Action),
        pict("13", "Voy", Category::Action),
        pict("14", "Comer", Category::Action),
        pict("21", "Helado", Category::Thing),
        pict("22", "Agua", Category::Thing),
        pict("34", "Feliz", Category::Quality),
        pict("38", "Grande", Category::Quality),
        pict("40", "Casa", Category::Place),
        pict("47", "Ahora", Category::Time),
    ]
}

/// Writes a catalog to a temp JSON file the CLI can read.
///
/// # Returns
/// The file path and the guard keeping the directory alive.
pub fn create_temp_catalog_file(pictograms: &[Pictogram]) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("catalog.json");
    let content = serde_json::to_string_pretty(pictograms).expect("Failed to serialize catalog");
    fs::write(&path, content).expect("Failed to write catalog file");
    (path, temp_dir)
}
