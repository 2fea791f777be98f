//! File-backed stores for the catalog and saved sentences.
//!
//! The board core never touches the filesystem; these stores are the
//! persistence collaborators that push resolved catalogs in and accept save
//! effects out. Both use plain JSON files with atomic temp-file + rename
//! writes, and both degrade gracefully: a missing catalog file yields the
//! built-in starter set, a missing sentence file yields an empty history.

use crate::models::Pictogram;
use crate::pictogram_db;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A sentence the user chose to keep, as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSentence {
    /// Storage identifier, assigned on save.
    pub id: Uuid,
    /// Ids of the pictograms, in tap order.
    pub pictogram_ids: Vec<String>,
    /// The joined display text, e.g. "Yo Quiero Comer Helado".
    pub text: String,
    /// When the sentence was saved.
    pub created_at: DateTime<Utc>,
    /// How often the sentence was replayed from history.
    #[serde(default)]
    pub times_used: u32,
}

/// Store for the full pictogram catalog.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    /// Creates a store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the catalog, falling back to the built-in starter set when the
    /// file does not exist yet.
    ///
    /// Corrupt category values inside individual records are mapped to the
    /// default category at the serde boundary and never fail the load.
    pub fn load(&self) -> Result<Vec<Pictogram>> {
        if !self.path.exists() {
            return pictogram_db::starter_catalog();
        }

        let content = fs::read_to_string(&self.path).context(format!(
            "Failed to read catalog file: {}",
            self.path.display()
        ))?;

        serde_json::from_str(&content).context(format!(
            "Failed to parse catalog file: {}",
            self.path.display()
        ))
    }

    /// Loads the catalog for a restricted viewer: unapproved entries are
    /// excluded before the data ever reaches the board core.
    pub fn load_approved(&self) -> Result<Vec<Pictogram>> {
        let mut pictograms = self.load()?;
        pictograms.retain(|p| p.approved);
        Ok(pictograms)
    }

    /// Writes the full catalog, atomically.
    pub fn save(&self, pictograms: &[Pictogram]) -> Result<()> {
        write_json(&self.path, pictograms)
    }

    /// Persists a favorite toggle for a single pictogram.
    ///
    /// Unknown ids are ignored: the flag may belong to a pictogram that was
    /// removed by a concurrent catalog replacement.
    pub fn set_favorite(&self, id: &str, favorite: bool) -> Result<()> {
        let mut pictograms = self.load()?;
        if let Some(entry) = pictograms.iter_mut().find(|p| p.id == id) {
            entry.favorite = favorite;
            self.save(&pictograms)?;
        }
        Ok(())
    }

    /// Increments the usage counter of every listed pictogram.
    ///
    /// Called after a sentence is saved; duplicate ids in a sentence count
    /// once per occurrence.
    pub fn record_usage(&self, ids: &[String]) -> Result<()> {
        let mut pictograms = self.load()?;
        for id in ids {
            if let Some(entry) = pictograms.iter_mut().find(|p| p.id == *id) {
                entry.usage_count += 1;
            }
        }
        self.save(&pictograms)
    }
}

/// Store for the saved-sentence history.
#[derive(Debug, Clone)]
pub struct SentenceStore {
    path: PathBuf,
}

impl SentenceStore {
    /// Creates a store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all saved sentences, newest last. A missing file is an empty
    /// history, not an error.
    pub fn load(&self) -> Result<Vec<SavedSentence>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).context(format!(
            "Failed to read sentences file: {}",
            self.path.display()
        ))?;

        serde_json::from_str(&content).context(format!(
            "Failed to parse sentences file: {}",
            self.path.display()
        ))
    }

    /// Appends a newly saved sentence, assigning it a storage id.
    pub fn append(&self, pictogram_ids: Vec<String>, text: String) -> Result<SavedSentence> {
        let mut sentences = self.load()?;
        let saved = SavedSentence {
            id: Uuid::new_v4(),
            pictogram_ids,
            text,
            created_at: Utc::now(),
            times_used: 0,
        };
        sentences.push(saved.clone());
        write_json(&self.path, &sentences)?;
        Ok(saved)
    }
}

/// Serializes `value` to `path` using the temp file + rename pattern, so the
/// file is never left half-written.
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context(format!(
            "Failed to create store directory: {}",
            parent.display()
        ))?;
    }

    let content = serde_json::to_string_pretty(value).context("Failed to serialize store data")?;

    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content).context(format!(
        "Failed to write temp store file: {}",
        temp_path.display()
    ))?;

    fs::rename(&temp_path, path).context(format!(
        "Failed to rename temp store file to: {}",
        path.display()
    ))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use tempfile::TempDir;

    fn temp_store() -> (CatalogStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = CatalogStore::new(dir.path().join("catalog.json"));
        (store, dir)
    }

    #[test]
    fn test_missing_catalog_falls_back_to_starter() {
        let (store, _dir) = temp_store();
        let pictograms = store.load().unwrap();
        assert_eq!(pictograms.len(), 51);
    }

    #[test]
    fn test_catalog_roundtrip() {
        let (store, _dir) = temp_store();
        let pictograms = vec![
            Pictogram::system("1", "Yo", Category::Person),
            Pictogram::system("22", "Agua", Category::Thing),
        ];
        store.save(&pictograms).unwrap();
        assert_eq!(store.load().unwrap(), pictograms);
    }

    #[test]
    fn test_corrupt_category_survives_load() {
        let (store, _dir) = temp_store();
        fs::write(
            store.path(),
            r#"[{"id": "x", "text": "Raro", "category": "INVENTADA"}]"#,
        )
        .unwrap();
        let pictograms = store.load().unwrap();
        assert_eq!(pictograms[0].category, Category::Thing);
    }

    #[test]
    fn test_load_approved_excludes_unapproved() {
        let (store, _dir) = temp_store();
        let mut pending = Pictogram::system("2", "Dibujo", Category::Thing);
        pending.approved = false;
        pending.creator_id = "user-1".to_string();
        let pictograms = vec![Pictogram::system("1", "Yo", Category::Person), pending];
        store.save(&pictograms).unwrap();

        let visible = store.load_approved().unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn test_set_favorite_persists() {
        let (store, _dir) = temp_store();
        store
            .save(&[Pictogram::system("1", "Yo", Category::Person)])
            .unwrap();

        store.set_favorite("1", true).unwrap();
        assert!(store.load().unwrap()[0].favorite);

        // Unknown id is a no-op, not an error.
        store.set_favorite("ghost", true).unwrap();
    }

    #[test]
    fn test_record_usage_increments_each_occurrence() {
        let (store, _dir) = temp_store();
        store
            .save(&[
                Pictogram::system("1", "Yo", Category::Person),
                Pictogram::system("22", "Agua", Category::Thing),
            ])
            .unwrap();

        store
            .record_usage(&["1".into(), "22".into(), "22".into()])
            .unwrap();
        let pictograms = store.load().unwrap();
        assert_eq!(pictograms[0].usage_count, 1);
        assert_eq!(pictograms[1].usage_count, 2);
    }

    #[test]
    fn test_sentence_store_append_and_load() {
        let dir = TempDir::new().unwrap();
        let store = SentenceStore::new(dir.path().join("sentences.json"));
        assert!(store.load().unwrap().is_empty());

        let saved = store
            .append(vec!["1".into(), "9".into()], "Yo Quiero".into())
            .unwrap();
        assert_eq!(saved.text, "Yo Quiero");
        assert_eq!(saved.times_used, 0);

        let all = store.load().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], saved);

        store
            .append(vec!["1".into(), "13".into(), "40".into()], "Yo Voy Casa".into())
            .unwrap();
        assert_eq!(store.load().unwrap().len(), 2);
    }
}
