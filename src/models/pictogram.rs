//! Pictogram record: a single symbol tile with a label and a category.

use crate::models::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A symbol tile the user can tap to extend the sentence under construction.
///
/// Records arrive from the catalog store as plain data; the core never
/// creates or destroys pictograms on its own, it only reads them and flips
/// the `favorite` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pictogram {
    /// Opaque identifier, unique within a catalog.
    pub id: String,
    /// Display label, also the word spoken/joined into sentence text.
    pub text: String,
    /// Grammatical category (corrupt stored values fall back to `Thing`).
    pub category: Category,
    /// Whether the user marked this tile for quick access.
    #[serde(default)]
    pub favorite: bool,
    /// Whether a supervising user approved this tile for restricted viewers.
    #[serde(default = "default_approved")]
    pub approved: bool,
    /// Id of the user who created the tile; empty for system pictograms.
    #[serde(default)]
    pub creator_id: String,
    /// Number of times the tile appeared in a saved sentence.
    #[serde(default)]
    pub usage_count: u32,
    /// Creation timestamp; records missing one are stamped at load time.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

const fn default_approved() -> bool {
    true
}

impl Pictogram {
    /// Creates a system pictogram (no creator, approved, unused).
    #[must_use]
    pub fn system(id: impl Into<String>, text: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            category,
            favorite: false,
            approved: true,
            creator_id: String::new(),
            usage_count: 0,
            created_at: Utc::now(),
        }
    }

    /// Whether this pictogram ships with the system (was not user-created).
    #[must_use]
    pub fn is_system(&self) -> bool {
        self.creator_id.is_empty()
    }

    /// Whether a user-created pictogram is still awaiting approval.
    #[must_use]
    pub fn is_pending_approval(&self) -> bool {
        !self.approved && !self.creator_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_pictogram_defaults() {
        let p = Pictogram::system("1", "Yo", Category::Person);
        assert!(p.is_system());
        assert!(p.approved);
        assert!(!p.favorite);
        assert_eq!(p.usage_count, 0);
    }

    #[test]
    fn test_pending_approval_requires_creator() {
        let mut p = Pictogram::system("9", "Dibujo", Category::Thing);
        p.approved = false;
        // System pictograms are never "pending"
        assert!(!p.is_pending_approval());

        p.creator_id = "user-7".to_string();
        assert!(p.is_pending_approval());
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let json = r#"{
            "id": "42",
            "text": "Agua",
            "category": "thing",
            "created_at": "2025-03-01T12:00:00Z"
        }"#;
        let p: Pictogram = serde_json::from_str(json).unwrap();
        assert!(!p.favorite);
        assert!(p.approved);
        assert!(p.is_system());
        assert_eq!(p.usage_count, 0);
    }

    #[test]
    fn test_deserialize_corrupt_category_falls_back() {
        let json = r#"{
            "id": "43",
            "text": "Misterio",
            "category": "CATEGORIA_ROTA",
            "created_at": "2025-03-01T12:00:00Z"
        }"#;
        let p: Pictogram = serde_json::from_str(json).unwrap();
        assert_eq!(p.category, Category::Thing);
    }
}
