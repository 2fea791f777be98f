//! Pictogram catalog and view filtering.
//!
//! The catalog holds the full, currently-known set of pictograms (pushed in
//! by the storage collaborator) and derives the board view through exactly
//! one active filter. It never re-sorts entries: the backing store decides
//! order (most-used first by convention), the catalog only filters and
//! truncates.

use crate::models::{Category, Pictogram};

/// The single active view discriminator for the board.
///
/// At most one discriminator is active at a time; selecting one replaces the
/// previous, which the enum enforces by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Default view: catalog order, truncated to the page size.
    #[default]
    MostUsed,
    /// Only entries of one grammatical category.
    Category(Category),
    /// Only entries the user marked as favorites.
    Favorites,
}

/// Full set of known pictograms, in store order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<Pictogram>,
}

impl Catalog {
    /// Creates a catalog from a list of pictograms, preserving input order.
    #[must_use]
    pub const fn new(entries: Vec<Pictogram>) -> Self {
        Self { entries }
    }

    /// All entries in store order.
    #[must_use]
    pub fn entries(&self) -> &[Pictogram] {
        &self.entries
    }

    /// Number of known pictograms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no pictograms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a pictogram by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Pictogram> {
        self.entries.iter().find(|p| p.id == id)
    }

    /// Computes the board view for the given filter.
    ///
    /// Entries keep their catalog order; only the default view is capped at
    /// `page_size`. An empty catalog yields an empty view for every filter.
    #[must_use]
    pub fn visible(&self, filter: Filter, page_size: usize) -> Vec<Pictogram> {
        match filter {
            Filter::MostUsed => self.entries.iter().take(page_size).cloned().collect(),
            Filter::Category(cat) => self
                .entries
                .iter()
                .filter(|p| p.category == cat)
                .cloned()
                .collect(),
            Filter::Favorites => self
                .entries
                .iter()
                .filter(|p| p.favorite)
                .cloned()
                .collect(),
        }
    }

    /// Flips the favorite flag on the entry with the given id.
    ///
    /// Returns the post-toggle value, or `None` if no entry matches. Views
    /// derived afterwards via [`Catalog::visible`] always agree with the full
    /// catalog, so a reader can never observe the two disagreeing.
    pub fn toggle_favorite(&mut self, id: &str) -> Option<bool> {
        let entry = self.entries.iter_mut().find(|p| p.id == id)?;
        entry.favorite = !entry.favorite;
        Some(entry.favorite)
    }

    /// Replaces the whole catalog with a fresh list from the store.
    ///
    /// The caller re-applies its active filter against the new entries; no
    /// state from the old catalog survives.
    pub fn replace(&mut self, entries: Vec<Pictogram>) {
        self.entries = entries;
    }
}
