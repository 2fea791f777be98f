//! Board state snapshot, events, and the pure reducer.
//!
//! The board is driven like a state machine: hosts translate user input into
//! [`BoardEvent`] values and feed them through [`reduce`], which returns the
//! next immutable [`BoardState`] snapshot plus an optional [`Effect`] for
//! external collaborators (persistence, notifications). The reducer performs
//! no I/O, never blocks, and processes each event to completion; hosts that
//! receive input from several threads must serialize events before applying
//! them.

use crate::board::catalog::{Catalog, Filter};
use crate::board::suggestion::suggest_next_category;
use crate::models::{Category, Pictogram, Sentence};

/// Immutable snapshot of everything a host needs to render the board.
///
/// Recomputed as a whole on every event; `available` is always derived from
/// `catalog` and `filter`, so the two can never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    /// The sentence under construction.
    pub sentence: Sentence,
    /// The current filtered board view, capped at `page_size` for the
    /// default view.
    pub available: Vec<Pictogram>,
    /// The full pictogram catalog, in store order.
    pub catalog: Catalog,
    /// The single active view discriminator.
    pub filter: Filter,
    /// Cap for the default view (from configuration).
    pub page_size: usize,
}

impl BoardState {
    /// Creates the initial snapshot for a freshly loaded catalog.
    #[must_use]
    pub fn new(pictograms: Vec<Pictogram>, page_size: usize) -> Self {
        let catalog = Catalog::new(pictograms);
        let filter = Filter::default();
        let available = catalog.visible(filter, page_size);
        Self {
            sentence: Sentence::new(),
            available,
            catalog,
            filter,
            page_size,
        }
    }

    fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self.available = self.catalog.visible(filter, self.page_size);
        self
    }

    fn refresh_view(mut self) -> Self {
        self.available = self.catalog.visible(self.filter, self.page_size);
        self
    }
}

/// User and collaborator events the board reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// A tile was tapped: append it and surface the suggested next category.
    TileTapped(Pictogram),
    /// A tile was long-pressed: toggle its favorite flag.
    TileLongPressed {
        /// Id of the pictogram to toggle.
        id: String,
    },
    /// The remove control for a sentence token was tapped.
    RemoveTapped {
        /// Position of the token to remove (0 = first).
        index: usize,
    },
    /// A category was chosen in the selector (`None` = default view).
    CategoryChosen(Option<Category>),
    /// The favorites view was chosen.
    FavoritesChosen,
    /// The clear control was tapped.
    ClearTapped,
    /// The save control was tapped.
    SaveRequested,
    /// The storage collaborator pushed a fresh catalog.
    CatalogReplaced(Vec<Pictogram>),
}

/// Side effects for collaborators outside the core.
///
/// The reducer only describes what should happen; whether and how an effect
/// is persisted or surfaced to the user is the host's decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A favorite flag changed; carries the post-toggle value.
    FavoriteChanged {
        /// Id of the toggled pictogram.
        id: String,
        /// The new favorite value.
        favorite: bool,
    },
    /// A sentence was accepted for saving.
    SentenceSaved {
        /// Ids of the pictograms, in tap order.
        pictogram_ids: Vec<String>,
        /// The joined display text.
        text: String,
    },
    /// Save was requested on a sentence too short to persist.
    SaveRejected,
}

/// Applies one event to the board, returning the next snapshot and an
/// optional effect for the host.
#[must_use]
pub fn reduce(state: BoardState, event: BoardEvent) -> (BoardState, Option<Effect>) {
    match event {
        BoardEvent::TileTapped(pictogram) => {
            let mut next = state;
            next.sentence.append(pictogram);
            // A suggestion becomes the active category filter; no suggestion
            // leaves the view untouched.
            match suggest_next_category(&next.sentence) {
                Some(category) => (next.with_filter(Filter::Category(category)), None),
                None => (next, None),
            }
        }
        BoardEvent::TileLongPressed { id } => {
            let mut next = state;
            let effect = next
                .catalog
                .toggle_favorite(&id)
                .map(|favorite| Effect::FavoriteChanged { id, favorite });
            (next.refresh_view(), effect)
        }
        BoardEvent::RemoveTapped { index } => {
            // Removal never re-runs the suggestion engine.
            let mut next = state;
            next.sentence.remove_at(index);
            (next, None)
        }
        BoardEvent::CategoryChosen(category) => {
            let filter = category.map_or(Filter::MostUsed, Filter::Category);
            (state.with_filter(filter), None)
        }
        BoardEvent::FavoritesChosen => (state.with_filter(Filter::Favorites), None),
        BoardEvent::ClearTapped => {
            let mut next = state;
            next.sentence.clear();
            (next.with_filter(Filter::MostUsed), None)
        }
        BoardEvent::SaveRequested => {
            if state.sentence.can_save() {
                let effect = Effect::SentenceSaved {
                    pictogram_ids: state.sentence.token_ids(),
                    text: state.sentence.display_text(),
                };
                // A saved sentence is done: start the next one from the
                // default view, same as an explicit clear.
                let mut next = state;
                next.sentence.clear();
                (next.with_filter(Filter::MostUsed), Some(effect))
            } else {
                (state, Some(Effect::SaveRejected))
            }
        }
        BoardEvent::CatalogReplaced(pictograms) => {
            // The active filter survives replacement and is re-applied
            // against the new entries.
            let mut next = state;
            next.catalog.replace(pictograms);
            (next.refresh_view(), None)
        }
    }
}
