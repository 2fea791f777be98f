//! The sentence under construction: an ordered list of tapped pictograms.

use crate::models::Pictogram;

/// Ordered sequence of pictograms composed by the user, in tap order.
///
/// Duplicates are allowed and order is significant. The builder enforces no
/// length limit; that is a host concern. Derived values (`display_text`,
/// `can_play`, `can_save`) are recomputed on every read so they can never go
/// stale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    tokens: Vec<Pictogram>,
}

impl Sentence {
    /// Creates an empty sentence.
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Appends a pictogram at the end of the sentence.
    pub fn append(&mut self, pictogram: Pictogram) {
        self.tokens.push(pictogram);
    }

    /// Removes the token at `index`.
    ///
    /// An out-of-range index is a silent no-op: removing from a stale UI
    /// position must never panic or error.
    pub fn remove_at(&mut self, index: usize) {
        if index < self.tokens.len() {
            self.tokens.remove(index);
        }
    }

    /// Resets to an empty sentence.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// The tokens in tap order.
    #[must_use]
    pub fn tokens(&self) -> &[Pictogram] {
        &self.tokens
    }

    /// Number of tokens tapped so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no tokens have been tapped yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The last token, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Pictogram> {
        self.tokens.last()
    }

    /// The second-to-last token, if any.
    #[must_use]
    pub fn second_to_last(&self) -> Option<&Pictogram> {
        self.tokens.len().checked_sub(2).map(|i| &self.tokens[i])
    }

    /// Token texts joined with single spaces, in tap order.
    ///
    /// Example: `[Yo, Quiero, Helado]` -> `"Yo Quiero Helado"`.
    #[must_use]
    pub fn display_text(&self) -> String {
        self.tokens
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Ids of the tokens in tap order (what gets persisted on save).
    #[must_use]
    pub fn token_ids(&self) -> Vec<String> {
        self.tokens.iter().map(|p| p.id.clone()).collect()
    }

    /// Whether the sentence can be spoken aloud (at least one token).
    #[must_use]
    pub fn can_play(&self) -> bool {
        !self.tokens.is_empty()
    }

    /// Whether the sentence is meaningful enough to persist (at least two tokens).
    #[must_use]
    pub fn can_save(&self) -> bool {
        self.tokens.len() >= 2
    }
}
