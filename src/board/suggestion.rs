//! Next-category prediction after every tile selection.
//!
//! After a pictogram is appended to the sentence, the engine decides which
//! category of tiles to surface next so the user finds the likely next word
//! with fewer taps. Three rule tiers run in order, first match wins:
//!
//! 1. word-specific rules on the just-appended token's text,
//! 2. contextual rules on the (previous category, last category) pair, with
//!    the last token's text as a secondary discriminator,
//! 3. a default successor map on the last token's category.
//!
//! The rules are plain lookup tables rather than branching code, so each
//! tier can be inspected and tested on its own. The engine is pure: it looks
//! at the last one or two tokens only, mutates nothing, and returns a value
//! for the reducer to apply.

use crate::models::{Category, Sentence};

/// Outcome of a contextual pair rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    /// Switch the board to this category.
    Suggest(Category),
    /// Deliberately keep the current view. This is a decision, not a miss:
    /// it stops resolution instead of falling through to the default map.
    Stay,
}

/// A contextual rule over the last two tokens.
struct PairRule {
    /// Category of the second-to-last token.
    previous: Category,
    /// Category of the last token.
    last: Category,
    /// Specific word of the last token (normalized); `None` is the pair's
    /// default row and matches any word.
    word: Option<&'static str>,
    decision: Decision,
}

/// Tier 1: words that imply a destination category regardless of context.
///
/// Movement and rest words lead to places; eating, drinking, playing and the
/// hunger/thirst states lead to things.
const WORD_RULES: &[(&str, Category)] = &[
    ("voy", Category::Place),
    ("ir al bano", Category::Place),
    ("ir al baño", Category::Place),
    ("dormir", Category::Place),
    ("comer", Category::Thing),
    ("beber", Category::Thing),
    ("hambre", Category::Thing),
    ("sed", Category::Thing),
    ("jugar", Category::Thing),
    ("ver", Category::Thing),
    ("escuchar", Category::Thing),
];

/// Tier 2: pair rules. Word rows precede their pair's default row; first
/// match wins. Pairs without a default row fall through to tier 3.
const PAIR_RULES: &[PairRule] = &[
    // PERSON + ACTION: where the action routes depends on the verb.
    PairRule {
        previous: Category::Person,
        last: Category::Action,
        word: Some("voy"),
        decision: Decision::Suggest(Category::Place),
    },
    PairRule {
        previous: Category::Person,
        last: Category::Action,
        word: Some("comer"),
        decision: Decision::Suggest(Category::Thing),
    },
    PairRule {
        previous: Category::Person,
        last: Category::Action,
        word: Some("beber"),
        decision: Decision::Suggest(Category::Thing),
    },
    PairRule {
        previous: Category::Person,
        last: Category::Action,
        word: Some("jugar"),
        decision: Decision::Suggest(Category::Thing),
    },
    PairRule {
        previous: Category::Person,
        last: Category::Action,
        word: Some("ver"),
        decision: Decision::Suggest(Category::Thing),
    },
    PairRule {
        previous: Category::Person,
        last: Category::Action,
        word: Some("escuchar"),
        decision: Decision::Suggest(Category::Thing),
    },
    PairRule {
        previous: Category::Person,
        last: Category::Action,
        word: None,
        decision: Decision::Suggest(Category::Thing),
    },
    // PERSON + QUALITY: needs route to things; emotional states deliberately
    // keep the current view. Quality words listed in neither group fall
    // through to the default map.
    PairRule {
        previous: Category::Person,
        last: Category::Quality,
        word: Some("hambre"),
        decision: Decision::Suggest(Category::Thing),
    },
    PairRule {
        previous: Category::Person,
        last: Category::Quality,
        word: Some("sed"),
        decision: Decision::Suggest(Category::Thing),
    },
    PairRule {
        previous: Category::Person,
        last: Category::Quality,
        word: Some("feliz"),
        decision: Decision::Stay,
    },
    PairRule {
        previous: Category::Person,
        last: Category::Quality,
        word: Some("triste"),
        decision: Decision::Stay,
    },
    PairRule {
        previous: Category::Person,
        last: Category::Quality,
        word: Some("enojado/a"),
        decision: Decision::Stay,
    },
    PairRule {
        previous: Category::Person,
        last: Category::Quality,
        word: Some("cansado/a"),
        decision: Decision::Stay,
    },
    // ACTION + THING / ACTION + PLACE: the core clause is complete, offer a
    // temporal qualifier.
    PairRule {
        previous: Category::Action,
        last: Category::Thing,
        word: None,
        decision: Decision::Suggest(Category::Time),
    },
    PairRule {
        previous: Category::Action,
        last: Category::Place,
        word: None,
        decision: Decision::Suggest(Category::Time),
    },
];

/// Tier 3: default successor per category, following natural Spanish
/// sentence order. `Time` has no successor: the sentence is complete.
const SUCCESSOR_RULES: &[(Category, Category)] = &[
    (Category::Person, Category::Action),
    (Category::Action, Category::Thing),
    (Category::Quality, Category::Thing),
    (Category::Thing, Category::Time),
    (Category::Place, Category::Time),
];

/// Normalizes a token text for lexicon lookup.
fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Tier-1 lookup on the just-appended token's text.
fn word_rule(word: &str) -> Option<Category> {
    WORD_RULES
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, cat)| *cat)
}

/// Tier-2 lookup on the (previous, last) category pair.
fn pair_rule(previous: Category, last: Category, word: &str) -> Option<Decision> {
    PAIR_RULES
        .iter()
        .find(|rule| {
            rule.previous == previous
                && rule.last == last
                && rule.word.is_none_or(|w| w == word)
        })
        .map(|rule| rule.decision)
}

/// Tier-3 lookup on the last token's category.
fn successor_rule(category: Category) -> Option<Category> {
    SUCCESSOR_RULES
        .iter()
        .find(|(from, _)| *from == category)
        .map(|(_, to)| *to)
}

/// Suggests the category to surface next, given the sentence so far.
///
/// Evaluated immediately after an append; only the last one or two tokens
/// are inspected. Returns `None` when no tier produces a decision or when a
/// contextual rule deliberately keeps the current view; either way the
/// caller leaves the active filter unchanged.
#[must_use]
pub fn suggest_next_category(sentence: &Sentence) -> Option<Category> {
    let last = sentence.last()?;
    let word = normalize(&last.text);

    if let Some(category) = word_rule(&word) {
        return Some(category);
    }

    if let Some(previous) = sentence.second_to_last() {
        if let Some(decision) = pair_rule(previous.category, last.category, &word) {
            return match decision {
                Decision::Suggest(category) => Some(category),
                Decision::Stay => None,
            };
        }
    }

    successor_rule(last.category)
}
