//! CLI command handlers for PictoComm.
//!
//! This module provides headless, scriptable access to the board core for
//! automation and testing: catalog inspection, suggestion tracing, and the
//! saved-sentence history.

pub mod catalog;
pub mod sentences;
pub mod suggest;

// Re-export types used by main.rs and tests
pub use catalog::CatalogArgs;
pub use sentences::SentencesArgs;
pub use suggest::SuggestArgs;
