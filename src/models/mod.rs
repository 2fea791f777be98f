//! Data models for pictograms, categories, and sentences.
//!
//! This module contains the core data structures used throughout the
//! application. Models are designed to be independent of UI and business logic.

pub mod category;
pub mod pictogram;
pub mod rgb;
pub mod sentence;

// Re-export all model types
pub use category::Category;
pub use pictogram::Pictogram;
pub use rgb::RgbColor;
pub use sentence::Sentence;
