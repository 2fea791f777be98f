//! Pictogram Communication Board Library
//!
//! This library provides core functionality for the PictoComm application:
//! building sentences from pictogram tiles, predicting the next grammatical
//! category to surface, filtering the pictogram catalog, and persisting
//! catalogs and saved sentences.

// Module declarations
pub mod board;
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod pictogram_db;
pub mod storage;
pub mod tui;
