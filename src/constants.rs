//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and default board dimensions.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "PictoComm";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "pictocomm";

/// Default number of pictograms shown in the board view when no filter is active.
pub const DEFAULT_PAGE_SIZE: usize = 20;
