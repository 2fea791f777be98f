//! Sentence-construction and prediction core.
//!
//! Everything the board does between a key press and a rendered frame lives
//! here: the catalog with its view filters, the next-category suggestion
//! engine, and the pure reducer tying them together. The core is
//! single-threaded, synchronous, and free of I/O; hosts push resolved data
//! in and carry effects out.

pub mod catalog;
pub mod state;
pub mod suggestion;

pub use catalog::{Catalog, Filter};
pub use state::{reduce, BoardEvent, BoardState, Effect};
pub use suggestion::suggest_next_category;
