//! Text similarity matching for product listings.
//!
//! Decides whether two freeform listing labels refer to the same underlying
//! item, implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod similarity;

pub use similarity::{DEFAULT_THRESHOLD, is_similar, normalize, similarity, tokenize};
