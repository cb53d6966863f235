//! Price suggestion policy.
//!
//! Derives candidate price points for one of our variants from the prices of
//! matched competitor variants. Pure, deterministic domain logic.

pub mod suggest;

pub use suggest::{PriceSuggestion, round2, suggest_prices};
