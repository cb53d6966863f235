//! Cross-store matching orchestration.
//!
//! Drives the full seller-catalog x competitor-catalog comparison: matches
//! variants by label similarity, feeds matched prices to the pricing policy,
//! and shapes the grouped-by-competitor result. The whole pipeline is
//! request-scoped and side-effect free.

pub mod engine;
pub mod request;

pub use engine::{
    CompetitorStore, CompetitorSuggestionGroup, MatchedVariantDetail, ProductSuggestion,
    match_and_suggest,
};
pub use request::handle_request;
