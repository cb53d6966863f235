//! Request-boundary entry point.
//!
//! Structural validation happens here, before any matching begins; a payload
//! that fails it is rejected whole. Once matching starts the batch always
//! completes: per-item data problems are handled by skipping, and anything
//! unexpected inside the engine is contained and reported as a generic
//! internal error rather than leaking an unstructured failure.

use std::panic::{AssertUnwindSafe, catch_unwind};

use serde::Deserialize;

use pricelens_catalog::Catalog;
use pricelens_core::{DomainError, DomainResult};

use crate::engine::{CompetitorStore, CompetitorSuggestionGroup, match_and_suggest};

#[derive(Debug, Deserialize)]
struct SuggestionRequest {
    our_data: Catalog,
    competitor_stores_data: Vec<CompetitorStore>,
    #[serde(default)]
    product_limit: Option<usize>,
}

/// Validate a raw request payload and run the matching pipeline.
///
/// A structurally invalid payload (missing `our_data`, missing or non-array
/// `competitor_stores_data`, type mismatches) yields a descriptive
/// [`DomainError::Validation`]. A structurally valid payload always yields a
/// success result, even when no competitor produced any match.
pub fn handle_request(body: serde_json::Value) -> DomainResult<Vec<CompetitorSuggestionGroup>> {
    validate_shape(&body)?;

    let request: SuggestionRequest = serde_json::from_value(body)
        .map_err(|e| DomainError::validation(format!("malformed request payload: {e}")))?;

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        match_and_suggest(
            &request.our_data,
            &request.competitor_stores_data,
            request.product_limit,
        )
    }));

    outcome.map_err(|payload| DomainError::internal(describe_panic(payload.as_ref())))
}

fn validate_shape(body: &serde_json::Value) -> DomainResult<()> {
    let Some(object) = body.as_object() else {
        return Err(DomainError::validation("request body must be a JSON object"));
    };
    match object.get("our_data") {
        None => {
            return Err(DomainError::validation(
                "missing our_data or competitor_stores_data in request body",
            ));
        }
        Some(v) if !v.is_object() => {
            return Err(DomainError::validation("our_data must be an object"));
        }
        Some(_) => {}
    }
    match object.get("competitor_stores_data") {
        None => {
            return Err(DomainError::validation(
                "missing our_data or competitor_stores_data in request body",
            ));
        }
        Some(v) if !v.is_array() => {
            return Err(DomainError::validation("competitor_stores_data must be an array"));
        }
        Some(_) => {}
    }
    Ok(())
}

/// Extract something readable from a panic payload; fall back to a fixed
/// generic message when nothing usable can be recovered.
fn describe_panic(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "an unexpected error occurred".to_string()
    }
}
