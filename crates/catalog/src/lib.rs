//! Storefront catalog data model.
//!
//! This crate contains the product/variant shapes the engine consumes, as they
//! appear in public storefront JSON payloads. Catalogs are request-scoped and
//! never mutated by the engine.

pub mod product;

pub use product::{Catalog, PriceValue, Product, Variant};
