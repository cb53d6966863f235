use serde::{Deserialize, Serialize};

/// A price as it appears in storefront payloads: either a bare JSON number or
/// a decimal string (`"19.99"`). Shopify emits strings; hand-built payloads
/// often use numbers, so both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Number(f64),
    Text(String),
}

impl PriceValue {
    /// Parse to a finite, non-negative amount.
    ///
    /// Returns `None` for anything else: unparseable text, NaN/infinite
    /// numbers, negative values. Variants whose price fails this gate are
    /// excluded from matching without aborting the batch.
    pub fn as_amount(&self) -> Option<f64> {
        let value = match self {
            PriceValue::Number(n) => *n,
            PriceValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        (value.is_finite() && value >= 0.0).then_some(value)
    }
}

/// A purchasable sub-option of a product (size/color/...), carrying its own
/// price.
///
/// `price` is optional at the wire level: a variant without one is skipped
/// during matching, the same item-level treatment as an unparseable price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceValue>,
}

impl Variant {
    /// Parsed, validated price. See [`PriceValue::as_amount`].
    pub fn amount(&self) -> Option<f64> {
        self.price.as_ref()?.as_amount()
    }
}

/// One product listing. A product with zero variants contributes nothing to
/// matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    /// The freeform label used for similarity matching: product title and
    /// variant title joined by a space, trimmed. Either side may be empty.
    pub fn matching_label(&self, variant: &Variant) -> String {
        format!("{} {}", self.title, variant.title).trim().to_string()
    }
}

/// An ordered collection of products belonging to one store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Product>,
}
