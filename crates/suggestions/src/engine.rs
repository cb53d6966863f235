use serde::{Deserialize, Serialize};

use pricelens_catalog::{Catalog, Product};
use pricelens_matching::{DEFAULT_THRESHOLD, is_similar};
use pricelens_pricing::{PriceSuggestion, suggest_prices};

/// One tracked competitor: an identifier (typically the store hostname) plus
/// its public product catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorStore {
    pub store_identifier: String,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// A competitor variant that matched one of our variants, in the order it was
/// found scanning the competitor's catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedVariantDetail {
    pub competitor_product_title: String,
    pub competitor_variant_title: String,
    pub price: f64,
}

/// The result for one of our variants against one competitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSuggestion {
    pub title: String,
    pub variant_title: String,
    pub current_price: f64,
    pub suggested_prices: PriceSuggestion,
    pub matched_competitor_variants_from_this_competitor: Vec<MatchedVariantDetail>,
}

/// All suggestions derived from one competitor's catalog. Competitors with
/// zero matches are omitted from the output entirely, never emitted empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorSuggestionGroup {
    pub competitor_store_identifier: String,
    pub suggestions_for_our_products: Vec<ProductSuggestion>,
}

/// Compare our catalog against each competitor catalog and derive price
/// suggestions for every variant with at least one match.
///
/// `product_limit` truncates our product list and each competitor's product
/// list independently before matching, bounding worst-case work. Output order
/// follows input order throughout: competitors as supplied, our
/// products/variants as supplied, matched competitor variants in scan order
/// (product-major, variant-minor).
///
/// Variants with unparseable prices are skipped on our side; competitor
/// variants additionally require a strictly positive price. Neither aborts
/// the batch.
pub fn match_and_suggest(
    our: &Catalog,
    competitors: &[CompetitorStore],
    product_limit: Option<usize>,
) -> Vec<CompetitorSuggestionGroup> {
    let our_products = limited(&our.products, product_limit);

    let mut groups = Vec::new();
    for competitor in competitors {
        let competitor_products = limited(&competitor.products, product_limit);

        let mut suggestions = Vec::new();
        for product in our_products {
            for variant in &product.variants {
                let Some(our_price) = variant.amount() else {
                    continue;
                };
                let our_label = product.matching_label(variant);

                let mut matched_prices = Vec::new();
                let mut matched_details = Vec::new();
                for comp_product in competitor_products {
                    for comp_variant in &comp_product.variants {
                        let Some(price) = comp_variant.amount().filter(|p| *p > 0.0) else {
                            continue;
                        };
                        let comp_label = comp_product.matching_label(comp_variant);
                        if is_similar(&our_label, &comp_label, DEFAULT_THRESHOLD) {
                            matched_prices.push(price);
                            matched_details.push(MatchedVariantDetail {
                                competitor_product_title: comp_product.title.clone(),
                                competitor_variant_title: comp_variant.title.clone(),
                                price,
                            });
                        }
                    }
                }

                if !matched_details.is_empty() {
                    suggestions.push(ProductSuggestion {
                        title: product.title.clone(),
                        variant_title: variant.title.clone(),
                        current_price: our_price,
                        suggested_prices: suggest_prices(our_price, &matched_prices),
                        matched_competitor_variants_from_this_competitor: matched_details,
                    });
                }
            }
        }

        tracing::debug!(
            competitor = %competitor.store_identifier,
            suggestions = suggestions.len(),
            "competitor scan complete"
        );

        if !suggestions.is_empty() {
            groups.push(CompetitorSuggestionGroup {
                competitor_store_identifier: competitor.store_identifier.clone(),
                suggestions_for_our_products: suggestions,
            });
        }
    }
    groups
}

fn limited<T>(items: &[T], limit: Option<usize>) -> &[T] {
    match limit {
        Some(n) if n < items.len() => &items[..n],
        _ => items,
    }
}
