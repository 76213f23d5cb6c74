//! Random "this meeting cost N items" comparisons.
//!
//! # Invariants
//! - Non-positive or non-finite cost yields `"0 items"` / an empty list.
//! - Quantity is `max(1, floor(cost / unit_price))`.
//! - A list never repeats a catalog entry and never exceeds the requested
//!   count or the catalog size.

use crate::comparison::catalog::{catalog, ComparisonItem};
use rand::seq::index;

/// Number of comparisons produced when the caller does not choose.
pub const DEFAULT_COMPARISON_COUNT: usize = 3;

const ZERO_COMPARISON: &str = "0 items";

/// Formats one comparison for `cost` against `item`.
pub fn format_comparison(item: &ComparisonItem, cost: f64) -> String {
    let quantity = ((cost / item.unit_price).floor() as u64).max(1);
    format!("{quantity} {}", item.name_for(quantity))
}

/// Describes `cost` as a quantity of one randomly chosen catalog item.
pub fn generate_comparison(cost: f64) -> String {
    if !has_positive_cost(cost) {
        return ZERO_COMPARISON.to_string();
    }

    let items = catalog();
    let mut rng = rand::rng();
    match index::sample(&mut rng, items.len(), 1).into_iter().next() {
        Some(position) => format_comparison(&items[position], cost),
        None => ZERO_COMPARISON.to_string(),
    }
}

/// Describes `cost` against up to `count` distinct catalog items.
///
/// Items are drawn without replacement, so the result holds
/// `min(count, catalog size)` entries in no particular order.
pub fn generate_comparison_list(cost: f64, count: usize) -> Vec<String> {
    if !has_positive_cost(cost) {
        return Vec::new();
    }

    let items = catalog();
    let amount = count.min(items.len());
    let mut rng = rand::rng();
    index::sample(&mut rng, items.len(), amount)
        .into_iter()
        .map(|position| format_comparison(&items[position], cost))
        .collect()
}

fn has_positive_cost(cost: f64) -> bool {
    cost.is_finite() && cost > 0.0
}
