//! Reference item catalog for cost comparisons.
//!
//! # Invariants
//! - Item names are unique, so distinct entries format to distinct strings.
//! - Every `unit_price` is strictly positive.

/// One everyday item used to make a cost relatable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonItem {
    pub singular: &'static str,
    pub plural: &'static str,
    /// Approximate USD price of one unit.
    pub unit_price: f64,
}

impl ComparisonItem {
    const fn new(singular: &'static str, plural: &'static str, unit_price: f64) -> Self {
        Self {
            singular,
            plural,
            unit_price,
        }
    }

    /// Picks the singular name for exactly one unit, plural otherwise.
    pub fn name_for(&self, quantity: u64) -> &'static str {
        if quantity == 1 {
            self.singular
        } else {
            self.plural
        }
    }
}

const CATALOG: &[ComparisonItem] = &[
    ComparisonItem::new("cup of coffee", "cups of coffee", 5.0),
    ComparisonItem::new("avocado toast", "avocado toasts", 12.0),
    ComparisonItem::new("large pizza", "large pizzas", 18.0),
    ComparisonItem::new("movie ticket", "movie tickets", 14.0),
    ComparisonItem::new("paperback book", "paperback books", 15.0),
    ComparisonItem::new("month of music streaming", "months of music streaming", 11.0),
    ComparisonItem::new("tank of gas", "tanks of gas", 55.0),
    ComparisonItem::new("pair of running shoes", "pairs of running shoes", 120.0),
    ComparisonItem::new("mechanical keyboard", "mechanical keyboards", 150.0),
    ComparisonItem::new("office chair", "office chairs", 350.0),
    ComparisonItem::new("laptop", "laptops", 1_200.0),
    ComparisonItem::new("round-trip flight", "round-trip flights", 450.0),
];

/// Returns the fixed reference catalog.
pub fn catalog() -> &'static [ComparisonItem] {
    CATALOG
}
