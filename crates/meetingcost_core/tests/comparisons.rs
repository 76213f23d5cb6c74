use meetingcost_core::comparison::catalog::catalog;
use meetingcost_core::{generate_comparison, generate_comparison_list};
use regex::Regex;
use std::collections::BTreeSet;

fn comparison_re() -> Regex {
    Regex::new(r"^\d+ .+$").unwrap()
}

fn quantity(comparison: &str) -> u64 {
    comparison
        .split_once(' ')
        .and_then(|(number, _)| number.parse().ok())
        .expect("comparison starts with a quantity")
}

#[test]
fn zero_or_negative_cost_is_zero_items() {
    assert_eq!(generate_comparison(0.0), "0 items");
    assert_eq!(generate_comparison(-10.0), "0 items");
    assert_eq!(generate_comparison(f64::NAN), "0 items");
}

#[test]
fn infinite_cost_has_no_comparison() {
    assert_eq!(generate_comparison(f64::INFINITY), "0 items");
    assert!(generate_comparison_list(f64::INFINITY, 3).is_empty());
}

#[test]
fn positive_cost_formats_quantity_and_item() {
    let re = comparison_re();
    for _ in 0..20 {
        let result = generate_comparison(100.0);
        assert!(re.is_match(&result), "unexpected format: {result}");
        assert_ne!(result, "0 items");
        assert!(quantity(&result) >= 1);
    }
}

#[test]
fn list_is_empty_for_zero_cost() {
    assert!(generate_comparison_list(0.0, 3).is_empty());
    assert!(generate_comparison_list(-5.0, 3).is_empty());
}

#[test]
fn list_respects_requested_count() {
    assert_eq!(generate_comparison_list(500.0, 3).len(), 3);
    assert_eq!(generate_comparison_list(500.0, 1).len(), 1);
}

#[test]
fn list_items_match_format_and_are_positive() {
    let re = comparison_re();
    for item in generate_comparison_list(1000.0, 3) {
        assert!(re.is_match(&item), "unexpected format: {item}");
        assert!(quantity(&item) > 0);
    }
}

#[test]
fn list_never_repeats_an_item() {
    for _ in 0..50 {
        let result = generate_comparison_list(10_000.0, 5);
        let unique = result.iter().collect::<BTreeSet<_>>();
        assert_eq!(unique.len(), result.len());
    }
}

#[test]
fn list_caps_at_catalog_size() {
    let result = generate_comparison_list(10_000.0, 1_000);
    assert_eq!(result.len(), catalog().len());
    let unique = result.iter().collect::<BTreeSet<_>>();
    assert_eq!(unique.len(), catalog().len());
}
