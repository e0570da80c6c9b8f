#![allow(clippy::unwrap_used)]

use super::*;

fn rec(fields: &[&str]) -> Record {
    Record::new(fields.iter().map(|s| s.to_string()).collect())
}

fn sample() -> Vec<Record> {
    vec![
        rec(&["2024-01-01", "20.0", "Food", "lunch"]),
        rec(&["2024-01-02", "15.0", "Food", "dinner"]),
        rec(&["2024-01-03", "900", "Housing", "rent"]),
        rec(&["2024-01-04", "2.75", "Transportation", "bus"]),
    ]
}

// ── totals ────────────────────────────────────────────────────

#[test]
fn test_totals_has_every_category_for_empty_input() {
    let t = totals(&[]);
    assert_eq!(t.iter().count(), 7);
    for cat in Category::all() {
        assert_eq!(t.get(*cat), 0.0);
    }
    assert_eq!(t.skipped, 0);
}

#[test]
fn test_totals_has_every_category_for_one_category() {
    let t = totals(&[rec(&["2024-01-01", "5", "Shopping", "socks"])]);
    assert_eq!(t.iter().count(), 7);
    assert_eq!(t.get(Category::Shopping), 5.0);
    assert_eq!(t.get(Category::Food), 0.0);
}

#[test]
fn test_totals_end_to_end_scenario() {
    let records = vec![
        rec(&["2024-01-01", "20.0", "Food", "lunch"]),
        rec(&["2024-01-02", "15.0", "Food", "dinner"]),
    ];
    let t = totals(&records);
    assert_eq!(t.get(Category::Food), 35.0);
    for cat in Category::all().iter().filter(|c| **c != Category::Food) {
        assert_eq!(t.get(*cat), 0.0);
    }
}

#[test]
fn test_totals_sums_per_category() {
    let t = totals(&sample());
    assert_eq!(t.get(Category::Food), 35.0);
    assert_eq!(t.get(Category::Housing), 900.0);
    assert_eq!(t.get(Category::Transportation), 2.75);
    assert_eq!(t.grand_total(), 937.75);
    assert_eq!(t.max(), 900.0);
}

#[test]
fn test_totals_skips_non_numeric_amount() {
    let mut records = sample();
    records.push(rec(&["2024-01-05", "lots", "Food", "feast"]));
    let t = totals(&records);
    assert_eq!(t.get(Category::Food), 35.0);
    assert_eq!(t.skipped, 1);
}

#[test]
fn test_totals_skips_unknown_category() {
    let t = totals(&[
        rec(&["2024-01-01", "10", "Groceries", "milk"]),
        rec(&["2024-01-01", "10", "food", "lowercase"]),
        rec(&["2024-01-01", "1", "Other", "misc"]),
    ]);
    assert_eq!(t.iter().count(), 7);
    assert_eq!(t.get(Category::Other), 1.0);
    assert_eq!(t.grand_total(), 1.0);
    assert_eq!(t.skipped, 2);
}

#[test]
fn test_totals_skips_wrong_field_count() {
    let t = totals(&[
        rec(&["2024-01-01", "10", "Food"]),
        rec(&["2024-01-01"]),
        rec(&["2024-01-01", "10", "Food", "split", "desc"]),
        rec(&["2024-01-01", "4", "Food", "ok"]),
    ]);
    assert_eq!(t.get(Category::Food), 4.0);
    assert_eq!(t.skipped, 3);
}

#[test]
fn test_totals_get_by_name() {
    let t = totals(&sample());
    assert_eq!(t.get_by_name("Food"), 35.0);
    assert_eq!(t.get_by_name("Pets"), 0.0);
    assert_eq!(t.get_by_name("food"), 0.0);
}

#[test]
fn test_totals_iter_in_fixed_order() {
    let order: Vec<Category> = totals(&sample()).iter().map(|(c, _)| c).collect();
    assert_eq!(order, Category::all().to_vec());
}

// ── group_by_category ─────────────────────────────────────────

#[test]
fn test_group_preserves_insertion_order() {
    let records = sample();
    let groups = group_by_category(&records);
    let (_, food) = groups.iter().find(|(c, _)| *c == Category::Food).unwrap();
    let food: Vec<Option<&str>> = food.iter().map(|r| r.description()).collect();
    assert_eq!(food, vec![Some("lunch"), Some("dinner")]);
}

#[test]
fn test_group_iter_omits_empty_buckets() {
    let records = sample();
    let groups = group_by_category(&records);
    let shown: Vec<Category> = groups.iter().map(|(c, _)| c).collect();
    assert_eq!(
        shown,
        vec![Category::Food, Category::Housing, Category::Transportation]
    );
    assert!(groups.iter().all(|(c, _)| c != Category::Education));
}

#[test]
fn test_group_keeps_bad_amounts_but_skips_bad_categories() {
    let records = vec![
        rec(&["2024-01-01", "n/a", "Food", "mystery"]),
        rec(&["2024-01-01", "3", "Pets", "kibble"]),
        rec(&["short"]),
    ];
    let groups = group_by_category(&records);
    let shown: Vec<(Category, usize)> = groups
        .iter()
        .map(|(c, items)| (c, items.len()))
        .collect();
    assert_eq!(shown, vec![(Category::Food, 1)]);
    assert_eq!(groups.skipped, 2);
}

#[test]
fn test_group_empty_input() {
    let groups = group_by_category(&[]);
    assert!(groups.is_empty());
    assert_eq!(groups.iter().count(), 0);
}

#[test]
fn test_filter_by_category() {
    let records = sample();
    let housing = filter_by_category(&records, Category::Housing);
    assert_eq!(housing.len(), 1);
    assert_eq!(housing[0].description(), Some("rent"));
    assert!(filter_by_category(&records, Category::Education).is_empty());
}
