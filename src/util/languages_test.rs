use super::*;

fn breakdown(entries: &[(&str, u64)]) -> Vec<(String, u64)> {
    entries
        .iter()
        .map(|(name, bytes)| ((*name).to_owned(), *bytes))
        .collect()
}

#[test]
fn threshold_is_inclusive_at_exactly_one_percent() {
    let display = displayed_languages(&breakdown(&[("A", 50), ("B", 49), ("C", 1)]));

    assert_eq!(display.shares.len(), 3);
    assert_eq!(display.shares[2].name, "C");
    assert!((display.shares[2].percentage - 1.0).abs() < 1e-9);
    assert_eq!(display.other_percentage, None);
}

#[test]
fn below_threshold_languages_fold_into_other() {
    // B sits at 0.5% and must disappear from the individual shares.
    let display = displayed_languages(&breakdown(&[("A", 199), ("B", 1)]));

    assert_eq!(display.shares.len(), 1);
    assert_eq!(display.shares[0].name, "A");
    let other = display.other_percentage.expect("other bucket present");
    assert!((other - 0.5).abs() < 1e-9);
}

#[test]
fn other_aggregates_every_small_language() {
    let display = displayed_languages(&breakdown(&[("Rust", 9910), ("Shell", 30), ("Make", 30), ("Nix", 30)]));

    assert_eq!(display.shares.len(), 1);
    let other = display.other_percentage.expect("other bucket present");
    assert!((other - 0.9).abs() < 1e-9);
}

#[test]
fn displayed_plus_other_sums_to_one_hundred() {
    let cases: &[&[(&str, u64)]] = &[
        &[("A", 50), ("B", 49), ("C", 1)],
        &[("A", 199), ("B", 1)],
        &[("A", 3), ("B", 5), ("C", 7), ("D", 1000), ("E", 92321)],
        &[("Only", 42)],
    ];
    for case in cases {
        let display = displayed_languages(&breakdown(case));
        let sum: f64 = display.shares.iter().map(|s| s.percentage).sum::<f64>()
            + display.other_percentage.unwrap_or(0.0);
        assert!((sum - 100.0).abs() < 1e-6, "sum was {sum}");
    }
}

#[test]
fn shares_keep_breakdown_order() {
    let display = displayed_languages(&breakdown(&[("Zig", 30), ("Ada", 50), ("C", 20)]));

    let names: Vec<&str> = display.shares.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Zig", "Ada", "C"]);
}

#[test]
fn empty_breakdown_yields_empty_display() {
    let display = displayed_languages(&[]);
    assert!(display.is_empty());
}

#[test]
fn all_zero_byte_counts_yield_empty_display() {
    let display = displayed_languages(&breakdown(&[("A", 0), ("B", 0)]));
    assert!(display.is_empty());
}

#[test]
fn share_label_rounds_to_two_decimals() {
    assert_eq!(share_label("Rust", 61.3789), "Rust: 61.38%");
    assert_eq!(share_label(OTHER_LABEL, 0.5), "Other: 0.50%");
}
