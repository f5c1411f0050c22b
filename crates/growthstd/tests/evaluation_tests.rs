//! Tests for score bands and reference-curve sampling.
//!
//! These tests verify the display-facing evaluation layer:
//! - Normal-range classification of Z-scores
//! - Constant-Z curve sampling over a table
//!
//! ## Test Organization
//!
//! 1. **Score Bands** - boundaries and the three-way split
//! 2. **Curve Sampling** - knot values, ordering between curves, skipping

use approx::assert_relative_eq;

use growthstd::prelude::*;

fn table() -> ReferenceTable<f64> {
    let records = [
        RawRecord::days(0.0, 0.35, 3.3, 0.14),
        RawRecord::days(30.0, 0.30, 4.5, 0.13),
        RawRecord::days(60.0, 0.25, 5.6, 0.125),
        RawRecord::days(91.0, 0.20, 6.4, 0.12),
    ];
    ReferenceTable::from_records(&records, DEFAULT_MAX_AGE_DAYS).unwrap()
}

// ============================================================================
// Score Band Tests
// ============================================================================

/// Test the band boundaries: -2 and +2 are still within the normal range.
#[test]
fn test_band_boundaries_are_inclusive() {
    assert_eq!(ScoreBand::classify(-2.0), ScoreBand::Normal);
    assert_eq!(ScoreBand::classify(2.0), ScoreBand::Normal);
    assert_eq!(ScoreBand::classify(0.0), ScoreBand::Normal);
}

/// Test classification outside the normal range.
#[test]
fn test_band_outside_normal_range() {
    assert_eq!(ScoreBand::classify(-2.001), ScoreBand::BelowNormal);
    assert_eq!(ScoreBand::classify(-3.5), ScoreBand::BelowNormal);
    assert_eq!(ScoreBand::classify(2.001), ScoreBand::AboveNormal);
    assert_eq!(ScoreBand::classify(4.0), ScoreBand::AboveNormal);
}

/// Test the is_normal convenience.
#[test]
fn test_is_normal() {
    assert!(ScoreBand::classify(1.9).is_normal());
    assert!(!ScoreBand::classify(2.1).is_normal());
    assert!(!ScoreBand::classify(-2.1).is_normal());
}

/// Test that the exported limit matches the classification threshold.
#[test]
fn test_normal_limit_constant() {
    assert_eq!(NORMAL_Z_LIMIT, 2.0);
    assert_eq!(ScoreBand::classify(NORMAL_Z_LIMIT), ScoreBand::Normal);
}

// ============================================================================
// Curve Sampling Tests
// ============================================================================

/// Test that the Z = 0 curve passes exactly through the table medians.
#[test]
fn test_median_curve_hits_the_knots() {
    let t = table();
    let ages = [0.0, 30.0, 60.0, 91.0];
    let curve = sample_curve(&t, 0.0, &ages);

    assert_eq!(curve.len(), 4);
    for (point, expected) in curve.iter().zip([3.3, 4.5, 5.6, 6.4]) {
        assert_relative_eq!(point.value, expected, max_relative = 1e-12);
    }
}

/// Test that higher-Z curves lie strictly above lower-Z curves.
#[test]
fn test_curves_are_ordered_by_score() {
    let t = table();
    let ages: Vec<f64> = (0..=91).map(|d| d as f64).collect();

    let lower = sample_curve(&t, -2.0, &ages);
    let median = sample_curve(&t, 0.0, &ages);
    let upper = sample_curve(&t, 2.0, &ages);

    for i in 0..ages.len() {
        assert!(lower[i].value < median[i].value);
        assert!(median[i].value < upper[i].value);
    }
}

/// Test that the median curve is monotone wherever M is.
#[test]
fn test_median_curve_is_monotone() {
    let t = table();
    let ages: Vec<f64> = (0..=91).map(|d| d as f64).collect();
    let curve = sample_curve(&t, 0.0, &ages);

    for pair in curve.windows(2) {
        assert!(pair[0].value <= pair[1].value);
    }
}

/// Test that unanswerable ages are skipped, not filled with placeholders.
#[test]
fn test_unanswerable_ages_are_skipped() {
    let t = table();
    let ages = [f64::NAN, 30.0, f64::INFINITY, 60.0];
    let curve = sample_curve(&t, 0.0, &ages);

    assert_eq!(curve.len(), 2);
    assert_eq!(curve[0].age_days, 30.0);
    assert_eq!(curve[1].age_days, 60.0);
}

/// Test that an empty table samples to an empty curve.
#[test]
fn test_empty_table_samples_to_empty_curve() {
    let t = ReferenceTable::<f64>::empty();
    assert!(sample_curve(&t, 0.0, &[0.0, 30.0]).is_empty());
}

/// Test the standard curve set a chart draws.
#[test]
fn test_standard_curve_set() {
    assert_eq!(STANDARD_CURVES.len(), 7);
    assert_eq!(STANDARD_CURVES[0], -3.0);
    assert_eq!(STANDARD_CURVES[3], 0.0);
    assert_eq!(STANDARD_CURVES[6], 3.0);
}
