//! Tests for hybrid axis-tick planning.
//!
//! These tests verify the weekly-then-monthly tick layout used for:
//! - The fine regime: one tick per week through the crossover
//! - The coarse regime: month ticks on the shared days-per-month grid
//! - Label switching, deduplication, and visual-weight hints
//!
//! ## Test Organization
//!
//! 1. **Fine Regime** - contiguity and positions of the week ticks
//! 2. **Coarse Regime** - month positions, crossover dedup, labels
//! 3. **Weights** - the advisory visual-weight classification
//! 4. **Edge Cases** - short horizons, degenerate ratios, custom crossovers

use growthstd::prelude::*;

fn default_ticks(max_age_days: i64) -> Vec<AxisTick<f64>> {
    plan_ticks(&AxisConfig::default(), max_age_days)
}

// ============================================================================
// Fine Regime Tests
// ============================================================================

/// Test that week ticks cover 0..=13 with no gaps or repeats.
#[test]
fn test_week_ticks_are_contiguous() {
    let ticks = default_ticks(1826);
    for (week, tick) in ticks.iter().take(14).enumerate() {
        assert_eq!(tick.position, (week as f64) * 7.0);
        assert_eq!(tick.label, week.to_string());
        assert_eq!(tick.weight, TickWeight::Normal);
    }
}

/// Test that positions are strictly increasing and never repeat.
#[test]
fn test_no_duplicate_positions() {
    let ticks = default_ticks(1826);
    for pair in ticks.windows(2) {
        assert!(
            pair[0].position < pair[1].position,
            "positions must be strictly increasing"
        );
    }
}

// ============================================================================
// Coarse Regime Tests
// ============================================================================

/// Test the full default layout: 14 week ticks plus months 4..=60.
///
/// Month 3 rounds onto day 91, the crossover, and must be dropped in
/// favor of the week-13 tick, so the coarse regime starts at month 4
/// (day 122) and ends at month 60 (day 1826).
#[test]
fn test_default_layout_counts_and_boundaries() {
    let ticks = default_ticks(1826);
    assert_eq!(ticks.len(), 14 + 57);

    let first_month = &ticks[14];
    assert_eq!(first_month.position, 122.0);
    assert_eq!(first_month.label, "4");

    let last = ticks.last().unwrap();
    assert_eq!(last.position, 1826.0);
    assert_eq!(last.label, "60");
}

/// Test that the crossover position appears once, labeled in weeks.
#[test]
fn test_crossover_position_appears_once_as_weeks() {
    let ticks = default_ticks(1826);
    let at_91: Vec<&AxisTick<f64>> = ticks.iter().filter(|t| t.position == 91.0).collect();
    assert_eq!(at_91.len(), 1);
    assert_eq!(at_91[0].label, "13");
    assert_eq!(at_91[0].weight, TickWeight::Normal);
}

/// Test that the label representation switches exactly at the crossover.
#[test]
fn test_labels_switch_at_crossover() {
    let ticks = default_ticks(1826);
    // Last fine tick counts weeks; first coarse tick counts months.
    assert_eq!(ticks[13].label, "13");
    assert_eq!(ticks[14].label, "4");
}

/// Test month positions against the shared ratio, including the half-day
/// rounding cases.
#[test]
fn test_month_positions_round_on_the_shared_grid() {
    let ticks = default_ticks(1826);
    for tick in ticks.iter().skip(14) {
        let month: i64 = tick.label.parse().unwrap();
        let expected = (month as f64 * DAYS_PER_MONTH).round();
        assert_eq!(tick.position, expected, "month {month}");
    }
}

// ============================================================================
// Weight Tests
// ============================================================================

/// Test the three-way weight classification.
///
/// Week ticks are Normal, month ticks Emphasized, and whole-year months
/// (12, 24, ...) Strong.
#[test]
fn test_tick_weights() {
    let ticks = default_ticks(1826);
    for tick in &ticks {
        let expected = if tick.position <= 91.0 {
            TickWeight::Normal
        } else {
            let month: i64 = tick.label.parse().unwrap();
            if month % 12 == 0 {
                TickWeight::Strong
            } else {
                TickWeight::Emphasized
            }
        };
        assert_eq!(tick.weight, expected, "position {}", tick.position);
    }

    let strong: Vec<String> = ticks
        .iter()
        .filter(|t| t.weight == TickWeight::Strong)
        .map(|t| t.label.clone())
        .collect();
    assert_eq!(strong, vec!["12", "24", "36", "48", "60"]);
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test that a horizon below the crossover yields week ticks only.
#[test]
fn test_horizon_below_crossover_yields_weeks_only() {
    let ticks = default_ticks(50);
    assert_eq!(ticks.len(), 14);
    assert!(ticks.iter().all(|t| t.weight == TickWeight::Normal));
}

/// Test a custom crossover at four weeks.
///
/// Months start at the first position strictly past day 28: month 1 at
/// day 30.
#[test]
fn test_custom_crossover() {
    let config = AxisConfig {
        crossover_weeks: 4,
        days_per_month: DAYS_PER_MONTH,
    };
    let ticks: Vec<AxisTick<f64>> = plan_ticks(&config, 100);

    let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["0", "1", "2", "3", "4", "1", "2", "3"]);

    let positions: Vec<f64> = ticks.iter().map(|t| t.position).collect();
    assert_eq!(positions, vec![0.0, 7.0, 14.0, 21.0, 28.0, 30.0, 61.0, 91.0]);
}

/// Test a crossover of zero weeks: a single week tick, then months from 1.
#[test]
fn test_zero_crossover() {
    let config = AxisConfig {
        crossover_weeks: 0,
        days_per_month: DAYS_PER_MONTH,
    };
    let ticks: Vec<AxisTick<f64>> = plan_ticks(&config, 92);

    let positions: Vec<f64> = ticks.iter().map(|t| t.position).collect();
    assert_eq!(positions, vec![0.0, 30.0, 61.0, 91.0]);
    assert_eq!(ticks[0].label, "0");
    assert_eq!(ticks[1].label, "1");
}

/// Test that a degenerate ratio degrades to week ticks instead of erroring.
///
/// The builder rejects such a ratio; the planner itself must still stay
/// total when called directly.
#[test]
fn test_degenerate_ratio_degrades_to_weeks() {
    for ratio in [f64::NAN, 0.0, -30.4375] {
        let config = AxisConfig {
            crossover_weeks: 13,
            days_per_month: ratio,
        };
        let ticks: Vec<AxisTick<f64>> = plan_ticks(&config, 1826);
        assert_eq!(ticks.len(), 14);
    }
}
