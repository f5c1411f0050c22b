//! Hybrid axis-tick planning for the weekly-then-monthly time axis.
//!
//! ## Purpose
//!
//! This module lays out the ticks of a time axis that shows age in weeks up
//! to a crossover point and in months beyond it, the convention of the WHO
//! growth-chart grid. Positions stay in the raw day domain; only the labels
//! switch units, and they switch exactly at the crossover.
//!
//! ## Design notes
//!
//! * **Shared constants**: month positions come from the same days-per-month
//!   ratio the reference tables and record constructors use, so curve
//!   sampling and axis labeling cannot drift apart.
//! * **Fine tick wins**: a month position that rounds onto (or before) the
//!   crossover is dropped rather than duplicating a week tick.
//! * **Advisory weight**: each tick carries a visual-weight hint for the
//!   renderer; it is not part of the numeric contract.
//!
//! ## Invariants
//!
//! * Week ticks cover every integer week from 0 through the crossover,
//!   inclusive, with no gaps or repeats.
//! * No position appears twice; positions are strictly increasing.
//! * A horizon below the crossover yields week ticks only, never an error.
//!
//! ## Non-goals
//!
//! * This module does not render ticks or choose fonts, colors, or spacing.
//! * This module does not remap positions into a compressed hybrid
//!   coordinate; positions are plain day values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::{String, ToString};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::units::{
    months_to_days, weeks_to_days, DAYS_PER_MONTH, DEFAULT_CROSSOVER_WEEKS,
};

// ============================================================================
// Configuration
// ============================================================================

/// Months per year, for the strong-tick sub-classification.
const MONTHS_PER_YEAR: i64 = 12;

/// Configuration of the hybrid axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisConfig {
    /// Last week shown in the fine regime (inclusive).
    pub crossover_weeks: i64,

    /// Fine-to-coarse unit ratio, in days per month.
    pub days_per_month: f64,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            crossover_weeks: DEFAULT_CROSSOVER_WEEKS,
            days_per_month: DAYS_PER_MONTH,
        }
    }
}

// ============================================================================
// Tick Types
// ============================================================================

/// Visual-weight hint for one tick, advisory metadata for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickWeight {
    /// A week tick of the fine regime.
    Normal,

    /// A month tick of the coarse regime.
    Emphasized,

    /// A month tick on a whole-year boundary.
    Strong,
}

/// One axis tick: a position in the raw day domain and its display label.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick<T> {
    /// Position in days.
    pub position: T,

    /// Display label, the tick's own unit index (weeks before the crossover,
    /// months after).
    pub label: String,

    /// Visual-weight hint.
    pub weight: TickWeight,
}

// ============================================================================
// Planner
// ============================================================================

/// Lay out the ticks of the hybrid axis up to `max_age_days`.
///
/// Week ticks run from 0 through the crossover inclusive; month ticks run
/// from the first month strictly after the crossover through the horizon.
/// The ratio is expected to come validated from the catalog builder; a
/// degenerate ratio degrades to week ticks only.
pub fn plan_ticks<T: Float>(config: &AxisConfig, max_age_days: i64) -> Vec<AxisTick<T>> {
    let crossover_weeks = config.crossover_weeks.max(0);
    let crossover_days = weeks_to_days(crossover_weeks);

    let mut ticks: Vec<AxisTick<T>> = Vec::new();

    for week in 0..=crossover_weeks {
        ticks.push(AxisTick {
            position: T::from(weeks_to_days(week)).unwrap(),
            label: week.to_string(),
            weight: TickWeight::Normal,
        });
    }

    if !config.days_per_month.is_finite() || config.days_per_month <= 0.0 {
        return ticks;
    }

    // First month whose position can land strictly past the crossover.
    let mut month = (crossover_days as f64 / config.days_per_month).floor() as i64 + 1;
    if month < 1 {
        month = 1;
    }

    loop {
        let position = months_to_days(month, config.days_per_month);
        if position > max_age_days {
            break;
        }
        // Rounded onto or before the crossover: the week tick wins.
        if position > crossover_days {
            let weight = if month % MONTHS_PER_YEAR == 0 {
                TickWeight::Strong
            } else {
                TickWeight::Emphasized
            };
            ticks.push(AxisTick {
                position: T::from(position).unwrap(),
                label: month.to_string(),
                weight,
            });
        }
        month += 1;
    }

    ticks
}
