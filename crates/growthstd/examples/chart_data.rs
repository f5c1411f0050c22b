//! growthstd Chart Data Examples
//!
//! This example demonstrates the pieces a chart renderer consumes:
//! - Loading the catalog (with the built-in fallback control points)
//! - Scoring measurements and reading the normal-range band
//! - Generating the standard reference curves on the tick grid
//! - Hybrid weekly-then-monthly axis layout

use growthstd::prelude::*;

fn main() -> Result<(), GrowthError> {
    println!("{}", "=".repeat(80));
    println!("growthstd Chart Data Examples");
    println!("{}", "=".repeat(80));
    println!();

    let catalog = example_1_load_catalog()?;
    example_2_score_measurements(&catalog);
    example_3_axis_and_curves(&catalog);

    Ok(())
}

/// Example 1: Loading the Catalog
/// Builds a catalog and loads it once; here from the fallback control
/// points, where a real application hands over the full resampled series.
fn example_1_load_catalog() -> Result<ReferenceCatalog<f64>, GrowthError> {
    println!("Example 1: Loading the Catalog");
    println!("{}", "-".repeat(80));

    let mut catalog: ReferenceCatalog<f64> = Catalog::new()
        .max_age_days(1826)
        .crossover_weeks(13)
        .build()?;

    let summary = catalog.load(&fallback_points(Girl), &fallback_points(Boy))?;
    println!(
        "Loaded: girls {} accepted / {} rejected, boys {} accepted / {} rejected",
        summary.girls.accepted, summary.girls.rejected, summary.boys.accepted,
        summary.boys.rejected
    );

    println!();
    Ok(catalog)
}

/// Example 2: Scoring Measurements
/// Scores a short trajectory and prints each point's band.
fn example_2_score_measurements(catalog: &ReferenceCatalog<f64>) {
    println!("Example 2: Scoring Measurements");
    println!("{}", "-".repeat(80));

    let trajectory = [
        Measurement::new(0, 3.1),
        Measurement::new(28, 4.0),
        Measurement::new(91, 5.9),
        Measurement::new(365, 9.2),
    ];

    println!("{:>8} {:>10} {:>8} {:>14}", "Age (d)", "Weight", "Z", "Band");
    for m in &trajectory {
        match catalog.score_measurement(Girl, m) {
            Some(z) => {
                let band = ScoreBand::classify(z);
                println!("{:>8} {:>10.2} {:>8.2} {:>14?}", m.age_days, m.weight, z, band);
            }
            None => println!("{:>8} {:>10.2} {:>8} {:>14}", m.age_days, m.weight, "-", "no data"),
        }
    }

    println!();
}

/// Example 3: Axis Layout and Reference Curves
/// Lays out the hybrid axis and samples the standard curves on its grid.
fn example_3_axis_and_curves(catalog: &ReferenceCatalog<f64>) {
    println!("Example 3: Axis Layout and Reference Curves");
    println!("{}", "-".repeat(80));

    let ticks = catalog.ticks(1826);
    let weeks = ticks.iter().filter(|t| t.weight == TickWeight::Normal).count();
    println!(
        "{} ticks: {} week ticks, {} month ticks",
        ticks.len(),
        weeks,
        ticks.len() - weeks
    );

    let ages: Vec<f64> = ticks.iter().map(|t| t.position).collect();
    for z in STANDARD_CURVES {
        let curve = catalog.curve(Girl, z, &ages);
        let last = curve.last().expect("catalog is loaded");
        println!("Z {z:+.0}: {} samples, {:.2} kg at five years", curve.len(), last.value);
    }

    println!();
}
