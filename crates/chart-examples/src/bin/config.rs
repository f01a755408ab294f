// File: crates/chart-examples/src/bin/config.rs
// Summary: Builds a render configuration, saves it as JSON, reloads it and prints
// what a renderer would read.

use anyhow::{Context, Result};
use chart_config::{Orientation, VisibleRange, XyRenderConfig};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    // Output path from CLI, or a default under target/
    let out = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target/out/example_config.json"));

    let mut cfg = XyRenderConfig::builder()
        .chart_title("Sleep movement")
        .x_title("Hours since bedtime")
        .y_title("Activity")
        .y_range(0.0, 100.0)
        .x_labels(9)
        .orientation(Orientation::Horizontal)
        .build();
    for (i, hh) in ["22:00", "00:00", "02:00", "04:00", "06:00"].iter().enumerate() {
        cfg.add_text_label((i * 2) as f64, *hh);
    }

    cfg.save(&out)
        .with_context(|| format!("failed to save config '{}'", out.display()))?;
    println!("Wrote {}", out.display());

    let loaded = XyRenderConfig::load(&out)
        .with_context(|| format!("failed to load config '{}'", out.display()))?;
    if loaded != cfg {
        anyhow::bail!("reloaded config differs from the saved one");
    }
    log::info!("round trip ok ({} text labels)", loaded.text_labels().len());

    let data = [(0.0, 12.0), (3.5, 64.0), (8.0, 30.0)];
    let extents = VisibleRange::from_points(&data).context("no finite data points")?;
    let [x_min, x_max, y_min, y_max] = loaded.resolve_range(extents).to_array();

    println!("title: {:?} ({} pt)", loaded.chart_title(), loaded.chart_title_text_size());
    println!(
        "axes: {:?} / {:?} ({} pt)",
        loaded.x_title(),
        loaded.y_title(),
        loaded.axis_title_text_size()
    );
    println!(
        "x: [{x_min}, {x_max}] (min set: {}, max set: {})",
        loaded.is_min_x_set(),
        loaded.is_max_x_set()
    );
    println!(
        "y: [{y_min}, {y_max}] (min set: {}, max set: {})",
        loaded.is_min_y_set(),
        loaded.is_max_y_set()
    );
    println!(
        "labels: ~{} x / ~{} y, rotation {} deg",
        loaded.x_labels(),
        loaded.y_labels(),
        loaded.orientation().angle()
    );

    let mut locations = loaded.x_text_label_locations();
    locations.sort_by(f64::total_cmp);
    for x in locations {
        println!("  x={x}: {}", loaded.x_text_label(x).unwrap_or_default());
    }
    Ok(())
}
