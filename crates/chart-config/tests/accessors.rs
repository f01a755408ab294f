// File: crates/chart-config/tests/accessors.rs
// Purpose: Validate setter/getter pairs store exactly what they are given.

use chart_config::{Orientation, XyRenderConfig};

#[test]
fn titles_round_trip() {
    let mut cfg = XyRenderConfig::new();
    for s in ["", "Sleep score", "  spaced  ", "ünïcødé ✓", "line\nbreak"] {
        cfg.set_chart_title(s);
        cfg.set_x_title(s);
        cfg.set_y_title(s.to_string());
        assert_eq!(cfg.chart_title(), s);
        assert_eq!(cfg.x_title(), s);
        assert_eq!(cfg.y_title(), s);
    }
}

#[test]
fn text_sizes_are_independent() {
    let mut cfg = XyRenderConfig::new();
    cfg.set_chart_title_text_size(20.0);
    cfg.set_axis_title_text_size(14.5);
    cfg.set_chart_values_text_size(-3.0);

    assert_eq!(cfg.chart_title_text_size(), 20.0);
    assert_eq!(cfg.axis_title_text_size(), 14.5);
    assert_eq!(cfg.chart_values_text_size(), -3.0);
}

#[test]
fn label_counts_are_not_validated() {
    let mut cfg = XyRenderConfig::new();
    cfg.set_x_labels(0);
    cfg.set_y_labels(-7);
    assert_eq!(cfg.x_labels(), 0);
    assert_eq!(cfg.y_labels(), -7);

    cfg.set_x_labels(12);
    assert_eq!(cfg.x_labels(), 12);
}

#[test]
fn orientation_angle() {
    let mut cfg = XyRenderConfig::new();
    cfg.set_orientation(Orientation::Vertical);
    assert_eq!(cfg.orientation(), Orientation::Vertical);
    assert_eq!(cfg.orientation().angle(), 90);

    cfg.set_orientation(Orientation::Horizontal);
    assert_eq!(cfg.orientation().angle(), 0);
}

#[test]
fn display_values_toggle() {
    let mut cfg = XyRenderConfig::new();
    cfg.set_display_chart_values(true);
    assert!(cfg.is_display_chart_values());
    cfg.set_display_chart_values(false);
    assert!(!cfg.is_display_chart_values());
}
