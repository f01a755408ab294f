// File: crates/chart-config/tests/bounds.rs
// Purpose: Validate axis bound storage, is-set queries and range resolution.

use chart_config::{VisibleRange, XyRenderConfig, UNSET};

#[test]
fn setting_a_bound_marks_it_set() {
    for v in [0.0, -1.5, 42.0, 1e300, -1e300, f64::MIN_POSITIVE] {
        let mut cfg = XyRenderConfig::new();
        cfg.set_x_axis_min(v);
        cfg.set_x_axis_max(v);
        cfg.set_y_axis_min(v);
        cfg.set_y_axis_max(v);

        assert!(cfg.is_min_x_set());
        assert!(cfg.is_max_x_set());
        assert!(cfg.is_min_y_set());
        assert!(cfg.is_max_y_set());
        assert_eq!(cfg.range(), [v, v, v, v]);
    }
}

#[test]
fn sides_are_independent() {
    let mut cfg = XyRenderConfig::new();
    cfg.set_y_axis_max(10.0);

    assert!(cfg.is_max_y_set());
    assert!(!cfg.is_min_y_set());
    assert!(!cfg.is_min_x_set());
    assert!(!cfg.is_max_x_set());
}

#[test]
fn sentinel_value_leaves_bound_unset() {
    let mut cfg = XyRenderConfig::new();
    cfg.set_x_axis_min(3.0);
    cfg.set_x_axis_max(4.0);
    cfg.set_x_axis_min(UNSET);
    cfg.set_x_axis_max(-UNSET);

    assert!(!cfg.is_min_x_set());
    assert!(!cfg.is_max_x_set());
    assert_eq!(cfg.x_axis_min(), UNSET);
    assert_eq!(cfg.x_axis_max(), -UNSET);
}

#[test]
fn min_may_exceed_max() {
    let mut cfg = XyRenderConfig::new();
    cfg.set_x_axis_min(10.0);
    cfg.set_x_axis_max(-10.0);
    assert_eq!(cfg.x_axis_min(), 10.0);
    assert_eq!(cfg.x_axis_max(), -10.0);
}

#[test]
fn set_range_and_clear() {
    let mut cfg = XyRenderConfig::new();
    cfg.set_range([0.0, 24.0, -1.0, 1.0]);
    assert_eq!(cfg.range(), [0.0, 24.0, -1.0, 1.0]);

    cfg.clear_x_axis_min();
    cfg.clear_y_axis_max();
    assert!(!cfg.is_min_x_set());
    assert!(cfg.is_max_x_set());
    assert!(cfg.is_min_y_set());
    assert!(!cfg.is_max_y_set());

    cfg.set_range([UNSET, -UNSET, UNSET, -UNSET]);
    assert!(!cfg.is_max_x_set());
    assert!(!cfg.is_min_y_set());
}

#[test]
fn resolve_range_prefers_explicit_bounds() {
    let data = VisibleRange::from_points(&[(0.0, 2.0), (8.0, 6.0)]).expect("finite points");

    let mut cfg = XyRenderConfig::new();
    assert_eq!(cfg.resolve_range(data), data);

    cfg.set_x_axis_max(12.0);
    cfg.set_y_axis_min(0.0);
    let r = cfg.resolve_range(data);
    assert_eq!(r, VisibleRange::new(0.0, 12.0, 0.0, 6.0));
}
