// File: crates/chart-config/src/types.rs
// Summary: Shared constants (sentinel, text sizes, label counts).

/// Raw value reported for an unset minimum; an unset maximum reports `-UNSET`.
/// Contract: never a legitimate bound. Passing it to the matching setter clears the bound.
pub const UNSET: f64 = f64::MAX;

/// Default chart title text size.
pub const CHART_TITLE_TEXT_SIZE: f32 = 15.0;
/// Default axis title text size.
pub const AXIS_TITLE_TEXT_SIZE: f32 = 12.0;
/// Default text size of values drawn over chart points.
pub const CHART_VALUES_TEXT_SIZE: f32 = 9.0;
/// Default approximate number of labels per axis.
pub const LABEL_COUNT: i32 = 5;
