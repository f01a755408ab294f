// File: crates/chart-config/src/config.rs
// Summary: XY chart render configuration: titles, text sizes, axis bounds, label counts,
// orientation, custom X labels and the value-display toggle.
// Notes:
// - Every accessor is total: setters store exactly what they are given, getters
//   return what was last stored. Range consistency (min < max) is the renderer's concern.
// - Bounds are optional; see `AxisBounds` for how the `UNSET` sentinel maps onto them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::axis::AxisBounds;
use crate::builder::XyRenderConfigBuilder;
use crate::float_repr;
use crate::labels::TextLabels;
use crate::orientation::Orientation;
use crate::types::{
    AXIS_TITLE_TEXT_SIZE, CHART_TITLE_TEXT_SIZE, CHART_VALUES_TEXT_SIZE, LABEL_COUNT,
};
use crate::view::VisibleRange;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct XyRenderConfig {
    pub(crate) chart_title: String,
    #[serde(with = "float_repr::single")]
    pub(crate) chart_title_text_size: f32,
    #[serde(with = "float_repr::single")]
    pub(crate) axis_title_text_size: f32,
    #[serde(with = "float_repr::single")]
    pub(crate) chart_values_text_size: f32,
    pub(crate) x_title: String,
    pub(crate) y_title: String,
    pub(crate) x_bounds: AxisBounds,
    pub(crate) y_bounds: AxisBounds,
    pub(crate) x_labels: i32,
    pub(crate) y_labels: i32,
    pub(crate) orientation: Orientation,
    pub(crate) x_text_labels: TextLabels,
    pub(crate) display_chart_values: bool,
}

impl Default for XyRenderConfig {
    fn default() -> Self {
        Self {
            chart_title: String::new(),
            chart_title_text_size: CHART_TITLE_TEXT_SIZE,
            axis_title_text_size: AXIS_TITLE_TEXT_SIZE,
            chart_values_text_size: CHART_VALUES_TEXT_SIZE,
            x_title: String::new(),
            y_title: String::new(),
            x_bounds: AxisBounds::unset(),
            y_bounds: AxisBounds::unset(),
            x_labels: LABEL_COUNT,
            y_labels: LABEL_COUNT,
            orientation: Orientation::Horizontal,
            x_text_labels: TextLabels::new(),
            display_chart_values: false,
        }
    }
}

impl XyRenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building an immutable configuration.
    pub fn builder() -> XyRenderConfigBuilder {
        XyRenderConfigBuilder::default()
    }

    /// Builder seeded with this configuration; `self` is left untouched.
    pub fn to_builder(&self) -> XyRenderConfigBuilder {
        XyRenderConfigBuilder::from_config(self.clone())
    }

    /// Freeze a copy for a renderer. Later changes to `self` are not visible through it.
    pub fn snapshot(&self) -> Arc<XyRenderConfig> {
        log::trace!("render config snapshot: title={:?}", self.chart_title);
        Arc::new(self.clone())
    }

    // ---- titles & text sizes ------------------------------------------------

    pub fn chart_title(&self) -> &str {
        &self.chart_title
    }

    pub fn set_chart_title(&mut self, title: impl Into<String>) {
        self.chart_title = title.into();
    }

    pub fn chart_title_text_size(&self) -> f32 {
        self.chart_title_text_size
    }

    pub fn set_chart_title_text_size(&mut self, size: f32) {
        self.chart_title_text_size = size;
    }

    pub fn axis_title_text_size(&self) -> f32 {
        self.axis_title_text_size
    }

    pub fn set_axis_title_text_size(&mut self, size: f32) {
        self.axis_title_text_size = size;
    }

    /// Text size of values drawn over chart points.
    pub fn chart_values_text_size(&self) -> f32 {
        self.chart_values_text_size
    }

    pub fn set_chart_values_text_size(&mut self, size: f32) {
        self.chart_values_text_size = size;
    }

    pub fn x_title(&self) -> &str {
        &self.x_title
    }

    pub fn set_x_title(&mut self, title: impl Into<String>) {
        self.x_title = title.into();
    }

    pub fn y_title(&self) -> &str {
        &self.y_title
    }

    pub fn set_y_title(&mut self, title: impl Into<String>) {
        self.y_title = title.into();
    }

    // ---- axis bounds ----------------------------------------------------------

    /// X range start; `UNSET` when not set.
    pub fn x_axis_min(&self) -> f64 {
        self.x_bounds.min()
    }

    pub fn set_x_axis_min(&mut self, min: f64) {
        self.x_bounds.set_min(min);
    }

    /// X range end; `-UNSET` when not set.
    pub fn x_axis_max(&self) -> f64 {
        self.x_bounds.max()
    }

    pub fn set_x_axis_max(&mut self, max: f64) {
        self.x_bounds.set_max(max);
    }

    /// Y range start; `UNSET` when not set.
    pub fn y_axis_min(&self) -> f64 {
        self.y_bounds.min()
    }

    pub fn set_y_axis_min(&mut self, min: f64) {
        self.y_bounds.set_min(min);
    }

    /// Y range end; `-UNSET` when not set.
    pub fn y_axis_max(&self) -> f64 {
        self.y_bounds.max()
    }

    pub fn set_y_axis_max(&mut self, max: f64) {
        self.y_bounds.set_max(max);
    }

    pub fn is_min_x_set(&self) -> bool {
        self.x_bounds.is_min_set()
    }

    pub fn is_max_x_set(&self) -> bool {
        self.x_bounds.is_max_set()
    }

    pub fn is_min_y_set(&self) -> bool {
        self.y_bounds.is_min_set()
    }

    pub fn is_max_y_set(&self) -> bool {
        self.y_bounds.is_max_set()
    }

    pub fn clear_x_axis_min(&mut self) {
        self.x_bounds.clear_min();
    }

    pub fn clear_x_axis_max(&mut self) {
        self.x_bounds.clear_max();
    }

    pub fn clear_y_axis_min(&mut self) {
        self.y_bounds.clear_min();
    }

    pub fn clear_y_axis_max(&mut self) {
        self.y_bounds.clear_max();
    }

    pub fn x_bounds(&self) -> AxisBounds {
        self.x_bounds
    }

    pub fn y_bounds(&self) -> AxisBounds {
        self.y_bounds
    }

    /// Set all four bounds from `[min_x, max_x, min_y, max_y]`.
    pub fn set_range(&mut self, range: [f64; 4]) {
        self.set_x_axis_min(range[0]);
        self.set_x_axis_max(range[1]);
        self.set_y_axis_min(range[2]);
        self.set_y_axis_max(range[3]);
    }

    /// Raw bounds as `[min_x, max_x, min_y, max_y]`, sentinels included.
    pub fn range(&self) -> [f64; 4] {
        [self.x_axis_min(), self.x_axis_max(), self.y_axis_min(), self.y_axis_max()]
    }

    /// Overlay explicitly set bounds on the data extents; unset sides keep the data value.
    pub fn resolve_range(&self, data: VisibleRange) -> VisibleRange {
        let (x_min, x_max) = self.x_bounds.resolve(data.x_min, data.x_max);
        let (y_min, y_max) = self.y_bounds.resolve(data.y_min, data.y_max);
        VisibleRange { x_min, x_max, y_min, y_max }
    }

    // ---- labels -------------------------------------------------------------------

    /// Approximate number of X axis labels. Not bounds-checked.
    pub fn x_labels(&self) -> i32 {
        self.x_labels
    }

    pub fn set_x_labels(&mut self, count: i32) {
        self.x_labels = count;
    }

    /// Approximate number of Y axis labels. Not bounds-checked.
    pub fn y_labels(&self) -> i32 {
        self.y_labels
    }

    pub fn set_y_labels(&mut self, count: i32) {
        self.y_labels = count;
    }

    /// Attach `text` to X value `x`, replacing any label already there.
    pub fn add_text_label(&mut self, x: f64, text: impl Into<String>) {
        self.x_text_labels.insert(x, text);
    }

    /// Label at exactly `x`. Lookup is by value equality, not tolerance.
    pub fn x_text_label(&self, x: f64) -> Option<&str> {
        self.x_text_labels.get(x)
    }

    /// Owned, unordered copy of every X value carrying a label.
    pub fn x_text_label_locations(&self) -> Vec<f64> {
        self.x_text_labels.locations()
    }

    pub fn remove_text_label(&mut self, x: f64) -> Option<String> {
        self.x_text_labels.remove(x)
    }

    pub fn clear_text_labels(&mut self) {
        self.x_text_labels.clear();
    }

    pub fn has_text_labels(&self) -> bool {
        !self.x_text_labels.is_empty()
    }

    pub fn text_labels(&self) -> &TextLabels {
        &self.x_text_labels
    }

    // ---- orientation & values -----------------------------------------------------

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Whether point values are drawn as text over the chart.
    pub fn is_display_chart_values(&self) -> bool {
        self.display_chart_values
    }

    pub fn set_display_chart_values(&mut self, display: bool) {
        self.display_chart_values = display;
    }
}
