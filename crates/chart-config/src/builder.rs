// File: crates/chart-config/src/builder.rs
// Summary: Builder producing a finished `XyRenderConfig` in one expression.

use std::sync::Arc;

use crate::axis::AxisBounds;
use crate::config::XyRenderConfig;
use crate::orientation::Orientation;

/// Builder for configuring a chart before handing it to a renderer.
#[derive(Clone, Debug, Default)]
pub struct XyRenderConfigBuilder {
    config: XyRenderConfig,
}

impl XyRenderConfigBuilder {
    pub(crate) fn from_config(config: XyRenderConfig) -> Self {
        Self { config }
    }

    pub fn chart_title(mut self, title: impl Into<String>) -> Self {
        self.config.set_chart_title(title);
        self
    }

    pub fn chart_title_text_size(mut self, size: f32) -> Self {
        self.config.set_chart_title_text_size(size);
        self
    }

    pub fn axis_title_text_size(mut self, size: f32) -> Self {
        self.config.set_axis_title_text_size(size);
        self
    }

    pub fn chart_values_text_size(mut self, size: f32) -> Self {
        self.config.set_chart_values_text_size(size);
        self
    }

    pub fn x_title(mut self, title: impl Into<String>) -> Self {
        self.config.set_x_title(title);
        self
    }

    pub fn y_title(mut self, title: impl Into<String>) -> Self {
        self.config.set_y_title(title);
        self
    }

    /// Set the X range start and end.
    pub fn x_range(mut self, min: f64, max: f64) -> Self {
        self.config.x_bounds = AxisBounds::new(min, max);
        self
    }

    /// Set the Y range start and end.
    pub fn y_range(mut self, min: f64, max: f64) -> Self {
        self.config.y_bounds = AxisBounds::new(min, max);
        self
    }

    pub fn x_axis_min(mut self, min: f64) -> Self {
        self.config.set_x_axis_min(min);
        self
    }

    pub fn x_axis_max(mut self, max: f64) -> Self {
        self.config.set_x_axis_max(max);
        self
    }

    pub fn y_axis_min(mut self, min: f64) -> Self {
        self.config.set_y_axis_min(min);
        self
    }

    pub fn y_axis_max(mut self, max: f64) -> Self {
        self.config.set_y_axis_max(max);
        self
    }

    pub fn x_labels(mut self, count: i32) -> Self {
        self.config.set_x_labels(count);
        self
    }

    pub fn y_labels(mut self, count: i32) -> Self {
        self.config.set_y_labels(count);
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.config.set_orientation(orientation);
        self
    }

    pub fn text_label(mut self, x: f64, text: impl Into<String>) -> Self {
        self.config.add_text_label(x, text);
        self
    }

    pub fn display_chart_values(mut self, display: bool) -> Self {
        self.config.set_display_chart_values(display);
        self
    }

    pub fn build(self) -> XyRenderConfig {
        self.config
    }

    /// Build straight into a shared read-only snapshot.
    pub fn build_shared(self) -> Arc<XyRenderConfig> {
        log::trace!("render config built as shared snapshot");
        Arc::new(self.config)
    }
}
