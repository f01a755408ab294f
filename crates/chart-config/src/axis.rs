// File: crates/chart-config/src/axis.rs
// Summary: Optional axis range bounds with sentinel-compatible raw accessors.

use serde::{Deserialize, Serialize};

use crate::float_repr;
use crate::types::UNSET;

/// Explicit start/end of one axis range. Either side may be left to the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BoundsRepr")]
pub struct AxisBounds {
    #[serde(with = "float_repr::option")]
    min: Option<f64>,
    #[serde(with = "float_repr::option")]
    max: Option<f64>,
}

impl AxisBounds {
    /// Bounds with neither side set.
    pub const fn unset() -> Self {
        Self { min: None, max: None }
    }

    pub fn new(min: f64, max: f64) -> Self {
        let mut b = Self::unset();
        b.set_min(min);
        b.set_max(max);
        b
    }

    /// Store `min`; `UNSET` clears the start instead.
    pub fn set_min(&mut self, min: f64) {
        self.min = if min == UNSET { None } else { Some(min) };
    }

    /// Store `max`; `-UNSET` clears the end instead.
    pub fn set_max(&mut self, max: f64) {
        self.max = if max == -UNSET { None } else { Some(max) };
    }

    pub fn clear_min(&mut self) {
        self.min = None;
    }

    pub fn clear_max(&mut self) {
        self.max = None;
    }

    /// Range start, or `UNSET` when not set.
    pub fn min(&self) -> f64 {
        self.min.unwrap_or(UNSET)
    }

    /// Range end, or `-UNSET` when not set.
    pub fn max(&self) -> f64 {
        self.max.unwrap_or(-UNSET)
    }

    pub fn min_value(&self) -> Option<f64> {
        self.min
    }

    pub fn max_value(&self) -> Option<f64> {
        self.max
    }

    pub fn is_min_set(&self) -> bool {
        self.min.is_some()
    }

    pub fn is_max_set(&self) -> bool {
        self.max.is_some()
    }

    /// Replace the data extent `(lo, hi)` with whichever sides are set.
    /// No ordering check: an explicit min above the data max is returned as is.
    pub fn resolve(&self, lo: f64, hi: f64) -> (f64, f64) {
        (self.min.unwrap_or(lo), self.max.unwrap_or(hi))
    }
}

// Deserialized bounds go through the setters so a stored sentinel reads back as unset.
#[derive(Deserialize)]
struct BoundsRepr {
    #[serde(default, with = "float_repr::option")]
    min: Option<f64>,
    #[serde(default, with = "float_repr::option")]
    max: Option<f64>,
}

impl From<BoundsRepr> for AxisBounds {
    fn from(repr: BoundsRepr) -> Self {
        let mut b = AxisBounds::unset();
        if let Some(min) = repr.min { b.set_min(min); }
        if let Some(max) = repr.max { b.set_max(max); }
        b
    }
}
