// File: crates/chart-config/src/view.rs
// Visible axis ranges as seen by a renderer, before and after explicit bounds are applied.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleRange {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl VisibleRange {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    /// Data extents of `(x, y)` points, or `None` if no point is finite.
    pub fn from_points(points: &[(f64, f64)]) -> Option<Self> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for &(x, y) in points {
            if !x.is_finite() || !y.is_finite() { continue; }
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if !x_min.is_finite() || !y_min.is_finite() {
            return None;
        }
        Some(Self { x_min, x_max, y_min, y_max })
    }

    /// As `[x_min, x_max, y_min, y_max]`.
    pub const fn to_array(self) -> [f64; 4] {
        [self.x_min, self.x_max, self.y_min, self.y_max]
    }
}
