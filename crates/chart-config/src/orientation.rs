// File: crates/chart-config/src/orientation.rs
// Summary: X axis orientation of an XY chart.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Rotation angle in degrees applied to the chart.
    pub const fn angle(self) -> i32 {
        match self {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 90,
        }
    }
}
