// File: crates/chart-config/src/labels.rs
// Summary: Custom X axis text labels keyed by exact X value.
// Notes:
// - Keys compare by bit pattern with NaN canonicalised: NaN equals NaN, 0.0 and -0.0 are distinct.
// - Persisted as a list sorted by X so JSON output is stable.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::float_repr;

/// One persisted label entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    #[serde(with = "float_repr")]
    pub x: f64,
    pub text: String,
}

/// Hashable X value. Every NaN maps to one key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct LabelKey(u64);

impl LabelKey {
    fn new(x: f64) -> Self {
        if x.is_nan() { Self(f64::NAN.to_bits()) } else { Self(x.to_bits()) }
    }

    fn value(self) -> f64 {
        f64::from_bits(self.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<TextLabel>", from = "Vec<TextLabel>")]
pub struct TextLabels {
    entries: HashMap<LabelKey, String>,
}

impl TextLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the label at `x`.
    pub fn insert(&mut self, x: f64, text: impl Into<String>) {
        self.entries.insert(LabelKey::new(x), text.into());
    }

    pub fn get(&self, x: f64) -> Option<&str> {
        self.entries.get(&LabelKey::new(x)).map(String::as_str)
    }

    pub fn remove(&mut self, x: f64) -> Option<String> {
        self.entries.remove(&LabelKey::new(x))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Owned copy of the registered X values, in no particular order.
    pub fn locations(&self) -> Vec<f64> {
        self.entries.keys().map(|k| k.value()).collect()
    }

    /// Entries ordered by X (IEEE total order: -0.0 before 0.0, NaN last).
    pub fn sorted(&self) -> Vec<TextLabel> {
        let mut out: Vec<TextLabel> = self
            .entries
            .iter()
            .map(|(k, text)| TextLabel { x: k.value(), text: text.clone() })
            .collect();
        out.sort_by(|a, b| a.x.total_cmp(&b.x));
        out
    }
}

impl From<TextLabels> for Vec<TextLabel> {
    fn from(labels: TextLabels) -> Self {
        labels.sorted()
    }
}

impl From<Vec<TextLabel>> for TextLabels {
    // Later duplicates win, same as repeated `insert`.
    fn from(list: Vec<TextLabel>) -> Self {
        let mut labels = TextLabels::new();
        for l in list {
            labels.insert(l.x, l.text);
        }
        labels
    }
}
