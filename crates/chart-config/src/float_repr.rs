// File: crates/chart-config/src/float_repr.rs
// Summary: serde `with` helpers writing non-finite floats as strings so JSON keeps them.
// Finite values stay plain numbers; NaN and infinities become "NaN", "inf" and "-inf".

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

struct Wire(f64);

impl Serialize for Wire {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        if v.is_nan() {
            s.serialize_str("NaN")
        } else if v == f64::INFINITY {
            s.serialize_str("inf")
        } else if v == f64::NEG_INFINITY {
            s.serialize_str("-inf")
        } else {
            s.serialize_f64(v)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(f64),
    Text(String),
}

impl Repr {
    fn into_f64(self) -> Result<f64, String> {
        match self {
            Repr::Number(v) => Ok(v),
            Repr::Text(t) => match t.as_str() {
                "NaN" => Ok(f64::NAN),
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                other => Err(format!(
                    "expected a number, \"NaN\", \"inf\" or \"-inf\", got {other:?}"
                )),
            },
        }
    }
}

pub fn serialize<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    Wire(*v).serialize(s)
}

pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Repr::deserialize(d)?.into_f64().map_err(D::Error::custom)
}

pub mod option {
    use serde::de::Error as _;

    use super::*;

    pub fn serialize<S: Serializer>(v: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
        match v {
            Some(v) => s.serialize_some(&Wire(*v)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Option::<Repr>::deserialize(d)?
            .map(Repr::into_f64)
            .transpose()
            .map_err(D::Error::custom)
    }
}

/// Text sizes are `f32`; widening to `f64` and back is exact.
pub mod single {
    use super::*;

    pub fn serialize<S: Serializer>(v: &f32, s: S) -> Result<S::Ok, S::Error> {
        Wire(f64::from(*v)).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f32, D::Error> {
        super::deserialize(d).map(|v| v as f32)
    }
}
