//! Serde helpers for float fields.
//!
//! JSON has no literal for non-finite numbers, so `NaN` and the infinities
//! travel as the strings `"NaN"`, `"Infinity"` and `"-Infinity"`.

use std::{collections::BTreeMap, fmt};

use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

const NAN: &str = "NaN";
const INFINITY: &str = "Infinity";
const NEG_INFINITY: &str = "-Infinity";

struct WireFloat(f64);

impl Serialize for WireFloat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            value if value.is_finite() => serializer.serialize_f64(value),
            value if value.is_nan() => serializer.serialize_str(NAN),
            value if value > 0.0 => serializer.serialize_str(INFINITY),
            _ => serializer.serialize_str(NEG_INFINITY),
        }
    }
}

struct WireFloatVisitor;

impl<'de> Visitor<'de> for WireFloatVisitor {
    type Value = WireFloat;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, \"NaN\", \"Infinity\" or \"-Infinity\"")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(WireFloat(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(WireFloat(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(WireFloat(value as f64))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        match value {
            NAN => Ok(WireFloat(f64::NAN)),
            INFINITY => Ok(WireFloat(f64::INFINITY)),
            NEG_INFINITY => Ok(WireFloat(f64::NEG_INFINITY)),
            other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for WireFloat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(WireFloatVisitor)
    }
}

pub(crate) mod opt_float {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<f64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.map(WireFloat).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        let value = Option::<WireFloat>::deserialize(deserializer)?;
        Ok(value.map(|it| it.0))
    }
}

pub(crate) mod opt_float_map {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<BTreeMap<String, f64>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(map) => serializer.collect_map(map.iter().map(|(key, it)| (key, WireFloat(*it)))),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<BTreeMap<String, f64>>, D::Error> {
        let value = Option::<BTreeMap<String, WireFloat>>::deserialize(deserializer)?;
        Ok(value.map(|map| map.into_iter().map(|(key, it)| (key, it.0)).collect()))
    }
}
