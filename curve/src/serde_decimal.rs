//! Serde adapters writing base field elements as decimal strings.
//!
//! Use with `#[serde(with = "curve::serde_decimal")]` on a `BaseField` field, or
//! `curve::serde_decimal::vec` on a `Vec<BaseField>`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::basefield::{from_decimal_str, to_decimal_string};
use crate::BaseField;

pub fn serialize<S: Serializer>(value: &BaseField, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_decimal_string(value))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BaseField, D::Error> {
    let s = String::deserialize(deserializer)?;
    from_decimal_str(&s).map_err(serde::de::Error::custom)
}

pub mod vec {
    use super::*;

    pub fn serialize<S: Serializer>(
        values: &[BaseField],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let strings: Vec<String> = values.iter().map(to_decimal_string).collect();
        strings.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<BaseField>, D::Error> {
        let strings = Vec::<String>::deserialize(deserializer)?;
        strings
            .iter()
            .map(|s| from_decimal_str(s).map_err(serde::de::Error::custom))
            .collect()
    }
}

/// Coordinate pair used as the serde representation of curve points.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) struct AffineCoords {
    #[serde(with = "crate::serde_decimal")]
    pub x: BaseField,
    #[serde(with = "crate::serde_decimal")]
    pub y: BaseField,
}
