//! Serde glue for the nutrition API's decimal-string fields.
//!
//! Use as `#[serde(with = "decimal", default)]` on an `f64` field. Values
//! stay full-precision internally; rounding to 3 decimals happens only at
//! the serialization boundary, so repeated scaling passes do not accumulate
//! drift.

use serde::{Deserialize, Deserializer, Serializer};

/// Deserialize a numeric field leniently.
///
/// The upstream API serializes every quantity as a decimal string, but
/// fields can also arrive as bare numbers, empty strings, garbage text,
/// null, or be missing entirely. All of those degrade to 0.0 — a malformed
/// field must never fail a whole food.
pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(v)) => v,
        Some(Raw::Text(s)) => s.trim().parse().unwrap_or(0.0),
        None => 0.0,
    })
}

/// Serialize a quantity as a 3-decimal string, matching the wire format.
pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{value:.3}"))
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Holder {
        #[serde(with = "super", default)]
        value: f64,
    }

    #[test]
    fn test_accepts_strings_and_numbers() {
        let from_string: Holder = serde_json::from_str(r#"{"value": "12.5"}"#).unwrap();
        assert!((from_string.value - 12.5).abs() < 1e-9);

        let from_number: Holder = serde_json::from_str(r#"{"value": 12.5}"#).unwrap();
        assert!((from_number.value - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_degrades_to_zero() {
        for json in [
            r#"{"value": ""}"#,
            r#"{"value": "n/a"}"#,
            r#"{"value": null}"#,
            r#"{}"#,
        ] {
            let holder: Holder = serde_json::from_str(json).unwrap();
            assert_eq!(holder.value, 0.0, "input: {json}");
        }
    }

    #[test]
    fn test_three_decimal_output() {
        let holder = Holder { value: 1.23456 };
        let json = serde_json::to_string(&holder).unwrap();
        assert_eq!(json, r#"{"value":"1.235"}"#);
    }
}
