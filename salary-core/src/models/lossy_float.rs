//! Serde adapter for `f64` fields that may hold `NaN` or an infinity.
//!
//! JSON has no literal for non-finite numbers, so they are written as
//! `null` and read back as `NaN`. Use with `#[serde(with = "lossy_float")]`.

use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(
    value: &f64,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_none()
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super")]
        value: f64,
    }

    #[test]
    fn finite_values_are_plain_numbers() {
        let json = serde_json::to_string(&Wrapper { value: 12.5 }).unwrap();

        assert_eq!(json, r#"{"value":12.5}"#);
    }

    #[test]
    fn nan_is_written_as_null_and_read_back_as_nan() {
        let json = serde_json::to_string(&Wrapper { value: f64::NAN }).unwrap();
        assert_eq!(json, r#"{"value":null}"#);

        let decoded: Wrapper = serde_json::from_str(&json).unwrap();
        assert!(decoded.value.is_nan());
    }

    #[test]
    fn infinity_degrades_to_nan() {
        let json = serde_json::to_string(&Wrapper {
            value: f64::INFINITY,
        })
        .unwrap();
        let decoded: Wrapper = serde_json::from_str(&json).unwrap();

        assert!(decoded.value.is_nan());
    }
}
