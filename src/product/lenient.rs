//! Forgiving decoders for display fields. The upstream is not validated:
//! a missing, `null` or oddly typed value must not cost the whole page.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Number(f64),
    Text(String),
    Bool(bool),
    Other(IgnoredAny),
}

/// Numbers, numeric strings like `"10.00"`, or zero for anything else.
pub(crate) fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Number(value)) => value,
        Some(Loose::Text(text)) => text.trim().parse().unwrap_or_default(),
        Some(Loose::Bool(_) | Loose::Other(_)) | None => 0.0,
    })
}

/// Strings as they are, numbers and booleans in their text form, empty
/// for `null`, arrays and objects.
pub(crate) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Text(text)) => text,
        Some(Loose::Number(value)) => value.to_string(),
        Some(Loose::Bool(value)) => value.to_string(),
        Some(Loose::Other(_)) | None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Debug)]
    struct Sample {
        #[serde(default, deserialize_with = "number")]
        amount: f64,
        #[serde(default, deserialize_with = "text")]
        label: String,
    }

    fn sample(json: &str) -> Sample {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn numbers_accept_strings_and_gaps() {
        assert_eq!(sample(r#"{"amount": 10.5}"#).amount, 10.5);
        assert_eq!(sample(r#"{"amount": "10.00"}"#).amount, 10.0);
        assert_eq!(sample(r#"{"amount": "n/a"}"#).amount, 0.0);
        assert_eq!(sample(r#"{"amount": null}"#).amount, 0.0);
        assert_eq!(sample("{}").amount, 0.0);
    }

    #[test]
    fn text_accepts_numbers_and_gaps() {
        assert_eq!(sample(r#"{"label": "USD"}"#).label, "USD");
        assert_eq!(sample(r#"{"label": 42}"#).label, "42");
        assert_eq!(sample(r#"{"label": null}"#).label, "");
        assert_eq!(sample(r#"{"label": ["a"]}"#).label, "");
        assert_eq!(sample("{}").label, "");
    }
}
