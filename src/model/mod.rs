pub mod api;
pub mod contractor;
pub mod document;
pub mod project;
pub mod task;
pub mod team;

use serde::{Deserialize, Deserializer};

/// Accepts a JSON string or number and yields a `String`.
///
/// The upstream API is inconsistent about telephone fields: some endpoints
/// return them as strings, others as bare numbers.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(i64),
        Float(f64),
    }

    Ok(match Option::<StringOrNumber>::deserialize(deserializer)? {
        Some(StringOrNumber::String(value)) => value,
        Some(StringOrNumber::Number(value)) => value.to_string(),
        Some(StringOrNumber::Float(value)) => value.to_string(),
        None => String::new(),
    })
}

/// Accepts a JSON number, numeric string, or null and yields an `Option<f64>`.
///
/// `Orcamento_previsto` arrives as a number on the list endpoint but as a
/// string on the detail endpoint.
pub(crate) fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    Ok(match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(NumberOrString::Number(value)) => Some(value),
        Some(NumberOrString::String(value)) => value.trim().parse().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Lenient {
        #[serde(deserialize_with = "super::lenient_string", default)]
        phone: String,
        #[serde(deserialize_with = "super::lenient_decimal", default)]
        budget: Option<f64>,
    }

    #[test]
    fn lenient_fields_accept_strings_and_numbers() {
        let parsed: Lenient =
            serde_json::from_str(r#"{"phone": 11987654321, "budget": "50000.00"}"#).unwrap();
        assert_eq!(parsed.phone, "11987654321");
        assert_eq!(parsed.budget, Some(50000.0));

        let parsed: Lenient =
            serde_json::from_str(r#"{"phone": "11987654321", "budget": 1234.5}"#).unwrap();
        assert_eq!(parsed.phone, "11987654321");
        assert_eq!(parsed.budget, Some(1234.5));
    }

    #[test]
    fn lenient_fields_tolerate_nulls() {
        let parsed: Lenient = serde_json::from_str(r#"{"phone": null, "budget": null}"#).unwrap();
        assert_eq!(parsed.phone, "");
        assert_eq!(parsed.budget, None);
    }
}
