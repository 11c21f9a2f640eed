use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Response body of the analytics origin's `POST /company-data`.
///
/// Every field is optional and deserialization never fails on a field of
/// the wrong shape: a non-array where an array is expected becomes an
/// empty list, and array entries are kept as raw JSON so that malformed
/// entries can be dropped one index at a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAnalyticsPayload {
    #[serde(default, deserialize_with = "lenient_string")]
    pub company_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_array")]
    pub past_dates: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_array")]
    pub past_closings: Vec<Value>,

    #[serde(default, deserialize_with = "lenient_array")]
    pub closing_timestamps: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_array")]
    pub future_closings: Vec<Value>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub overall_sentiment: Option<f64>,

    #[serde(default, deserialize_with = "lenient_array")]
    pub links: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_array")]
    pub titles: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_array")]
    pub dates: Vec<Value>,
    /// `None` when the origin sent no per-article scores at all.
    #[serde(default, deserialize_with = "lenient_optional_array")]
    pub sentiments: Option<Vec<Value>>,

    #[serde(default, deserialize_with = "lenient_object")]
    pub fundamentals: Option<Map<String, Value>>,
}

impl RawAnalyticsPayload {
    /// Decode a cached or freshly fetched origin body.
    pub fn from_value(value: &Value) -> Self {
        // The lenient field decoders accept any shape, so this only falls
        // back when the body is not an object at all.
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?
        .as_f64()
        .filter(|v| v.is_finite()))
}

fn lenient_array<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => Vec::new(),
    })
}

fn lenient_optional_array<'de, D>(deserializer: D) -> Result<Option<Vec<Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(items),
        _ => None,
    })
}

fn lenient_object<'de, D>(deserializer: D) -> Result<Option<Map<String, Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => Some(map),
        _ => None,
    })
}
