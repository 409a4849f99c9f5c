//! JSON shapes exchanged with the scrape backend.
//!
//! Decoding is deliberately forgiving about scalar types: ids may be numbers
//! or strings, display fields may be any scalar, and a timestamp that is not
//! a number decodes as absent rather than failing the whole list.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Envelope used by the list endpoints: `{ "result": [...] }`.
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope<T> {
    pub(crate) result: Option<Vec<T>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateTaskBody<'a> {
    pub(crate) www: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Integer(i64),
    Text(String),
}

impl WireId {
    pub fn into_string(self) -> String {
        match self {
            WireId::Integer(id) => id.to_string(),
            WireId::Text(id) => id,
        }
    }
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireId::Integer(id) => write!(f, "{id}"),
            WireId::Text(id) => f.write_str(id),
        }
    }
}

/// Task status as sent by the backend: a positional code from older
/// deployments or a symbolic name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WireStatus {
    Ordinal(i64),
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WireScalar {
    Integer(i64),
    Float(f64),
    Flag(bool),
    Text(String),
    Other(Value),
}

impl WireScalar {
    /// Display text for the scalar; structured values have none.
    pub fn into_text(self) -> Option<String> {
        match self {
            WireScalar::Integer(value) => Some(value.to_string()),
            WireScalar::Float(value) => Some(value.to_string()),
            WireScalar::Flag(value) => Some(value.to_string()),
            WireScalar::Text(value) => Some(value),
            WireScalar::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskRecord {
    pub id: WireId,
    #[serde(default)]
    pub www: Option<String>,
    #[serde(default)]
    pub status: Option<WireStatus>,
    #[serde(default, deserialize_with = "lenient_epoch")]
    pub date_created: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LeadRecord {
    pub id: WireId,
    #[serde(default)]
    pub www: Option<WireScalar>,
    #[serde(default)]
    pub name: Option<WireScalar>,
    #[serde(default)]
    pub rating: Option<WireScalar>,
    #[serde(default)]
    pub reviews: Option<WireScalar>,
    #[serde(default)]
    pub category: Option<WireScalar>,
    #[serde(default)]
    pub address: Option<WireScalar>,
    #[serde(default)]
    pub phone: Option<WireScalar>,
    #[serde(default, deserialize_with = "lenient_emails")]
    pub emails: Vec<String>,
}

fn lenient_epoch<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(epoch_from_value))
}

fn epoch_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|secs| secs.is_finite())
                .map(|secs| secs.trunc() as i64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_emails<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let emails = Option::<Vec<Option<String>>>::deserialize(deserializer)?;
    Ok(emails.into_iter().flatten().flatten().collect())
}
