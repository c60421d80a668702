//! Query string serialization for list endpoints.
//!
//! A [`QueryParams`] is a flat, ordered list of string pairs. Values are
//! stringified the way a browser's `URLSearchParams` would: strings verbatim,
//! numbers and booleans via their JSON text, `null` as `"null"`.

use crate::executor::ClientError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Ordered key-value pairs rendered as `key=value&key=value`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair, keeping insertion order. Duplicate keys are kept.
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.pairs.push((key.into(), value.to_string()));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    /// Appends the pair only when `value` is present.
    pub fn push_opt<V: ToString>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Builds parameters from any value that serializes to a flat JSON object.
    ///
    /// Keys keep the order in which the value serializes them. `None`
    /// serializes to `null` and is forwarded as the string `"null"`, so
    /// filter structs should skip absent fields.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, ClientError> {
        Self::from_value(&serde_json::to_value(value)?)
    }

    /// Builds parameters from a JSON value.
    ///
    /// `null` yields an empty list. Any non-object value, or an object with
    /// array or object members, is rejected.
    pub fn from_value(value: &Value) -> Result<Self, ClientError> {
        let object = match value {
            Value::Null => return Ok(Self::new()),
            Value::Object(object) => object,
            other => {
                return Err(ClientError::query(
                    "",
                    format!("expected an object, got {}", json_kind(other)),
                ))
            }
        };

        let mut params = Self::new();
        for (key, value) in object {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => "null".to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(ClientError::query(
                        key.clone(),
                        format!("{} values cannot be encoded", json_kind(value)),
                    ))
                }
            };
            params.pairs.push((key.clone(), text));
        }
        Ok(params)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns the first value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encodes the pairs as `application/x-www-form-urlencoded`.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.push(key, value);
        }
        params
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
