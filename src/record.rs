use crate::encoding::Encoding;
use crate::error::{Error, Result};
use crate::model::ModelFormat;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// How `decode` treats JSON that isn't shaped like an encoded record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Require `{"text": "<string>"}`; extra fields are ignored
    #[default]
    Strict,
    /// Accept any JSON value: bare strings are taken as-is, anything else
    /// becomes its compact JSON text
    Permissive,
}

/// A single piece of text with a JSON wire form and a prompt rendering
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRecord {
    text: String,
}

impl TextRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Encode as `{"text": "..."}`
    pub fn encode(&self) -> String {
        // Value's Display writes the string with standard JSON escaping
        format!("{{\"text\": {}}}", Value::from(self.text.as_str()))
    }

    /// Decode a JSON payload produced by `encode`
    pub fn decode(data: &str) -> Result<Self> {
        Self::decode_with(data, DecodePolicy::Strict)
    }

    pub fn decode_with(data: &str, policy: DecodePolicy) -> Result<Self> {
        let value: Value = serde_json::from_str(data)?;
        let text = match policy {
            DecodePolicy::Strict => strict_text(value)?,
            DecodePolicy::Permissive => permissive_text(value),
        };
        debug!("Decoded record ({} chars, {:?})", text.chars().count(), policy);
        Ok(Self { text })
    }

    /// Decode raw bytes in the named encoding, then the JSON inside them
    pub fn decode_bytes(data: &[u8], encoding: &str) -> Result<Self> {
        Self::decode_bytes_with(data, encoding, DecodePolicy::Strict)
    }

    /// `decode_bytes` with UTF-8
    pub fn decode_bytes_default(data: &[u8]) -> Result<Self> {
        Self::decode_bytes_in(data, Encoding::default(), DecodePolicy::Strict)
    }

    pub fn decode_bytes_with(data: &[u8], encoding: &str, policy: DecodePolicy) -> Result<Self> {
        Self::decode_bytes_in(data, encoding.parse()?, policy)
    }

    pub fn decode_bytes_in(data: &[u8], encoding: Encoding, policy: DecodePolicy) -> Result<Self> {
        let text = encoding.decode(data)?;
        Self::decode_with(&text, policy)
    }

    /// Render for the model format called `name` (case-insensitive)
    pub fn to_model(&self, name: &str) -> Result<String> {
        let format: ModelFormat = name.parse()?;
        self.render(format)
    }

    pub fn to_model_default(&self) -> Result<String> {
        self.render(ModelFormat::default())
    }

    pub fn render(&self, format: ModelFormat) -> Result<String> {
        format.render(&self.text)
    }
}

fn strict_text(value: Value) -> Result<String> {
    match value {
        Value::Object(mut map) => match map.remove("text") {
            Some(Value::String(text)) => Ok(text),
            Some(other) => Err(Error::Schema {
                found: format!("object with a \"text\" field of type {}", json_type(&other)),
            }),
            None => Err(Error::Schema {
                found: "object without a \"text\" field".to_string(),
            }),
        },
        other => Err(Error::Schema {
            found: json_type(&other).to_string(),
        }),
    }
}

fn permissive_text(value: Value) -> String {
    match value {
        Value::Object(mut map) => match map.remove("text") {
            Some(Value::String(text)) => text,
            Some(field) => {
                map.insert("text".to_string(), field);
                Value::Object(map).to_string()
            }
            None => Value::Object(map).to_string(),
        },
        Value::String(text) => text,
        other => other.to_string(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<String> for TextRecord {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for TextRecord {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl FromStr for TextRecord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl fmt::Display for TextRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
