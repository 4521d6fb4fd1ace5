//! Raw stored values and typed-read targets.

use std::fmt;

use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

/// A loosely-typed value as stored by a configuration source.
///
/// Scalars keep their textual form; typed accessors coerce on every read.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Scalar in textual form
    Text(String),
    /// Mapping or sequence
    Structured(JsonValue),
}

impl RawValue {
    /// Convert a parsed YAML node. `Ok(None)` means the node is `null`.
    pub fn from_yaml(value: YamlValue) -> Result<Option<Self>, String> {
        match value {
            YamlValue::Null => Ok(None),
            YamlValue::Bool(b) => Ok(Some(Self::Text(b.to_string()))),
            YamlValue::Number(n) => Ok(Some(Self::Text(number_text(&n, n.as_f64(), n.is_f64())))),
            YamlValue::String(s) => Ok(Some(Self::Text(s))),
            YamlValue::Tagged(tagged) => Self::from_yaml(tagged.value),
            nested @ (YamlValue::Sequence(_) | YamlValue::Mapping(_)) => serde_json::to_value(nested)
                .map(|json| Some(Self::Structured(json)))
                .map_err(|e| e.to_string()),
        }
    }

    /// Convert a JSON node. `None` means the node is `null`.
    pub fn from_json(value: JsonValue) -> Option<Self> {
        match value {
            JsonValue::Null => None,
            JsonValue::Bool(b) => Some(Self::Text(b.to_string())),
            JsonValue::Number(n) => Some(Self::Text(number_text(&n, n.as_f64(), n.is_f64()))),
            JsonValue::String(s) => Some(Self::Text(s)),
            nested @ (JsonValue::Array(_) | JsonValue::Object(_)) => Some(Self::Structured(nested)),
        }
    }

    /// Text of a scalar value, `None` for structured values.
    pub const fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            Self::Structured(_) => None,
        }
    }
}

/// YAML spells non-finite floats `.inf`/`.nan`; keep Rust's spelling so
/// `f64::from_str` reads them back.
fn number_text(number: &impl fmt::Display, as_f64: Option<f64>, is_float: bool) -> String {
    match as_f64 {
        Some(f) if is_float && !f.is_finite() => f.to_string(),
        _ => number.to_string(),
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Structured(json) => write!(f, "{json}"),
        }
    }
}

/// Target type of a typed read, reported in coercion errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// `true` / `false`
    Bool,
    /// `i64`
    Int,
    /// `f64`
    Float,
    /// Text, structured values rendered as JSON
    String,
    /// Any deserializable structure
    Object,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "boolean",
            Self::Int => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Object => "object",
        };
        f.write_str(name)
    }
}
