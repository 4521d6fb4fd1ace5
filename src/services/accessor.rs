//! Typed accessors with required/optional semantics.
//!
//! Raw values are coerced on every read; the stored value is never touched.

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use super::namespace::namespace;
use super::resolver::Resolution;
use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::models::{RawValue, ValueType};
use crate::domain::ports::SourceKind;

fn coercion_error(full_key: &str, raw: &RawValue, target: ValueType) -> ConfigError {
    tracing::debug!(key = full_key, value = %raw, target = %target, "configuration value failed coercion");
    ConfigError::TypeCoercion {
        key: full_key.to_string(),
        value: raw.to_string(),
        target,
    }
}

/// `true`/`false` in any letter case.
pub fn coerce_bool(full_key: &str, raw: &RawValue) -> ConfigResult<bool> {
    match raw.as_text() {
        Some(text) if text.eq_ignore_ascii_case("true") => Ok(true),
        Some(text) if text.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(coercion_error(full_key, raw, ValueType::Bool)),
    }
}

/// Trimmed text parsed as `i64`.
pub fn coerce_int(full_key: &str, raw: &RawValue) -> ConfigResult<i64> {
    raw.as_text()
        .and_then(|text| text.trim().parse::<i64>().ok())
        .ok_or_else(|| coercion_error(full_key, raw, ValueType::Int))
}

/// Trimmed text parsed as `f64`; `inf` and `NaN` are accepted.
pub fn coerce_float(full_key: &str, raw: &RawValue) -> ConfigResult<f64> {
    raw.as_text()
        .and_then(|text| text.trim().parse::<f64>().ok())
        .ok_or_else(|| coercion_error(full_key, raw, ValueType::Float))
}

/// Structured values render as compact JSON.
pub fn coerce_string(raw: &RawValue) -> String {
    raw.to_string()
}

/// Structured values deserialize directly; text is parsed as JSON.
pub fn coerce_object<T: DeserializeOwned>(full_key: &str, raw: &RawValue) -> ConfigResult<T> {
    let parsed = match raw {
        RawValue::Structured(json) => serde_json::from_value(json.clone()),
        RawValue::Text(text) => serde_json::from_str(text),
    };
    parsed.map_err(|_| coercion_error(full_key, raw, ValueType::Object))
}

/// Typed reads over a namespaced resolver.
///
/// Implementors supply the bag and the raw lookup; every `get_*` returns
/// `Ok(None)` for an absent key and every `require_*` turns that into
/// [`ConfigError::MissingKey`].
pub trait TypedAccess {
    /// Namespace prepended to every short key.
    fn bag(&self) -> &str;

    /// Resolve a fully-qualified key through the source chain.
    fn resolve_full_key(&self, full_key: &str) -> Option<Resolution>;

    /// `bag:key`
    fn full_key(&self, key: &str) -> String {
        namespace(self.bag(), key)
    }

    /// The stored value without coercion.
    fn get_raw(&self, key: &str) -> Option<RawValue> {
        self.resolve_full_key(&self.full_key(key))
            .map(|resolution| resolution.value)
    }

    /// Which link of the chain would satisfy `key`.
    fn source_of(&self, key: &str) -> Option<SourceKind> {
        self.resolve_full_key(&self.full_key(key))
            .map(|resolution| resolution.source)
    }

    /// String form of the value, `None` when absent.
    fn get_string(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.get_raw(key).map(|raw| coerce_string(&raw)))
    }

    /// Like [`get_string`](Self::get_string), but absence is an error.
    fn require_string(&self, key: &str) -> ConfigResult<String> {
        self.get_string(key)?.ok_or_else(|| self.missing(key))
    }

    /// Boolean value, `None` when absent.
    fn get_bool(&self, key: &str) -> ConfigResult<Option<bool>> {
        let full_key = self.full_key(key);
        self.resolve_full_key(&full_key)
            .map(|r| coerce_bool(&full_key, &r.value))
            .transpose()
    }

    /// Boolean value; absence is an error.
    fn require_bool(&self, key: &str) -> ConfigResult<bool> {
        self.get_bool(key)?.ok_or_else(|| self.missing(key))
    }

    /// Integer value, `None` when absent.
    fn get_int(&self, key: &str) -> ConfigResult<Option<i64>> {
        let full_key = self.full_key(key);
        self.resolve_full_key(&full_key)
            .map(|r| coerce_int(&full_key, &r.value))
            .transpose()
    }

    /// Integer value; absence is an error.
    fn require_int(&self, key: &str) -> ConfigResult<i64> {
        self.get_int(key)?.ok_or_else(|| self.missing(key))
    }

    /// Float value, `None` when absent.
    fn get_float(&self, key: &str) -> ConfigResult<Option<f64>> {
        let full_key = self.full_key(key);
        self.resolve_full_key(&full_key)
            .map(|r| coerce_float(&full_key, &r.value))
            .transpose()
    }

    /// Float value; absence is an error.
    fn require_float(&self, key: &str) -> ConfigResult<f64> {
        self.get_float(key)?.ok_or_else(|| self.missing(key))
    }

    /// Deserialize a structured value into any `T`, e.g. a tags map.
    fn get_object<T: DeserializeOwned>(&self, key: &str) -> ConfigResult<Option<T>> {
        let full_key = self.full_key(key);
        self.resolve_full_key(&full_key)
            .map(|r| coerce_object(&full_key, &r.value))
            .transpose()
    }

    /// Like [`get_object`](Self::get_object), but absence is an error.
    fn require_object<T: DeserializeOwned>(&self, key: &str) -> ConfigResult<T> {
        self.get_object(key)?.ok_or_else(|| self.missing(key))
    }

    /// Untyped JSON view of a structured value.
    fn get_json(&self, key: &str) -> ConfigResult<Option<JsonValue>> {
        self.get_object(key)
    }

    /// The error reported for an absent required key.
    fn missing(&self, key: &str) -> ConfigError {
        ConfigError::MissingKey(self.full_key(key))
    }
}
