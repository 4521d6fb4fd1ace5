//! Flat configuration documents parsed from YAML files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value as YamlValue};

use super::value::RawValue;
use crate::domain::errors::{ConfigError, ConfigResult};

/// Reserved top-level key some documents are wrapped in.
pub const CONFIG_WRAPPER_KEY: &str = "config";

/// A flat key/value document loaded from one file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    path: Option<PathBuf>,
    entries: HashMap<String, RawValue>,
}

impl ConfigDocument {
    /// Document standing in for an optional file that does not exist.
    pub fn empty() -> Self {
        Self::default()
    }

    /// In-memory document without a backing file.
    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<RawValue>,
    {
        Self {
            path: None,
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse YAML `contents` read from `path`, unwrapping a top-level `config`
    /// mapping one level deep.
    pub fn parse(path: &Path, contents: &str) -> ConfigResult<Self> {
        let parse_error = |reason: String| ConfigError::DocumentParse {
            path: path.to_path_buf(),
            reason,
        };

        if contents.trim().is_empty() {
            return Ok(Self {
                path: Some(path.to_path_buf()),
                entries: HashMap::new(),
            });
        }

        let root: YamlValue =
            serde_yaml::from_str(contents).map_err(|e| parse_error(e.to_string()))?;

        let mut mapping = match root {
            YamlValue::Null => Mapping::new(),
            YamlValue::Mapping(m) => m,
            _ => return Err(parse_error("top-level value is not a mapping".to_string())),
        };

        if let Some(wrapped) = mapping.remove(CONFIG_WRAPPER_KEY) {
            mapping = match wrapped {
                YamlValue::Null => Mapping::new(),
                YamlValue::Mapping(m) => m,
                _ => {
                    return Err(parse_error(format!(
                        "'{CONFIG_WRAPPER_KEY}' section is not a mapping"
                    )))
                }
            };
        }

        let mut entries = HashMap::with_capacity(mapping.len());
        for (key, value) in mapping {
            let key = match key {
                YamlValue::String(s) => s,
                YamlValue::Number(n) => n.to_string(),
                YamlValue::Bool(b) => b.to_string(),
                other => return Err(parse_error(format!("unsupported key {other:?}"))),
            };
            let value = RawValue::from_yaml(value)
                .map_err(|reason| parse_error(format!("value of '{key}': {reason}")))?;
            if let Some(value) = value {
                entries.insert(key, value);
            }
        }

        Ok(Self {
            path: Some(path.to_path_buf()),
            entries,
        })
    }

    /// Value stored under a fully-qualified key.
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.entries.get(key)
    }

    /// File the document was parsed from, `None` when absent or in-memory.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the document holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
