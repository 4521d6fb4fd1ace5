//! Loader settings: configuration root, file naming and layout variant.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the source loader finds documents and how it reads stack names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoaderSettings {
    /// Root configuration directory holding one subdirectory per stage
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// File extension of every document, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Separator between stage and tenant in the stack name
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Where the defaults document lives and whether the stack document is mandatory
    #[serde(default)]
    pub layout: Layout,
}

fn default_root() -> PathBuf {
    PathBuf::from("customer_config")
}

fn default_extension() -> String {
    "yaml".to_string()
}

fn default_separator() -> String {
    "-".to_string()
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            root: default_root(),
            extension: default_extension(),
            separator: default_separator(),
            layout: Layout::default(),
        }
    }
}

/// Directory layout variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Layout {
    /// Placement of the defaults document
    #[serde(default)]
    pub defaults: DefaultsPlacement,

    /// File stem of the defaults document
    #[serde(default = "default_defaults_name")]
    pub defaults_name: String,

    /// Fail construction when `{root}/{stage}/{tenant}` is absent
    #[serde(default = "default_true")]
    pub require_stack_document: bool,
}

fn default_defaults_name() -> String {
    "defaults".to_string()
}

const fn default_true() -> bool {
    true
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            defaults: DefaultsPlacement::default(),
            defaults_name: default_defaults_name(),
            require_stack_document: default_true(),
        }
    }
}

/// Directory holding the defaults document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultsPlacement {
    /// `{root}/{defaults_name}.{ext}`
    #[default]
    Root,
    /// `{root}/{stage}/{defaults_name}.{ext}`
    Stage,
}
