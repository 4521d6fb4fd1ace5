//! Layered loading of the loader settings themselves.

use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::LoaderSettings;
use crate::services::namespace::KEY_DELIMITER;

/// Project-local settings file, relative to the working directory.
pub const SETTINGS_FILE: &str = "stackcfg.yaml";

/// Prefix of environment variables overriding settings.
pub const ENV_PREFIX: &str = "STACKCFG_";

/// Settings validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    /// `extension` is empty.
    #[error("Document extension cannot be empty")]
    EmptyExtension,

    /// `separator` is empty.
    #[error("Stack name separator cannot be empty")]
    EmptySeparator,

    /// `separator` contains the bag/key delimiter.
    #[error("Stack name separator '{0}' cannot contain the key delimiter ':'")]
    SeparatorContainsDelimiter(String),

    /// `layout.defaults_name` is empty.
    #[error("Defaults document name cannot be empty")]
    EmptyDefaultsName,
}

/// Loader settings with hierarchical merging
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. ./stackcfg.yaml (optional)
    /// 3. Environment variables (STACKCFG_* prefix, `__` for nesting)
    pub fn load() -> Result<LoaderSettings> {
        Self::load_layered(SETTINGS_FILE)
    }

    /// Same as [`load`](Self::load) with an explicit settings file.
    pub fn load_layered(path: impl AsRef<Path>) -> Result<LoaderSettings> {
        let settings: LoaderSettings = Figment::new()
            .merge(Serialized::defaults(LoaderSettings::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract loader settings from figment")?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Load settings from a specific file, ignoring the environment
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<LoaderSettings> {
        let settings: LoaderSettings = Figment::new()
            .merge(Serialized::defaults(LoaderSettings::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load settings from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Validate settings
    pub fn validate(settings: &LoaderSettings) -> Result<(), SettingsError> {
        if settings.extension.is_empty() {
            return Err(SettingsError::EmptyExtension);
        }

        if settings.separator.is_empty() {
            return Err(SettingsError::EmptySeparator);
        }

        if settings.separator.contains(KEY_DELIMITER) {
            return Err(SettingsError::SeparatorContainsDelimiter(
                settings.separator.clone(),
            ));
        }

        if settings.layout.defaults_name.is_empty() {
            return Err(SettingsError::EmptyDefaultsName);
        }

        Ok(())
    }
}
