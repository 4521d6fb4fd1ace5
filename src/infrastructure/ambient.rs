//! Ambient context adapters
//!
//! - `StaticContext`: in-memory context for tests and embedding hosts
//! - `ProcessContext`: context read from the deployment engine's environment

use std::collections::HashMap;

use serde_json::Value as JsonValue;

use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::models::RawValue;
use crate::domain::ports::AmbientContext;

/// Environment variable holding the project name.
pub const PROJECT_ENV: &str = "PULUMI_PROJECT";

/// Environment variable holding the stack name.
pub const STACK_ENV: &str = "PULUMI_STACK";

/// Environment variable holding the CLI-provided store as a JSON object.
pub const CONFIG_ENV: &str = "PULUMI_CONFIG";

/// Context assembled in code.
#[derive(Debug, Clone, Default)]
pub struct StaticContext {
    project: String,
    stack: String,
    values: HashMap<String, RawValue>,
}

impl StaticContext {
    /// Context with an empty CLI-provided store.
    pub fn new(project: impl Into<String>, stack: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            stack: stack.into(),
            values: HashMap::new(),
        }
    }

    /// Add a value to the CLI-provided store under a fully-qualified key.
    #[must_use]
    pub fn with_value(mut self, full_key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.values.insert(full_key.into(), value.into());
        self
    }
}

impl AmbientContext for StaticContext {
    fn project(&self) -> &str {
        &self.project
    }

    fn stack(&self) -> &str {
        &self.stack
    }

    fn lookup(&self, full_key: &str) -> Option<RawValue> {
        self.values.get(full_key).cloned()
    }
}

/// Context read once from the process environment.
#[derive(Debug, Clone)]
pub struct ProcessContext {
    inner: StaticContext,
}

impl ProcessContext {
    /// Read project, stack and store from `PULUMI_PROJECT`, `PULUMI_STACK`
    /// and `PULUMI_CONFIG`. The store variable is optional.
    pub fn from_env() -> ConfigResult<Self> {
        let project = required_var(PROJECT_ENV)?;
        let stack = required_var(STACK_ENV)?;
        let config = std::env::var(CONFIG_ENV).ok();

        Self::from_parts(project, stack, config.as_deref())
    }

    /// Build a context from already-read values; `config` is a JSON object.
    pub fn from_parts(
        project: impl Into<String>,
        stack: impl Into<String>,
        config: Option<&str>,
    ) -> ConfigResult<Self> {
        let mut inner = StaticContext::new(project, stack);

        if let Some(raw) = config.filter(|raw| !raw.trim().is_empty()) {
            let parsed: JsonValue = serde_json::from_str(raw)
                .map_err(|e| ConfigError::AmbientUnavailable(format!("{CONFIG_ENV}: {e}")))?;
            let JsonValue::Object(entries) = parsed else {
                return Err(ConfigError::AmbientUnavailable(format!(
                    "{CONFIG_ENV} is not a JSON object"
                )));
            };
            for (key, value) in entries {
                if let Some(value) = RawValue::from_json(value) {
                    inner.values.insert(key, value);
                }
            }
        }

        tracing::debug!(
            project = %inner.project,
            stack = %inner.stack,
            keys = inner.values.len(),
            "ambient context loaded"
        );

        Ok(Self { inner })
    }
}

fn required_var(name: &str) -> ConfigResult<String> {
    std::env::var(name).map_err(|_| ConfigError::AmbientUnavailable(format!("{name} is not set")))
}

impl AmbientContext for ProcessContext {
    fn project(&self) -> &str {
        self.inner.project()
    }

    fn stack(&self) -> &str {
        self.inner.stack()
    }

    fn lookup(&self, full_key: &str) -> Option<RawValue> {
        self.inner.lookup(full_key)
    }
}
