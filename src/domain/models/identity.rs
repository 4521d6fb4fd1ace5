//! Environment identity parsed from the stack name.

use std::fmt;

use crate::domain::errors::{ConfigError, ConfigResult};

/// The `(stage, tenant)` pair a run is deployed for, e.g. `prod-ks123`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnvironmentId {
    stage: String,
    tenant: String,
}

impl EnvironmentId {
    /// Identity from parts already known to be valid.
    pub fn new(stage: impl Into<String>, tenant: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            tenant: tenant.into(),
        }
    }

    /// Split a stack name on `separator` into exactly two non-empty parts.
    pub fn parse(identity: &str, separator: &str) -> ConfigResult<Self> {
        let parts: Vec<&str> = identity.split(separator).collect();

        match parts.as_slice() {
            [stage, tenant] if !stage.is_empty() && !tenant.is_empty() => {
                Ok(Self::new(*stage, *tenant))
            }
            _ => Err(ConfigError::MalformedIdentity {
                identity: identity.to_string(),
                separator: separator.to_string(),
                parts: parts.len(),
            }),
        }
    }

    /// Stage (e.g. `prod`), the subdirectory under the root.
    pub fn stage(&self) -> &str {
        &self.stage
    }

    /// Tenant (e.g. `ks123`), the stack document stem.
    pub fn tenant(&self) -> &str {
        &self.tenant
    }
}

impl fmt::Display for EnvironmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.stage, self.tenant)
    }
}
