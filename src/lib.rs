//! stackcfg - Layered configuration for multi-tenant deployment programs
//!
//! A deployment program runs against a stack named `{stage}-{tenant}`. For a
//! given bag (a namespace such as `ec2` or `vpc`) stackcfg resolves a key by
//! looking it up, in order, in:
//!
//! 1. `{root}/{stage}/{tenant}.yaml`
//! 2. the `defaults.yaml` document
//! 3. the CLI-provided store of the host deployment engine
//!
//! and coerces the first hit to the requested type.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, ports, and errors
//! - **Service Layer** (`services`): loader, resolver, typed accessors, facade
//! - **Infrastructure Layer** (`infrastructure`): settings, ambient context, logging
//!
//! # Example
//!
//! ```no_run
//! use stackcfg::prelude::*;
//!
//! let vpc = StackConfig::from_env(Some("vpc"))?;
//! let public = vpc.require_bool("is-public-facing")?;
//! let subnets: Option<Vec<String>> = vpc.get_object("subnet-ids")?;
//! # Ok::<(), stackcfg::ConfigError>(())
//! ```

pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{ConfigError, ConfigResult};
pub use domain::models::{
    ConfigDocument, DefaultsPlacement, EnvironmentId, Layout, LoaderSettings, RawValue, ValueType,
};
pub use domain::ports::{AmbientContext, ConfigSource, SourceKind};
pub use infrastructure::ambient::{ProcessContext, StaticContext};
pub use infrastructure::config::{SettingsError, SettingsLoader};
pub use services::{StackConfig, TypedAccess};

/// Everything a deployment program needs to read configuration.
pub mod prelude {
    pub use crate::domain::errors::{ConfigError, ConfigResult};
    pub use crate::domain::models::LoaderSettings;
    pub use crate::infrastructure::ambient::{ProcessContext, StaticContext};
    pub use crate::services::{StackConfig, TypedAccess};
}
