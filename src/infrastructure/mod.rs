//! Infrastructure layer module
//!
//! Adapters that touch the outside world:
//! - Loader settings (figment: defaults, YAML file, environment)
//! - Ambient context read from the deployment engine's environment
//! - Logging infrastructure
//!
//! Implementations satisfy the port traits defined in the domain layer.

pub mod ambient;
pub mod config;
pub mod logging;
