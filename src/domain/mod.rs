//! Domain layer for stackcfg
//!
//! Core models, ports, and the error taxonomy. Nothing here touches the
//! filesystem or the process environment.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{ConfigError, ConfigResult};
