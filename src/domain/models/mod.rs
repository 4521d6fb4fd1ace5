//! Domain models: identities, documents, raw values, and loader settings.

pub mod config;
pub mod document;
pub mod identity;
pub mod value;

pub use config::{DefaultsPlacement, Layout, LoaderSettings};
pub use document::{ConfigDocument, CONFIG_WRAPPER_KEY};
pub use identity::EnvironmentId;
pub use value::{RawValue, ValueType};
