//! Service layer: loading, namespacing, layered resolution, typed access.

pub mod accessor;
pub mod namespace;
pub mod resolver;
pub mod source_loader;
pub mod stack_config;

pub use accessor::TypedAccess;
pub use namespace::{namespace, KEY_DELIMITER};
pub use resolver::{AmbientSource, DocumentSource, LayeredResolver, Resolution};
pub use source_loader::{LoadedDocuments, SourceLoader};
pub use stack_config::StackConfig;
