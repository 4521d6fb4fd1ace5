//! Port trait definitions
//!
//! - `AmbientContext`: host-owned project/stack identity and CLI-provided store
//! - `ConfigSource`: one link of the resolver's source chain

pub mod ambient;
pub mod source;

pub use ambient::AmbientContext;
pub use source::{ConfigSource, SourceKind};
