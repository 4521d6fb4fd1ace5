//! Source chain port.

use std::fmt;

use crate::domain::models::RawValue;

/// Which link of the source chain produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// `{root}/{stage}/{tenant}.{ext}`
    Stack,
    /// The `defaults` document
    Defaults,
    /// The host's CLI-provided store
    Ambient,
}

impl SourceKind {
    /// Lowercase name used in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::Defaults => "defaults",
            Self::Ambient => "ambient",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One link in the source chain.
pub trait ConfigSource: Send + Sync {
    /// Position of this link in the standard chain.
    fn kind(&self) -> SourceKind;

    /// Human-readable location for diagnostics (a path, or the store name).
    fn location(&self) -> String;

    /// Return a copy of the value stored under `full_key`, if any.
    fn lookup(&self, full_key: &str) -> Option<RawValue>;
}
