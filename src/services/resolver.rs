//! Layered resolver: first source in the chain holding a key wins.
//!
//! The standard chain is, highest precedence first:
//! 1. the stack-specific document
//! 2. the defaults document
//! 3. the ambient (CLI-provided) store

use std::sync::Arc;

use tracing::debug;

use super::source_loader::LoadedDocuments;
use crate::domain::models::{ConfigDocument, RawValue};
use crate::domain::ports::{AmbientContext, ConfigSource, SourceKind};

/// A document acting as one link of the chain.
pub struct DocumentSource {
    kind: SourceKind,
    document: ConfigDocument,
}

impl DocumentSource {
    /// Wrap `document` as the `kind` link.
    pub const fn new(kind: SourceKind, document: ConfigDocument) -> Self {
        Self { kind, document }
    }
}

impl ConfigSource for DocumentSource {
    fn kind(&self) -> SourceKind {
        self.kind
    }

    fn location(&self) -> String {
        self.document.path().map_or_else(
            || "<absent>".to_string(),
            |path| path.display().to_string(),
        )
    }

    fn lookup(&self, full_key: &str) -> Option<RawValue> {
        self.document.get(full_key).cloned()
    }
}

/// The host's CLI-provided store as the last link of the chain.
pub struct AmbientSource {
    context: Arc<dyn AmbientContext>,
}

impl AmbientSource {
    /// Read through `context` on every lookup.
    pub fn new(context: Arc<dyn AmbientContext>) -> Self {
        Self { context }
    }
}

impl ConfigSource for AmbientSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Ambient
    }

    fn location(&self) -> String {
        format!("ambient config for stack {}", self.context.stack())
    }

    fn lookup(&self, full_key: &str) -> Option<RawValue> {
        self.context.lookup(full_key)
    }
}

/// A resolved value and the link it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The stored value, uncoerced
    pub value: RawValue,
    /// Link that held it
    pub source: SourceKind,
}

/// Walks a fixed, ordered source chain.
pub struct LayeredResolver {
    chain: Vec<Box<dyn ConfigSource>>,
}

impl LayeredResolver {
    /// Chain in the given order; index 0 has the highest precedence.
    pub fn new(chain: Vec<Box<dyn ConfigSource>>) -> Self {
        Self { chain }
    }

    /// stack → defaults → ambient
    pub fn standard(documents: LoadedDocuments, context: Arc<dyn AmbientContext>) -> Self {
        Self::new(vec![
            Box::new(DocumentSource::new(SourceKind::Stack, documents.stack)),
            Box::new(DocumentSource::new(SourceKind::Defaults, documents.defaults)),
            Box::new(AmbientSource::new(context)),
        ])
    }

    /// Source kinds in precedence order.
    pub fn order(&self) -> Vec<SourceKind> {
        self.chain.iter().map(|source| source.kind()).collect()
    }

    /// Locations of every link, in chain order.
    pub fn locations(&self) -> Vec<(SourceKind, String)> {
        self.chain
            .iter()
            .map(|source| (source.kind(), source.location()))
            .collect()
    }

    /// First value for `full_key` along the chain, `None` if no link has it.
    pub fn resolve(&self, full_key: &str) -> Option<Resolution> {
        for source in &self.chain {
            if let Some(value) = source.lookup(full_key) {
                debug!(
                    key = full_key,
                    source = %source.kind(),
                    location = %source.location(),
                    "Retrieving key from configuration source"
                );
                return Some(Resolution {
                    value,
                    source: source.kind(),
                });
            }
        }

        debug!(key = full_key, "key not found in any configuration source");
        None
    }
}
