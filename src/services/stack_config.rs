//! Per-bag configuration facade.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use super::accessor::TypedAccess;
use super::resolver::{LayeredResolver, Resolution};
use super::source_loader::SourceLoader;
use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::models::{EnvironmentId, LoaderSettings};
use crate::domain::ports::{AmbientContext, SourceKind};
use crate::infrastructure::ambient::ProcessContext;
use crate::infrastructure::config::SettingsLoader;

/// Configuration for one bag, resolved across the stack document, the
/// defaults document and the ambient store.
///
/// Built once per bag per run. Documents are read eagerly and never change
/// afterwards.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use stackcfg::prelude::*;
///
/// let context = Arc::new(StaticContext::new("web", "prod-ks123"));
/// let ecs = StackConfig::new(Some("ecs"), context, &LoaderSettings::default())?;
/// let cpu = ecs.get_int("cpu")?;
/// # Ok::<(), stackcfg::ConfigError>(())
/// ```
pub struct StackConfig {
    bag: String,
    identity: EnvironmentId,
    resolver: LayeredResolver,
    document_paths: Vec<PathBuf>,
}

impl StackConfig {
    /// Build the facade for `bag`, defaulting to the context's project name.
    pub fn new(
        bag: Option<&str>,
        context: Arc<dyn AmbientContext>,
        settings: &LoaderSettings,
    ) -> ConfigResult<Self> {
        let bag = bag.map_or_else(|| context.project().to_string(), str::to_string);
        let identity = EnvironmentId::parse(context.stack(), &settings.separator)?;

        let documents = SourceLoader::new(settings).load(&identity)?;
        let document_paths = [documents.stack.path(), documents.defaults.path()]
            .into_iter()
            .flatten()
            .map(PathBuf::from)
            .collect();

        debug!(bag = %bag, environment = %identity, "configuration loaded for bag");

        Ok(Self {
            bag,
            identity,
            resolver: LayeredResolver::standard(documents, context),
            document_paths,
        })
    }

    /// Build from `stackcfg.yaml`/`STACKCFG_*` settings and the process
    /// environment of the deployment engine.
    pub fn from_env(bag: Option<&str>) -> ConfigResult<Self> {
        let settings = SettingsLoader::load()
            .map_err(|e| ConfigError::InvalidSettings(format!("{e:#}")))?;
        let context = ProcessContext::from_env()?;
        Self::new(bag, Arc::new(context), &settings)
    }

    /// The `(stage, tenant)` pair parsed from the stack name.
    pub const fn identity(&self) -> &EnvironmentId {
        &self.identity
    }

    /// Files that were actually read, stack document first.
    pub fn document_paths(&self) -> &[PathBuf] {
        &self.document_paths
    }

    /// Always stack, defaults, ambient.
    pub fn source_order(&self) -> Vec<SourceKind> {
        self.resolver.order()
    }
}

impl TypedAccess for StackConfig {
    fn bag(&self) -> &str {
        &self.bag
    }

    fn resolve_full_key(&self, full_key: &str) -> Option<Resolution> {
        self.resolver.resolve(full_key)
    }
}
