//! Locates and parses the stack-specific and defaults documents.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::models::{ConfigDocument, DefaultsPlacement, EnvironmentId, LoaderSettings};

/// Documents loaded for one environment.
#[derive(Debug, Clone, Default)]
pub struct LoadedDocuments {
    /// Stack-specific document, empty when optional and absent
    pub stack: ConfigDocument,
    /// Defaults document, empty when absent
    pub defaults: ConfigDocument,
}

/// Reads the documents of one environment according to [`LoaderSettings`].
pub struct SourceLoader<'a> {
    settings: &'a LoaderSettings,
}

impl<'a> SourceLoader<'a> {
    /// Loader over `settings`.
    pub const fn new(settings: &'a LoaderSettings) -> Self {
        Self { settings }
    }

    /// `{root}/{stage}/{tenant}.{ext}`
    pub fn stack_path(&self, id: &EnvironmentId) -> PathBuf {
        self.settings
            .root
            .join(id.stage())
            .join(self.file_name(id.tenant()))
    }

    /// `{root}/{defaults}.{ext}` or `{root}/{stage}/{defaults}.{ext}`
    pub fn defaults_path(&self, id: &EnvironmentId) -> PathBuf {
        let dir = match self.settings.layout.defaults {
            DefaultsPlacement::Root => self.settings.root.clone(),
            DefaultsPlacement::Stage => self.settings.root.join(id.stage()),
        };
        dir.join(self.file_name(&self.settings.layout.defaults_name))
    }

    fn file_name(&self, stem: &str) -> String {
        format!("{stem}.{}", self.settings.extension)
    }

    /// Read both documents for `id`.
    ///
    /// A missing root or mandatory stack document is an error; a missing
    /// defaults document yields an empty one.
    pub fn load(&self, id: &EnvironmentId) -> ConfigResult<LoadedDocuments> {
        let root = &self.settings.root;
        if !root.is_dir() {
            return Err(ConfigError::MissingRootPath(root.clone()));
        }

        let stack_path = self.stack_path(id);
        let stack = match read_document(&stack_path)? {
            Some(doc) => doc,
            None if self.settings.layout.require_stack_document => {
                return Err(ConfigError::MissingMandatoryDocument(stack_path));
            }
            None => {
                debug!(path = %stack_path.display(), "optional stack configuration file absent");
                ConfigDocument::empty()
            }
        };

        let defaults_path = self.defaults_path(id);
        let defaults = read_document(&defaults_path)?.unwrap_or_else(|| {
            debug!(path = %defaults_path.display(), "defaults configuration file absent");
            ConfigDocument::empty()
        });

        Ok(LoadedDocuments { stack, defaults })
    }
}

/// `Ok(None)` when the file does not exist.
fn read_document(path: &Path) -> ConfigResult<Option<ConfigDocument>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::DocumentRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    debug!(path = %path.display(), "Loading configuration file");
    let document = ConfigDocument::parse(path, &contents)?;
    debug!(path = %path.display(), keys = document.len(), "configuration file loaded");

    Ok(Some(document))
}
