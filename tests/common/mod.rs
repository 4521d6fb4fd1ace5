//! Common test utilities for integration tests
//!
//! Builds customer configuration trees in temporary directories.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::sync::Arc;

use stackcfg::{LoaderSettings, StackConfig, StaticContext};
use tempfile::TempDir;

/// A temporary configuration root with files written relative to it.
pub struct ConfigTree {
    dir: TempDir,
}

impl ConfigTree {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn with_file(self, relative: &str, contents: &str) -> Self {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(path.parent().expect("file has a parent")).expect("create dirs");
        fs::write(&path, contents).expect("write fixture file");
        self
    }

    /// Create an empty directory where a file would normally be.
    pub fn with_dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.dir.path().join(relative)).expect("create dir");
        self
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn settings(&self) -> LoaderSettings {
        LoaderSettings {
            root: self.root().to_path_buf(),
            ..LoaderSettings::default()
        }
    }

    /// Facade for `bag` under `stack`, with an empty ambient store.
    pub fn open(&self, bag: &str, stack: &str) -> stackcfg::ConfigResult<StackConfig> {
        self.open_with(bag, StaticContext::new("web", stack))
    }

    pub fn open_with(
        &self,
        bag: &str,
        context: StaticContext,
    ) -> stackcfg::ConfigResult<StackConfig> {
        StackConfig::new(Some(bag), Arc::new(context), &self.settings())
    }
}
