//! Fetching static configuration documents.
//!
//! The loader never caches: every call goes back to the [`ConfigSource`].

use crate::config::{SITE_CONFIG_FILE, SiteConfiguration};
use crate::error::ConfigError;
use crate::view::ViewDocument;
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Where configuration documents come from (HTTP in the browser, the file
/// system in the tester, memory in tests).
#[async_trait(?Send)]
pub trait ConfigSource {
    /// Fetch the raw text of `file`, relative to the data base path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Fetch`] or [`ConfigError::Timeout`] when the
    /// document cannot be retrieved.
    async fn fetch_text(&self, file: &str) -> Result<String, ConfigError>;
}

#[async_trait(?Send)]
impl<T: ConfigSource + ?Sized> ConfigSource for Rc<T> {
    async fn fetch_text(&self, file: &str) -> Result<String, ConfigError> {
        (**self).fetch_text(file).await
    }
}

#[derive(Debug, Clone)]
pub struct ConfigLoader<S> {
    source: S,
}

impl<S: ConfigSource> ConfigLoader<S> {
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Fetch and validate `site-config.json`.
    ///
    /// # Errors
    ///
    /// Propagates fetch failures and schema/duplicate-id validation errors.
    pub async fn load_site_config(&self) -> Result<SiteConfiguration, ConfigError> {
        let text = self.source.fetch_text(SITE_CONFIG_FILE).await?;
        let config = SiteConfiguration::from_json(&text)?;
        log::debug!(
            "loaded {SITE_CONFIG_FILE} with {} battle options",
            config.battle_options.len()
        );
        Ok(config)
    }

    /// Fetch the view document at `path`.
    ///
    /// # Errors
    ///
    /// Propagates fetch failures and envelope schema errors.
    pub async fn load_view_config(&self, path: &str) -> Result<ViewDocument, ConfigError> {
        let text = self.source.fetch_text(path).await?;
        ViewDocument::from_json(path, &text)
    }
}

/// In-memory [`ConfigSource`] that records every request it serves.
#[derive(Debug, Default, Clone)]
pub struct MemoryConfigSource {
    files: BTreeMap<String, String>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl MemoryConfigSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_file(mut self, name: impl Into<String>, body: impl Into<String>) -> Self {
        self.files.insert(name.into(), body.into());
        self
    }

    /// File names requested so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ConfigSource for MemoryConfigSource {
    async fn fetch_text(&self, file: &str) -> Result<String, ConfigError> {
        self.requests.borrow_mut().push(file.to_string());
        self.files.get(file).cloned().ok_or_else(|| ConfigError::Fetch {
            file: file.to_string(),
            message: "HTTP 404: Not Found".to_string(),
        })
    }
}
