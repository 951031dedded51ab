use async_trait::async_trait;
use pokefolio_core::{ConfigError, ConfigSource};
use std::path::{Path, PathBuf};

/// Reads config documents from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsConfigSource {
    root: PathBuf,
}

impl FsConfigSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait(?Send)]
impl ConfigSource for FsConfigSource {
    async fn fetch_text(&self, file: &str) -> Result<String, ConfigError> {
        let path = self.root.join(file.trim_start_matches('/'));
        log::debug!("reading {}", path.display());
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|err| ConfigError::Fetch {
                file: file.to_string(),
                message: format!("{}: {err}", path.display()),
            })
    }
}
