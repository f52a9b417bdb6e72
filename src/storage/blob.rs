use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;

/// Durable, name-addressed storage for original and generated images.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn save(&self, data: &[u8], name: &str) -> Result<PathBuf>;
    async fn exists(&self, name: &str) -> Result<bool>;
    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>>;
    /// URL under which `name` is served back to clients.
    fn public_url(&self, name: &str) -> String;
}

#[derive(Clone, Debug)]
pub struct LocalFileStorage {
    base_dir: PathBuf,
    base_url: String,
}

impl LocalFileStorage {
    pub fn new(base_dir: PathBuf, base_url: String) -> Self {
        Self { base_dir, base_url }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn resolve_path(&self, name: &str) -> PathBuf {
        let normalized = name.trim_start_matches('/');
        self.base_dir.join(Path::new(normalized))
    }
}

#[async_trait]
impl BlobStore for LocalFileStorage {
    async fn save(&self, data: &[u8], name: &str) -> Result<PathBuf> {
        let path = self.resolve_path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed creating {}", parent.display()))?;
        }
        fs::write(&path, data)
            .await
            .with_context(|| format!("failed writing {}", path.display()))?;
        Ok(path)
    }

    async fn exists(&self, name: &str) -> Result<bool> {
        let path = self.resolve_path(name);
        match fs::metadata(path).await {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>> {
        let path = self.resolve_path(name);
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn public_url(&self, name: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let name = name.trim_start_matches('/');
        format!("{base}/{name}")
    }
}
