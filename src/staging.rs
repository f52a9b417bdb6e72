use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::error::CleanupError;

/// A temporary file that is removed when dropped. Removal failures are logged
/// and otherwise ignored.
#[derive(Debug)]
pub struct StagedFile {
    path: PathBuf,
}

impl StagedFile {
    pub fn create(dir: Option<&Path>, prefix: &str, data: &[u8]) -> Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(prefix).suffix(".png");
        let mut file = match dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .context("failed creating staged file")?;
        file.write_all(data).context("failed writing staged file")?;
        file.flush()?;
        let (_, path) = file
            .keep()
            .map_err(|err| anyhow::anyhow!("failed keeping staged file: {}", err.error))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn remove(&self) -> Result<(), CleanupError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(CleanupError {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        match self.remove() {
            Ok(()) => debug!(path = %self.path.display(), "removed staged file"),
            Err(err) => warn!(error = %err, "staged file cleanup failed"),
        }
    }
}

/// The canvas and mask handed to the editing service for one request.
#[derive(Debug)]
pub struct StagedAssets {
    canvas: StagedFile,
    mask: StagedFile,
}

impl StagedAssets {
    pub fn stage(dir: Option<&Path>, canvas: &[u8], mask: &[u8]) -> Result<Self> {
        let canvas = StagedFile::create(dir, "canvas_", canvas)?;
        let mask = StagedFile::create(dir, "mask_", mask)?;
        Ok(Self { canvas, mask })
    }

    pub fn canvas_path(&self) -> &Path {
        self.canvas.path()
    }

    pub fn mask_path(&self) -> &Path {
        self.mask.path()
    }
}
