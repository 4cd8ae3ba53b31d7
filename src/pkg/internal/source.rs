use std::path::{Path, PathBuf};

use crate::prelude::Result;

/// Supplies the raw text of one listing document, once per load.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileSource {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read(&self) -> Result<String> {
        tracing::debug!("reading listings from {}", self.path.display());
        let text = tokio::fs::read_to_string(&self.path).await?;
        Ok(text)
    }
}
