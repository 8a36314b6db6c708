use super::Error;
use std::path::{Path, PathBuf};

/// A directory of uploaded song files.
#[derive(Clone, Debug)]
pub struct SongStore {
    root: PathBuf,
    media_base_url: String,
}

impl SongStore {
    pub async fn open(root: impl Into<PathBuf>, media_base_url: impl Into<String>) -> Result<Self, Error> {
        let root = root.into();
        tracing::info!("opening song store at {}", root.display());
        tokio::fs::create_dir_all(&root).await?;
        Ok(SongStore {
            root,
            media_base_url: media_base_url.into(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn media_base_url(&self) -> &str {
        &self.media_base_url
    }
}
