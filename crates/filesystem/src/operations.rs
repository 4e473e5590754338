use super::models::FileSystem;
use anyhow::Result;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tokio::fs;

impl FileSystem {
    /// Writes a pointer file, replacing any existing content
    pub async fn write_pointer(path: &Path, url: &str) -> Result<()> {
        Self::ensure_parent(path).await?;
        fs::write(path, url.as_bytes()).await?;
        tracing::debug!("    Wrote:   {} (pointer)", path.display());
        Ok(())
    }

    /// Writes downloaded bytes, replacing any existing file. Returns the byte count.
    pub async fn write_bytes(path: &Path, data: Bytes) -> Result<u64> {
        Self::ensure_parent(path).await?;
        let len = data.len() as u64;
        fs::write(path, &data).await?;
        tracing::debug!("    Wrote:   {} ({} bytes)", path.display(), len);
        Ok(len)
    }

    pub async fn ensure_parent(path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                Self::create_directory(parent).await
            }
            _ => Ok(()),
        }
    }

    async fn create_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            // create_dir_all tolerates a sibling task creating it first
            fs::create_dir_all(path).await?;
            tracing::debug!("    Created: {}", path.display());
        }
        Ok(())
    }

    pub fn get_absolute_path(path: &Path) -> Result<PathBuf> {
        let abs_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };
        Ok(abs_path)
    }
}
