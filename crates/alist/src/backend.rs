use crate::{AlistError, RemoteListing};

/// Remote filesystem abstraction the crawler walks
#[async_trait::async_trait]
pub trait RemoteFileSystem: Send + Sync {
    /// List the direct children of a remote directory
    async fn list(&self, path: &str) -> Result<Vec<RemoteListing>, AlistError>;

    /// Public (unsigned) download URL for a remote file
    fn public_url(&self, path: &str) -> Result<String, AlistError>;

    /// Remote directory this session is rooted at
    fn base_path(&self) -> &str;
}
