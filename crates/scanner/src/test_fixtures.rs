use autofilm_alist::{AlistError, RemoteFileSystem, RemoteListing};
use std::collections::HashMap;

/// In-memory remote filesystem for scanner tests
pub struct FakeFileSystem {
    base_path: String,
    dirs: HashMap<String, Vec<RemoteListing>>,
}

impl FakeFileSystem {
    pub fn new(base_path: &str) -> Self {
        Self {
            base_path: base_path.to_string(),
            dirs: HashMap::new(),
        }
    }

    pub fn dir(mut self, path: &str, subdirs: &[&str], files: &[&str]) -> Self {
        let mut children: Vec<RemoteListing> = subdirs
            .iter()
            .map(|name| RemoteListing { name: name.to_string(), is_dir: true, size: 0 })
            .collect();
        children.extend(
            files
                .iter()
                .map(|name| RemoteListing { name: name.to_string(), is_dir: false, size: 1 }),
        );
        self.dirs.insert(path.to_string(), children);
        self
    }
}

#[async_trait::async_trait]
impl RemoteFileSystem for FakeFileSystem {
    async fn list(&self, path: &str) -> Result<Vec<RemoteListing>, AlistError> {
        self.dirs.get(path).cloned().ok_or_else(|| AlistError::ApiError {
            endpoint: "/api/fs/list".to_string(),
            code: 500,
            message: format!("object not found: {}", path),
        })
    }

    fn public_url(&self, path: &str) -> Result<String, AlistError> {
        Ok(autofilm_utils::download_url("http://alist.local", path)?)
    }

    fn base_path(&self) -> &str {
        &self.base_path
    }
}
