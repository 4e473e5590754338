use super::classifier::classify;
use super::errors::ScanError;
use super::models::{RemoteFile, RemoteScanner, ScannedEntry};
use super::walker::walk;
use autofilm_alist::RemoteFileSystem;
use autofilm_models::{Category, RemoteEntry};

impl RemoteScanner {
    /// Walks the remote tree and resolves URLs for every entry that has a
    /// category. Ignored files are dropped before any URL work.
    pub async fn scan(fs: &dyn RemoteFileSystem) -> Result<Vec<ScannedEntry>, ScanError> {
        let start = std::time::Instant::now();

        let files = walk(fs).await?;
        let total = files.len();

        let mut entries = Vec::with_capacity(total);
        for file in files {
            let category = classify(&file.name);
            if category == Category::Ignored {
                tracing::trace!("Ignoring {}", file.path);
                continue;
            }

            match Self::resolve(fs, file) {
                Ok(entry) => entries.push(ScannedEntry { entry, category }),
                Err(e) => tracing::warn!("{}", e),
            }
        }

        tracing::debug!(
            "Scanned '{}': {} candidate(s), {} kept in {:.2}s",
            fs.base_path(),
            total,
            entries.len(),
            start.elapsed().as_secs_f64()
        );

        Ok(entries)
    }

    /// Resolves the public URL and signing path of a remote file
    pub fn resolve(fs: &dyn RemoteFileSystem, file: RemoteFile) -> Result<RemoteEntry, ScanError> {
        let url = fs
            .public_url(&file.path)
            .map_err(|source| ScanError::UrlError { path: file.path.clone(), source })?;

        let resource_path = autofilm_utils::resource_path(&url)
            .map_err(|source| ScanError::SignPathError { path: file.path.clone(), source })?;

        Ok(RemoteEntry {
            name: file.name,
            remote_path: file.path,
            url,
            resource_path,
        })
    }
}
