use super::errors::SyncError;
use super::models::{Materializer, Outcome, SkipReason};
use autofilm_config::OutputPolicy;
use autofilm_filesystem::FileSystem;
use autofilm_models::{Category, LocalArtifact, RemoteEntry};
use autofilm_scanner::{map_output_path, pointer_path};
use std::path::Path;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SyncError>;

impl Materializer {
    pub fn new(
        client: reqwest::Client,
        policy: Arc<OutputPolicy>,
        base_path: &str,
        token: Option<&str>,
    ) -> Self {
        Self {
            client,
            policy,
            base_path: base_path.to_string(),
            token: token.filter(|t| !t.is_empty()).map(str::to_string),
        }
    }

    /// Public URL with the signature query appended (if a token is set)
    pub fn signed_url(&self, entry: &RemoteEntry) -> String {
        let sign = autofilm_utils::sign(self.token.as_deref(), &entry.resource_path);
        format!("{}{}", entry.url, sign)
    }

    /// Writes the local artifact for one entry.
    ///
    /// Videos become pointer files; other categories are downloaded when the
    /// policy enables them. Non-200 responses are skips, not errors.
    pub async fn materialize(&self, entry: &RemoteEntry, category: Category) -> Result<Outcome> {
        if category == Category::Ignored {
            return Ok(Outcome::Skipped(SkipReason::Ignored));
        }
        if !self.policy.includes(category) {
            return Ok(Outcome::Skipped(SkipReason::Disabled(category)));
        }

        let output_path = map_output_path(
            &entry.name,
            &entry.remote_path,
            &self.base_path,
            self.policy.output_dir(),
            self.policy.flatten(),
        );
        let url = self.signed_url(entry);

        tracing::debug!(
            "Processing {} -> {} ({})",
            entry.remote_path,
            output_path.display(),
            category.as_str()
        );

        match category {
            Category::Video => self.write_pointer(&output_path, &url).await,
            _ => self.download(&output_path, &url).await,
        }
    }

    async fn write_pointer(&self, output_path: &Path, url: &str) -> Result<Outcome> {
        let path = pointer_path(output_path);
        FileSystem::write_pointer(&path, url)
            .await
            .map_err(|e| write_error(&path, e))?;

        Ok(Outcome::Written(LocalArtifact::pointer(path)))
    }

    async fn download(&self, output_path: &Path, url: &str) -> Result<Outcome> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            tracing::debug!("Skipping {}: HTTP {}", output_path.display(), status);
            return Ok(Outcome::Skipped(SkipReason::HttpStatus(status.as_u16())));
        }

        let body = response.bytes().await?;
        let bytes = FileSystem::write_bytes(output_path, body)
            .await
            .map_err(|e| write_error(output_path, e))?;

        Ok(Outcome::Written(LocalArtifact::download(output_path.to_path_buf(), bytes)))
    }
}

fn write_error(path: &Path, error: impl std::fmt::Display) -> SyncError {
    SyncError::WriteError {
        path: path.display().to_string(),
        error: error.to_string(),
    }
}
