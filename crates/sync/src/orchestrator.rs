use super::errors::SyncError;
use super::models::{Materializer, Orchestrator, Outcome, RunSummary, ServerStats};
use autofilm_alist::{AlistFileSystem, RemoteFileSystem};
use autofilm_config::{ConfigError, OutputPolicy, ServerConfig};
use autofilm_events::{AppEvent, EventBus};
use autofilm_models::ArtifactKind;
use autofilm_scanner::RemoteScanner;
use futures::stream::{self, StreamExt};
use std::sync::Arc;

type Result<T> = std::result::Result<T, SyncError>;

impl Orchestrator {
    pub fn new(policy: OutputPolicy, events: Arc<EventBus>) -> Self {
        Self::with_client(reqwest::Client::new(), policy, events)
    }

    pub fn with_client(client: reqwest::Client, policy: OutputPolicy, events: Arc<EventBus>) -> Self {
        Self {
            client,
            policy: Arc::new(policy),
            events,
        }
    }

    /// Crawls every server in order. A server that fails validation, login
    /// or listing is skipped; the rest still run.
    pub async fn run(&self, servers: Vec<std::result::Result<ServerConfig, ConfigError>>) -> RunSummary {
        let mut summary = RunSummary::default();

        for server in servers {
            let server = match server {
                Ok(server) => server,
                Err(e) => {
                    let label = match &e {
                        ConfigError::InvalidServer { label, .. } => label.clone(),
                        _ => "unknown".to_string(),
                    };
                    self.events.emit(AppEvent::ServerSkipped {
                        server: label,
                        reason: e.to_string(),
                    });
                    summary.skipped_servers += 1;
                    continue;
                }
            };

            match self.sync_server(&server).await {
                Ok(stats) => summary.add(&stats),
                Err(e) => {
                    self.events.emit(AppEvent::ServerSkipped {
                        server: server.name.clone(),
                        reason: e.to_string(),
                    });
                    summary.skipped_servers += 1;
                }
            }
        }

        summary
    }

    /// Logs in to one AList server and mirrors its base path
    pub async fn sync_server(&self, server: &ServerConfig) -> Result<ServerStats> {
        self.events.emit(AppEvent::ServerStarted {
            server: server.name.clone(),
            base_path: server.base_path.clone(),
        });

        let fs = AlistFileSystem::login(
            self.client.clone(),
            &server.base_url,
            &server.username,
            &server.password,
            &server.base_path,
        )
        .await?;

        self.sync_filesystem(&server.name, &fs, server.token.as_deref()).await
    }

    /// Mirrors an already authenticated filesystem. Every entry runs
    /// concurrently and all of them finish before this returns.
    pub async fn sync_filesystem(
        &self,
        name: &str,
        fs: &dyn RemoteFileSystem,
        token: Option<&str>,
    ) -> Result<ServerStats> {
        let start = std::time::Instant::now();

        let entries = RemoteScanner::scan(fs).await?;
        self.events.emit(AppEvent::ListingCompleted {
            server: name.to_string(),
            candidates: entries.len(),
        });

        let materializer = Materializer::new(
            self.client.clone(),
            Arc::clone(&self.policy),
            fs.base_path(),
            token,
        );

        // Unbounded unless configured: every entry gets a slot
        let limit = self.policy.concurrency().unwrap_or(entries.len()).max(1);

        let results: Vec<(String, Result<Outcome>)> = stream::iter(entries)
            .map(|scanned| {
                let materializer = &materializer;
                async move {
                    let outcome = materializer
                        .materialize(&scanned.entry, scanned.category)
                        .await;
                    (scanned.entry.remote_path, outcome)
                }
            })
            .buffer_unordered(limit)
            .collect()
            .await;

        let mut stats = ServerStats::default();
        for (remote_path, result) in results {
            match result {
                Ok(Outcome::Written(artifact)) => match artifact.kind {
                    ArtifactKind::Pointer => stats.pointers += 1,
                    ArtifactKind::Download { .. } => stats.downloads += 1,
                },
                Ok(Outcome::Skipped(_)) => stats.skipped += 1,
                Err(e) => {
                    self.events.emit(AppEvent::Error {
                        context: format!("Failed to materialize {}", remote_path),
                        error: e.to_string(),
                    });
                    stats.failed += 1;
                }
            }
        }
        stats.duration = start.elapsed();

        self.events.emit(AppEvent::ServerCompleted {
            server: name.to_string(),
            pointers: stats.pointers,
            downloads: stats.downloads,
            skipped: stats.skipped,
            failed: stats.failed,
            duration: stats.duration,
        });

        Ok(stats)
    }
}
