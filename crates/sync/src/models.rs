use autofilm_config::OutputPolicy;
use autofilm_events::EventBus;
use autofilm_models::{Category, LocalArtifact};
use std::sync::Arc;
use std::time::Duration;

/// Turns remote entries into local files for one server
pub struct Materializer {
    pub(crate) client: reqwest::Client,
    pub(crate) policy: Arc<OutputPolicy>,
    pub(crate) base_path: String,
    pub(crate) token: Option<String>,
}

/// Crawls configured servers one after another
pub struct Orchestrator {
    pub(crate) client: reqwest::Client,
    pub(crate) policy: Arc<OutputPolicy>,
    pub(crate) events: Arc<EventBus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written(LocalArtifact),
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Ignored,
    Disabled(Category),
    HttpStatus(u16),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerStats {
    pub pointers: usize,
    pub downloads: usize,
    pub skipped: usize,
    pub failed: usize,
    pub duration: Duration,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub servers: usize,
    pub skipped_servers: usize,
    pub pointers: usize,
    pub downloads: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    pub(crate) fn add(&mut self, stats: &ServerStats) {
        self.servers += 1;
        self.pointers += stats.pointers;
        self.downloads += stats.downloads;
        self.skipped += stats.skipped;
        self.failed += stats.failed;
    }
}
