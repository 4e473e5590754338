use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    // Application lifecycle
    Starting,
    Finished { servers: usize, skipped_servers: usize, duration: Duration },

    // Configuration
    ConfigLoading { path: String },
    ConfigLoaded { servers_count: usize },
    ConfigCreated { path: String },
    ConfigMigrated { added_fields: Vec<String> },
    ConfigError { error: String },
    OutputDirectory { path: String },

    // Crawl
    ServerStarted { server: String, base_path: String },
    ListingCompleted { server: String, candidates: usize },
    ServerCompleted {
        server: String,
        pointers: usize,
        downloads: usize,
        skipped: usize,
        failed: usize,
        duration: Duration,
    },
    ServerSkipped { server: String, reason: String },

    // Errors
    Error { context: String, error: String },
}

pub struct EventBus {
    pub(super) silent_mode: bool,
}
