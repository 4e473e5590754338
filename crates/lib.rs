// Re-export all public APIs from the workspace crates

pub use autofilm_models::*;
pub use autofilm_events::*;
pub use autofilm_utils::*;
pub use autofilm_filesystem::*;
pub use autofilm_config::*;
pub use autofilm_alist::*;
pub use autofilm_scanner::*;
pub use autofilm_sync::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Core models
    pub use autofilm_models::{Category, RemoteEntry, LocalArtifact};

    // Events
    pub use autofilm_events::{AppEvent, EventBus};

    // Configuration
    pub use autofilm_config::{Config, OutputPolicy, ServerConfig};

    // Remote filesystem
    pub use autofilm_alist::{AlistFileSystem, RemoteFileSystem};

    // Scanner
    pub use autofilm_scanner::{classify, RemoteScanner};

    // Sync
    pub use autofilm_sync::{Materializer, Orchestrator};

    // Filesystem
    pub use autofilm_filesystem::FileSystem;
}
