use autofilm_models::{Category, RemoteEntry};

/// Walks a remote filesystem and resolves the entries worth materializing
pub struct RemoteScanner;

/// A remote file found by the walker, before URL resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    pub name: String,
    pub path: String,
}

/// A classified, resolved entry ready to be materialized
#[derive(Debug, Clone)]
pub struct ScannedEntry {
    pub entry: RemoteEntry,
    pub category: Category,
}
