use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    #[error("Failed to write {path}: {error}")]
    WriteError { path: String, error: String },

    #[error("Login failed: {0}")]
    LoginError(#[from] autofilm_alist::AlistError),

    #[error("Scan failed: {0}")]
    ScanError(#[from] autofilm_scanner::ScanError),
}

// Convert reqwest errors to SyncError
impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        SyncError::HttpError(err.to_string())
    }
}
