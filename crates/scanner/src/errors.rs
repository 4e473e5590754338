use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Remote listing failed for {path}: {source}")]
    ListError {
        path: String,
        #[source]
        source: autofilm_alist::AlistError,
    },

    #[error("Cannot resolve URL for {path}: {source}")]
    UrlError {
        path: String,
        #[source]
        source: autofilm_alist::AlistError,
    },

    #[error("Cannot derive signing path for {path}: {source}")]
    SignPathError {
        path: String,
        #[source]
        source: autofilm_utils::UtilsError,
    },
}
