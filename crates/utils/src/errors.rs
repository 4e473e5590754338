use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("Invalid URL '{0}': {1}")]
    InvalidUrl(String, url::ParseError),

    #[error("URL has no download route: {0}")]
    MissingDownloadRoute(String),

    #[error("URL cannot carry a path: {0}")]
    CannotBeABase(String),
}
