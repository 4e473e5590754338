use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlistError {
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    #[error("AList {endpoint} returned code {code}: {message}")]
    ApiError {
        endpoint: String,
        code: i64,
        message: String,
    },

    #[error("AList {0} returned no data")]
    EmptyResponse(String),

    #[error("URL error: {0}")]
    UrlError(#[from] autofilm_utils::UtilsError),
}

// Convert reqwest errors to AlistError
impl From<reqwest::Error> for AlistError {
    fn from(err: reqwest::Error) -> Self {
        AlistError::HttpError(err.to_string())
    }
}
