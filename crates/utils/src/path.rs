use crate::UtilsError;
use url::Url;

/// Route segment AList serves raw file downloads under
pub const DOWNLOAD_ROUTE: &str = "d";

/// Joins a remote directory and a child name with exactly one `/`.
pub fn join_remote(parent: &str, name: &str) -> String {
    let parent = parent.trim_end_matches('/');
    let name = name.trim_start_matches('/');
    format!("{}/{}", parent, name)
}

/// Builds `<base_url>/d/<segments...>` with each segment percent-encoded.
pub fn download_url(base_url: &str, remote_path: &str) -> Result<String, UtilsError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| UtilsError::InvalidUrl(base_url.to_string(), e))?;

    url.path_segments_mut()
        .map_err(|_| UtilsError::CannotBeABase(base_url.to_string()))?
        .pop_if_empty()
        .push(DOWNLOAD_ROUTE)
        .extend(remote_path.split('/').filter(|s| !s.is_empty()));

    Ok(url.into())
}

/// Extracts the path a download URL is signed over: everything in the URL
/// path after the first `/d` route marker, starting with `/`.
pub fn resource_path(download_url: &str) -> Result<String, UtilsError> {
    let url = Url::parse(download_url)
        .map_err(|e| UtilsError::InvalidUrl(download_url.to_string(), e))?;
    let path = url.path();

    let marker = format!("/{}/", DOWNLOAD_ROUTE);
    let start = path
        .find(&marker)
        .ok_or_else(|| UtilsError::MissingDownloadRoute(download_url.to_string()))?;

    Ok(path[start + marker.len() - 1..].to_string())
}
