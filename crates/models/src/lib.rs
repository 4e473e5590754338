use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "flv", "avi", "wmv", "ts", "rmvb", "webm"];
pub const SUBTITLE_EXTENSIONS: &[&str] = &["ass", "srt", "ssa", "sub"];
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg"];
pub const METADATA_EXTENSIONS: &[&str] = &["nfo"];

/// Extension given to pointer files
pub const POINTER_EXTENSION: &str = "strm";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Video,
    Subtitle,
    Image,
    Metadata,
    Ignored,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Video => "video",
            Category::Subtitle => "subtitle",
            Category::Image => "image",
            Category::Metadata => "metadata",
            Category::Ignored => "ignored",
        }
    }
}

/// A file discovered on the remote server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteEntry {
    pub name: String,
    /// Absolute path on the remote server, e.g. `/movies/a/b.mkv`
    pub remote_path: String,
    /// Public download URL, unsigned
    pub url: String,
    /// Portion of the URL the signature is computed over
    pub resource_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtifactKind {
    Pointer,
    Download { bytes: u64 },
}

/// A file written to the local mirror
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalArtifact {
    pub path: PathBuf,
    pub kind: ArtifactKind,
}

impl LocalArtifact {
    pub fn pointer(path: PathBuf) -> Self {
        Self { path, kind: ArtifactKind::Pointer }
    }

    pub fn download(path: PathBuf, bytes: u64) -> Self {
        Self { path, kind: ArtifactKind::Download { bytes } }
    }
}
