use autofilm_models::POINTER_EXTENSION;
use std::path::{Path, PathBuf};

/// Local path for a remote file.
///
/// Flatten mode drops the remote directories entirely, so equal names from
/// different folders land on the same path and the last write wins. Mirrored
/// mode keeps everything below `base_path`.
pub fn map_output_path(
    entry_name: &str,
    remote_path: &str,
    base_path: &str,
    output_dir: &Path,
    flatten: bool,
) -> PathBuf {
    if flatten {
        return output_dir.join(entry_name);
    }

    let remote = segments(remote_path);
    let base = segments(base_path);
    let relative = if remote.starts_with(&base) {
        &remote[base.len()..]
    } else {
        &remote[..]
    };

    let mut path = output_dir.to_path_buf();
    path.extend(relative);
    path
}

/// Swaps the extension for the pointer-file one
pub fn pointer_path(path: &Path) -> PathBuf {
    path.with_extension(POINTER_EXTENSION)
}

// Dot segments are dropped so nothing escapes the output directory
fn segments(path: &str) -> Vec<&str> {
    path.split('/')
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirrored_strips_base_path() {
        let out = Path::new("/out");
        let mapped = map_output_path("movie.mkv", "/x/sub/dir/movie.mkv", "/x", out, false);

        assert_eq!(mapped, PathBuf::from("/out/sub/dir/movie.mkv"));
        assert_eq!(pointer_path(&mapped), PathBuf::from("/out/sub/dir/movie.strm"));
    }

    #[test]
    fn test_mirrored_root_base_path() {
        let mapped = map_output_path("a.srt", "/tv/show/a.srt", "/", Path::new("/out"), false);
        assert_eq!(mapped, PathBuf::from("/out/tv/show/a.srt"));
    }

    #[test]
    fn test_base_path_is_matched_by_segment() {
        // `/x` is not a prefix of `/xy`
        let mapped = map_output_path("a.mkv", "/xy/a.mkv", "/x", Path::new("/out"), false);
        assert_eq!(mapped, PathBuf::from("/out/xy/a.mkv"));
    }

    #[test]
    fn test_flatten_discards_directories() {
        let out = Path::new("/out");
        let first = map_output_path("e01.mkv", "/x/show-a/e01.mkv", "/x", out, true);
        let second = map_output_path("e01.mkv", "/x/show-b/e01.mkv", "/x", out, true);

        assert_eq!(first, PathBuf::from("/out/e01.mkv"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_dot_segments_dropped() {
        let mapped = map_output_path("a.nfo", "/x/../../etc/a.nfo", "/x", Path::new("/out"), false);
        assert_eq!(mapped, PathBuf::from("/out/etc/a.nfo"));
    }

    #[test]
    fn test_pointer_path_replaces_last_extension() {
        assert_eq!(
            pointer_path(Path::new("/out/Show.S01E01.1080p.mkv")),
            PathBuf::from("/out/Show.S01E01.1080p.strm")
        );
    }
}
