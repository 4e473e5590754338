use super::errors::ScanError;
use super::models::RemoteFile;
use autofilm_alist::RemoteFileSystem;
use autofilm_utils::join_remote;

/// Recursively collects every file below the session's base path whose
/// name has an extension separator. Any listing failure aborts the walk.
pub async fn walk(fs: &dyn RemoteFileSystem) -> Result<Vec<RemoteFile>, ScanError> {
    let mut files = Vec::new();
    let mut pending = vec![fs.base_path().to_string()];

    while let Some(dir) = pending.pop() {
        let children = fs
            .list(&dir)
            .await
            .map_err(|source| ScanError::ListError { path: dir.clone(), source })?;

        for child in children {
            let path = join_remote(&dir, &child.name);
            if child.is_dir {
                pending.push(path);
            } else if child.name.contains('.') {
                files.push(RemoteFile { name: child.name, path });
            }
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::FakeFileSystem;

    #[tokio::test]
    async fn test_walk_recurses_and_skips_extensionless() {
        let fs = FakeFileSystem::new("/media")
            .dir("/media", &["Movies", "Shows"], &["notes", "root.mkv"])
            .dir("/media/Movies", &[], &["a.mkv", "a.nfo"])
            .dir("/media/Shows", &["S01"], &[])
            .dir("/media/Shows/S01", &[], &["e01.mp4", "e01.srt"]);

        let mut paths: Vec<String> = walk(&fs).await.unwrap().into_iter().map(|f| f.path).collect();
        paths.sort();

        assert_eq!(
            paths,
            vec![
                "/media/Movies/a.mkv",
                "/media/Movies/a.nfo",
                "/media/Shows/S01/e01.mp4",
                "/media/Shows/S01/e01.srt",
                "/media/root.mkv",
            ]
        );
    }

    #[tokio::test]
    async fn test_walk_from_root() {
        let fs = FakeFileSystem::new("/").dir("/", &["x"], &[]).dir("/x", &[], &["a.ts"]);

        let files = walk(&fs).await.unwrap();

        assert_eq!(files, vec![RemoteFile { name: "a.ts".into(), path: "/x/a.ts".into() }]);
    }

    #[tokio::test]
    async fn test_listing_failure_aborts() {
        // `/media/Broken` is not registered, so listing it fails
        let fs = FakeFileSystem::new("/media").dir("/media", &["Broken"], &["a.mkv"]);

        match walk(&fs).await {
            Err(ScanError::ListError { path, .. }) => assert_eq!(path, "/media/Broken"),
            other => panic!("expected ListError, got {:?}", other),
        }
    }
}
