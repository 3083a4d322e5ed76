//! Route photos read from a local directory.

use std::path::{Component, Path, PathBuf};

use way_core::AssetPath;

use crate::{AssetError, AssetStore};

#[derive(Debug, Clone)]
pub struct DirAssetStore {
    root: PathBuf,
}

impl DirAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a logical path under the root.
    ///
    /// Returns `None` if any segment is a parent reference, a root or a
    /// drive prefix, so resolved paths never leave `root`.
    #[must_use]
    pub fn resolve(&self, path: &AssetPath) -> Option<PathBuf> {
        let mut resolved = self.root.clone();
        for segment in path.segments() {
            for component in Path::new(segment).components() {
                match component {
                    Component::Normal(part) => resolved.push(part),
                    Component::CurDir => {}
                    Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                        return None;
                    }
                }
            }
        }
        Some(resolved)
    }
}

impl AssetStore for DirAssetStore {
    async fn probe(&self, path: &AssetPath) -> Result<bool, AssetError> {
        let Some(file) = self.resolve(path) else {
            tracing::warn!(%path, "asset path escapes the asset root, treating as absent");
            return Ok(false);
        };
        match tokio::fs::metadata(&file).await {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(AssetError::Io { path: file, source }),
        }
    }

    async fn fetch(&self, path: &AssetPath) -> Result<u64, AssetError> {
        let file = self
            .resolve(path)
            .ok_or_else(|| AssetError::OutsideRoot(path.to_string()))?;
        let bytes = tokio::fs::read(&file)
            .await
            .map_err(|source| AssetError::Io { path: file, source })?;
        Ok(bytes.len() as u64)
    }

    fn location(&self, path: &AssetPath) -> String {
        self.resolve(path)
            .unwrap_or_else(|| self.root.join(path.as_str()))
            .display()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use way_core::{AssetLayout, Destination};

    use super::*;

    fn path_for(dest: &str, index: u32) -> AssetPath {
        AssetLayout::default().step_path(&Destination::new(dest).unwrap(), index)
    }

    #[test]
    fn resolves_under_root() {
        let store = DirAssetStore::new("/srv/public");
        assert_eq!(
            store.resolve(&path_for("Lab-3", 1)),
            Some(PathBuf::from("/srv/public/photos-navigation/Lab-3/1.png"))
        );
    }

    #[test]
    fn parent_references_do_not_resolve() {
        let store = DirAssetStore::new("/srv/public");
        assert_eq!(store.resolve(&path_for("../../etc", 1)), None);
    }

    #[tokio::test]
    async fn probe_and_fetch_real_files() {
        let dir = tempfile::tempdir().unwrap();
        let lab = dir.path().join("photos-navigation").join("Lab-3");
        std::fs::create_dir_all(&lab).unwrap();
        std::fs::write(lab.join("1.png"), b"\x89PNG fake").unwrap();

        let store = DirAssetStore::new(dir.path());
        assert!(store.probe(&path_for("Lab-3", 1)).await.unwrap());
        assert!(!store.probe(&path_for("Lab-3", 2)).await.unwrap());
        assert_eq!(store.fetch(&path_for("Lab-3", 1)).await.unwrap(), 9);
    }

    #[tokio::test]
    async fn directories_are_not_assets() {
        let dir = tempfile::tempdir().unwrap();
        let lab = dir.path().join("photos-navigation").join("Lab-3");
        std::fs::create_dir_all(lab.join("1.png")).unwrap();

        let store = DirAssetStore::new(dir.path());
        assert!(!store.probe(&path_for("Lab-3", 1)).await.unwrap());
    }

    #[tokio::test]
    async fn escaping_paths_probe_absent_and_refuse_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirAssetStore::new(dir.path());
        assert!(!store.probe(&path_for("..", 1)).await.unwrap());
        let err = store.fetch(&path_for("..", 1)).await.unwrap_err();
        assert!(matches!(err, AssetError::OutsideRoot(_)));
    }

    #[tokio::test]
    async fn fetch_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirAssetStore::new(dir.path());
        let err = store.fetch(&path_for("Lab-3", 1)).await.unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }
}
