use std::path::PathBuf;

use biaoqing_core::catalog::AssetResolver;

/// Resolves catalog file names against the configured images directory.
pub struct DirAssetResolver {
    images_dir: PathBuf,
}

impl DirAssetResolver {
    pub fn new(images_dir: impl Into<PathBuf>) -> Self {
        Self {
            images_dir: images_dir.into(),
        }
    }
}

impl AssetResolver for DirAssetResolver {
    fn resolve(&self, file_name: &str) -> PathBuf {
        self.images_dir.join(file_name)
    }
}
