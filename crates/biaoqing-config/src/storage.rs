use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_images_dir() -> PathBuf {
    PathBuf::from("images")
}

fn default_catalog_file() -> PathBuf {
    PathBuf::from("data/image_map.json")
}

/// On-disk layout, relative to the application root.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
    #[serde(default = "default_catalog_file")]
    pub catalog_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            images_dir: default_images_dir(),
            catalog_file: default_catalog_file(),
        }
    }
}
