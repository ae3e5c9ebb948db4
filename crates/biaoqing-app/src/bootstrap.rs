use std::fs;
use std::path::Path;

use biaoqing_config::Config;

/// Ensure the on-disk layout exists and return the effective config.
///
/// First run creates config/, images/ and data/ under the root, plus a
/// default config/config.json and an empty data/image_map.json.
pub fn prepare(root: &Path) -> anyhow::Result<Config> {
    for dir in ["config", "images", "data"] {
        let path = root.join(dir);
        if !path.exists() {
            tracing::info!("creating {}", path.display());
            fs::create_dir_all(&path)?;
        }
    }

    let config_path = root.join("config").join("config.json");
    if !config_path.exists() {
        let default = Config::new();
        fs::write(&config_path, serde_json::to_string_pretty(&default)?)?;
        tracing::info!("created default config: {}", config_path.display());
    }

    let catalog_path = root.join("data").join("image_map.json");
    if !catalog_path.exists() {
        fs::write(&catalog_path, "[]")?;
        tracing::info!("created empty catalog: {}", catalog_path.display());
    }

    let data = fs::read_to_string(&config_path)?;
    let config = serde_json::from_str(&data)?;
    Ok(config)
}
