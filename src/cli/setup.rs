//! `setup` command: write a default configuration file.

use crate::config::AppConfig;
use anyhow::Context;

pub fn run() -> anyhow::Result<()> {
    let path = AppConfig::default_config_path()?;

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let default_config = r#"---
series_api:
  base_url: "https://apis.datos.gob.ar"
  timeout_secs: 25

# Uncomment to override the platform cache directory:
# cache_dir: "/path/to/cache"
"#;

    std::fs::write(&path, default_config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    println!("Created default configuration at {}", path.display());
    Ok(())
}
