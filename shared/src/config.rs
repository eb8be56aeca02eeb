use std::{env, path::Path, path::PathBuf};

use anyhow::{Context, Result};

/// Board config file looked up when `STATSBOARD_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "statsboard.toml";

pub struct AppConfig {
    /// Path of the TOML file holding board options
    pub board_config_path: PathBuf,
}

impl AppConfig {
    pub fn load(manifest_dir: &Path) -> Result<Self> {
        #[cfg(debug_assertions)]
        {
            let env_file = manifest_dir.join(".env");
            if env_file.exists() {
                dotenvy::from_path(&env_file)
                    .with_context(|| format!("Can't read {}", env_file.display()))?;
            }
        }
        #[cfg(not(debug_assertions))]
        let _ = manifest_dir;

        let board_config_path = match env::var("STATSBOARD_CONFIG") {
            Ok(path) => PathBuf::from(path),
            Err(env::VarError::NotPresent) => PathBuf::from(DEFAULT_CONFIG_FILE),
            Err(e) => return Err(e).context("STATSBOARD_CONFIG is not valid unicode"),
        };

        Ok(Self { board_config_path })
    }
}

/// Load app config using the calling crate's manifest directory.
#[macro_export]
macro_rules! load_app_config {
    () => {
        $crate::config::AppConfig::load(std::path::Path::new(env!("CARGO_MANIFEST_DIR")))
    };
}
