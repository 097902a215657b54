//! Configuration file discovery and loading.

use crate::config::schema::ShopConfig;
use crate::error::{Result, ShopError};
use std::fs;
use std::path::{Path, PathBuf};

/// Find the project config at `.promise-shop/config.yml`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(".promise-shop").join("config.yml");
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Load the effective configuration.
///
/// An explicit path must exist. Without one, the project config is used if
/// present and defaults otherwise.
pub fn load_config(explicit: Option<&Path>, project_root: &Path) -> Result<ShopConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match find_project_config(project_root) {
            Some(path) => path,
            None => {
                tracing::debug!("No config file found, using defaults");
                return Ok(ShopConfig::default());
            }
        },
    };

    tracing::debug!("Loading config from {}", path.display());
    load_config_file(&path)
}

/// Load and parse a single config file.
pub fn load_config_file(path: &Path) -> Result<ShopConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ShopError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ShopError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into ShopConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<ShopConfig> {
    // serde_yaml rejects a document with no content, but an empty file is valid.
    if content.trim().is_empty() {
        return Ok(ShopConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| ShopError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
