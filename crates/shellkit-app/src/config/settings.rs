//! Loading and saving `.shellkit/config.toml`

use std::path::{Path, PathBuf};

use shellkit_core::prelude::*;

use super::types::ShellConfig;

pub const SHELLKIT_DIR: &str = ".shellkit";
pub const CONFIG_FILENAME: &str = "config.toml";

/// Path of the config file for a project directory
pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(SHELLKIT_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.shellkit/config.toml` under `project_path`.
///
/// A missing or invalid file yields the defaults.
pub fn load_settings(project_path: &Path) -> ShellConfig {
    let path = config_path(project_path);
    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return ShellConfig::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(text) => parse_or_default(&path, &text),
        Err(e) => {
            warn!("Cannot read {}: {e}; using defaults", path.display());
            ShellConfig::default()
        }
    }
}

/// Load an explicitly named config file. Unlike [`load_settings`] a missing
/// file is an error; a file that fails to parse still falls back to defaults.
pub fn load_from_path(path: &Path) -> Result<ShellConfig> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(parse_or_default(path, &text))
}

fn parse_or_default(path: &Path, text: &str) -> ShellConfig {
    toml::from_str(text)
        .inspect(|_| debug!(path = %path.display(), "Loaded shell config"))
        .unwrap_or_else(|e| {
            warn!("Ignoring {}: {e}", path.display());
            ShellConfig::default()
        })
}

/// Resolve a path from the config relative to the directory holding it
pub fn resolve_config_relative(config_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        config_dir.join(path)
    }
}

/// Write `.shellkit/config.toml` through a temp file and rename
pub fn save_settings(project_path: &Path, settings: &ShellConfig) -> Result<()> {
    let dir = project_path.join(SHELLKIT_DIR);
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let body = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("cannot serialize settings: {e}")))?;

    let target = dir.join(CONFIG_FILENAME);
    let staging = dir.join(".config.toml.tmp");
    std::fs::write(&staging, format!("# shellkit configuration\n\n{body}"))
        .context("writing staged config")?;
    std::fs::rename(&staging, &target).context("replacing config")?;

    info!(path = %target.display(), "Saved shell config");
    Ok(())
}
