use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

use super::SettingsError;
use super::schema::{FolderSettings, Settings};
use crate::index::ROOT_ID;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `MEDIATRIE__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and the optional default config file.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(resolve_config_path().as_deref(), false)
    }

    /// Load settings from environment and `path`. When `required` is set a
    /// missing file is an error instead of falling back to defaults.
    pub fn load_from(path: Option<&Path>, required: bool) -> Result<Self, SettingsError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(required));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("MEDIATRIE")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.library.display_name.trim().is_empty() {
            return Err(SettingsError::Invalid(
                "library.display_name must not be empty".to_string(),
            ));
        }
        if self.browse.default_page_size == 0 {
            return Err(SettingsError::Invalid(
                "browse.default_page_size must be >= 1".to_string(),
            ));
        }
        if self.browse.max_page_size != 0
            && self.browse.max_page_size < self.browse.default_page_size
        {
            return Err(SettingsError::Invalid(
                "browse.max_page_size must be 0 or >= browse.default_page_size".to_string(),
            ));
        }

        let mut ids: HashSet<String> = HashSet::new();
        ids.insert(ROOT_ID.to_string());
        validate_folders(&self.folders, "", &mut ids)
    }
}

fn validate_folders(
    folders: &[FolderSettings],
    parent: &str,
    ids: &mut HashSet<String>,
) -> Result<(), SettingsError> {
    let mut routes: HashSet<&str> = HashSet::new();
    for folder in folders {
        let route = folder.route.as_str();
        if route.is_empty() {
            return Err(SettingsError::Invalid(format!(
                "folder route under '{}' must not be empty",
                display_parent(parent)
            )));
        }
        if route.contains('/') {
            return Err(SettingsError::Invalid(format!(
                "folder route '{route}' must not contain '/'"
            )));
        }
        if route == ROOT_ID {
            return Err(SettingsError::Invalid(format!(
                "folder route '{ROOT_ID}' is reserved"
            )));
        }
        if !routes.insert(route) {
            return Err(SettingsError::Invalid(format!(
                "duplicate folder route '{route}' under '{}'",
                display_parent(parent)
            )));
        }

        let id = if parent.is_empty() {
            route.to_string()
        } else {
            format!("{parent}/{route}")
        };
        if !ids.insert(id.clone()) {
            return Err(SettingsError::Invalid(format!("duplicate item id '{id}'")));
        }

        for track in &folder.tracks {
            if track.id.trim().is_empty() {
                return Err(SettingsError::Invalid(format!(
                    "track in folder '{id}' has an empty id"
                )));
            }
            if track.uri.trim().is_empty() {
                return Err(SettingsError::Invalid(format!(
                    "track '{}' has an empty uri",
                    track.id
                )));
            }
            if !ids.insert(track.id.clone()) {
                return Err(SettingsError::Invalid(format!(
                    "duplicate item id '{}'",
                    track.id
                )));
            }
        }

        validate_folders(&folder.folders, &id, ids)?;
    }
    Ok(())
}

fn display_parent(parent: &str) -> &str {
    if parent.is_empty() { ROOT_ID } else { parent }
}

/// Resolve the config path from `MEDIATRIE_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("MEDIATRIE_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/mediatrie/config.toml`
/// or `~/.config/mediatrie/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("mediatrie").join("config.toml"))
}
