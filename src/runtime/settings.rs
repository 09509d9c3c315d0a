use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use mediatrie::Settings;

/// Settings from the default location, falling back to defaults when they
/// cannot be loaded or fail validation.
pub fn load_settings() -> Settings {
    match Settings::load() {
        Ok(s) => {
            if let Err(e) = s.validate() {
                warn!("{e}, using defaults");
                Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            warn!("{e}, using defaults");
            Settings::default()
        }
    }
}

/// Settings from an explicitly named file. Any problem is fatal.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let settings = Settings::load_from(Some(path), true)
        .with_context(|| format!("Failed to load config: {}", path.display()))?;
    settings
        .validate()
        .with_context(|| format!("Invalid config: {}", path.display()))?;
    Ok(settings)
}
