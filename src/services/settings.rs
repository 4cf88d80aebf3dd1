use std::path::Path;

use crate::domain::constants::CONFIG_FILE_NAME;
use crate::domain::models::ConfigFile;

/// Loads `resmark.toml` from the working directory. A missing file is not
/// an error; every field falls back to its default.
pub fn load_config() -> anyhow::Result<ConfigFile> {
    load_config_from(Path::new(CONFIG_FILE_NAME))
}

pub fn load_config_from(path: &Path) -> anyhow::Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// Flag value wins over the configuration file; neither means unset.
pub fn resolve_maintainer<'a>(flag: Option<&'a str>, config: &'a ConfigFile) -> Option<&'a str> {
    flag.or(config.emit.maintainer.as_deref())
}
