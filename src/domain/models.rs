use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Project-local build configuration (`resmark.toml`). Every field is
/// optional; a missing file means all defaults.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub emit: EmitSection,
}

#[derive(Debug, Deserialize, Default)]
pub struct EmitSection {
    #[serde(default)]
    pub maintainer: Option<String>,
}

#[derive(Serialize)]
pub struct EmitReport {
    pub path: String,
    pub maintainer: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct MarkerInfo {
    pub path: String,
    pub content: String,
    /// Content with the marker prefix stripped; absent when the file does
    /// not carry the prefix.
    pub maintainer: Option<String>,
}

#[derive(Serialize)]
pub struct CheckReport {
    pub path: String,
    pub status: String,
    pub expected: String,
    pub found: Option<String>,
}
