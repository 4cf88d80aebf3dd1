use std::path::Path;

use crate::domain::constants::MARKER_PREFIX;
use crate::domain::models::{CheckReport, MarkerInfo};
use crate::services::emitter::{marker_line, marker_path};

/// Reads the marker file back. Fails when the file does not exist.
pub fn read_marker(base_dir: &Path) -> anyhow::Result<MarkerInfo> {
    let path = marker_path(base_dir);
    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => anyhow::bail!("no marker file at {}: {}", path.display(), e),
    };
    let maintainer = content.strip_prefix(MARKER_PREFIX).map(|s| s.to_string());
    Ok(MarkerInfo {
        path: path.to_string_lossy().to_string(),
        content,
        maintainer,
    })
}

/// Compares the on-disk marker against the expected maintainer value.
/// Never writes or repairs.
pub fn check_marker(base_dir: &Path, expected_maintainer: Option<&str>) -> CheckReport {
    let path = marker_path(base_dir);
    let expected = marker_line(expected_maintainer);
    let found = std::fs::read_to_string(&path).ok();
    let status = match &found {
        None => "missing",
        Some(c) if *c == expected => "ok",
        Some(_) => "mismatch",
    }
    .to_string();
    CheckReport {
        path: path.to_string_lossy().to_string(),
        status,
        expected,
        found,
    }
}
