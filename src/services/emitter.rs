use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::constants::{MARKER_FILE_NAME, MARKER_PREFIX};

/// The one reportable failure of an emit run: the marker file could not
/// be opened or written. Carries the attempted path and the underlying
/// I/O cause.
#[derive(thiserror::Error, Debug)]
#[error("error creating file {}", .path.display())]
pub struct EmitError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Path of the marker file inside `base_dir`.
pub fn marker_path(base_dir: &Path) -> PathBuf {
    base_dir.join(MARKER_FILE_NAME)
}

/// Single marker line. An unset maintainer renders as the empty string,
/// leaving the prefix with its trailing space.
pub fn marker_line(maintainer: Option<&str>) -> String {
    format!("{}{}", MARKER_PREFIX, maintainer.unwrap_or(""))
}

/// Writes the marker file, creating `base_dir` and missing parents first.
///
/// Directory-creation failures are swallowed: when the directory truly
/// cannot be created, the file open below fails and carries the error
/// instead. The content fully replaces any prior file at the path, UTF-8,
/// no trailing newline.
pub fn emit(maintainer: Option<&str>, base_dir: &Path) -> Result<(), EmitError> {
    if !base_dir.exists() {
        let _ = fs::create_dir_all(base_dir);
    }
    let path = marker_path(base_dir);
    write_marker(&path, &marker_line(maintainer)).map_err(|source| EmitError { path, source })
}

// The handle is released on every exit path; close errors are discarded
// with the drop and never replace the write result.
fn write_marker(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(line.as_bytes())
}
