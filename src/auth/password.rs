//! Password file loading

use crate::error::{PasswordFileError, PasswordFileResult};
use crate::ui;
use std::fs;
use std::path::Path;

/// Load a password from a file
///
/// A single trailing CR/LF is stripped so that files written with
/// `echo secret > file` work as expected; interior whitespace is kept.
/// Loose file permissions produce a warning but do not fail the run.
pub fn load_password_file(path: &Path) -> PasswordFileResult<String> {
    let metadata = fs::metadata(path).map_err(|e| PasswordFileError::Unreadable {
        path: path.to_path_buf(),
        source: e,
    })?;

    if !metadata.is_file() {
        return Err(PasswordFileError::NotAFile(path.to_path_buf()));
    }

    if let Some(warning) = permission_warning(path, &metadata) {
        ui::print_warning(warning);
    }

    let contents = fs::read_to_string(path).map_err(|e| PasswordFileError::Unreadable {
        path: path.to_path_buf(),
        source: e,
    })?;

    let password = strip_trailing_newline(&contents);
    if password.is_empty() {
        return Err(PasswordFileError::Empty(path.to_path_buf()));
    }

    Ok(password.to_string())
}

/// Strip exactly one trailing CR/LF sequence
fn strip_trailing_newline(contents: &str) -> &str {
    contents
        .strip_suffix("\r\n")
        .or_else(|| contents.strip_suffix('\n'))
        .unwrap_or(contents)
}

/// Warning text for a password file readable beyond its owner
#[cfg(unix)]
fn permission_warning(path: &Path, metadata: &fs::Metadata) -> Option<String> {
    use std::os::unix::fs::PermissionsExt;

    let mode = metadata.permissions().mode() & 0o777;
    if mode & 0o077 != 0 {
        Some(format!(
            "password file '{}' has mode {:03o}, accessible beyond its owner; consider chmod 600",
            path.display(),
            mode
        ))
    } else {
        None
    }
}

#[cfg(not(unix))]
fn permission_warning(_path: &Path, _metadata: &fs::Metadata) -> Option<String> {
    None
}
