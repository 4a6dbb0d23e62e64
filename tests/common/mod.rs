//! Common test utilities

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory holding a password file
pub fn create_password_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("password.txt");
    fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

/// Restrict a password file to owner-only access
#[cfg(unix)]
pub fn make_owner_only(path: &PathBuf) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600)).unwrap();
}

/// Open a password file up to group/other access
#[cfg(unix)]
pub fn make_world_readable(path: &PathBuf) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o644)).unwrap();
}
