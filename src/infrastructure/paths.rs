//! Sandbox path handling.
//!
//! Zellij mounts the host working directory (normally `$HOME`) at `/host`, so
//! user-facing paths such as `~/themes/nord.toml` must be rewritten before the
//! plugin can open them.

use std::path::PathBuf;

const HOST_ROOT: &str = "/host";

/// Directory holding the trace file: `~/.local/share/zellij/zatlas` on the host.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij/zatlas")
}

/// Maps a `~` prefix onto the sandbox mount. Other paths pass through.
///
/// ```
/// use zatlas::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/nord.toml").to_str(), Some("/host/themes/nord.toml"));
/// assert_eq!(expand_tilde("/etc/zatlas.toml").to_str(), Some("/etc/zatlas.toml"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some("") => PathBuf::from(HOST_ROOT),
        Some(rest) if rest.starts_with('/') => PathBuf::from(format!("{HOST_ROOT}{rest}")),
        _ => PathBuf::from(path),
    }
}
