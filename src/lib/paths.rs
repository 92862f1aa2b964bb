//! Path helpers shared by the settings loader and the launcher.

use std::path::{Path, PathBuf};

/// Default base directory holding the `ids/` keypair folder.
pub const DEFAULT_BASE_DIR: &str = "/root/orev2_setup";

/// Returns true if the path is non-empty and absolute.
pub fn is_nonempty_absolute(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_absolute()
}

/// Keypair file for a worker: `<base>/ids/id<worker_index>.json`.
///
/// The index is substituted verbatim, without sanitization.
pub fn keypair_path(base_dir: &Path, worker_index: &str) -> PathBuf {
    base_dir.join("ids").join(format!("id{worker_index}.json"))
}
