use std::path::PathBuf;

use crate::domain::TOUCA_DIR;
use crate::ports::Environment;

/// Resolve the Touca home directory.
///
/// A `.touca` directory in the working directory takes precedence over the
/// one in the user's home directory.
pub fn find_home_directory(env: &impl Environment) -> PathBuf {
    if let Some(local) = env.current_dir().map(|cwd| cwd.join(TOUCA_DIR)) {
        if local.is_dir() {
            return local;
        }
    }
    match env.home_dir() {
        Some(home) => home.join(TOUCA_DIR),
        None => PathBuf::from(TOUCA_DIR),
    }
}
