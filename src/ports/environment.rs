use std::path::PathBuf;

/// Port for process-level inputs: environment variables and directories.
pub trait Environment {
    /// Value of an environment variable, if set and valid unicode.
    fn var(&self, key: &str) -> Option<String>;

    /// Current working directory.
    fn current_dir(&self) -> Option<PathBuf>;

    /// Home directory of the current user.
    fn home_dir(&self) -> Option<PathBuf>;
}
