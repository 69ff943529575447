use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::ports::Environment;

/// In-memory environment with explicit working and home directories.
#[derive(Debug, Clone, Default)]
pub struct FakeEnvironment {
    vars: HashMap<String, String>,
    cwd: Option<PathBuf>,
    home: Option<PathBuf>,
}

#[allow(dead_code)]
impl FakeEnvironment {
    pub fn new(cwd: &Path, home: &Path) -> Self {
        Self { vars: HashMap::new(), cwd: Some(cwd.to_path_buf()), home: Some(home.to_path_buf()) }
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn without_home(mut self) -> Self {
        self.home = None;
        self
    }
}

impl Environment for FakeEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn current_dir(&self) -> Option<PathBuf> {
        self.cwd.clone()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }
}
