//! Shared testing utilities for touca integration tests.

use assert_cmd::Command;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use touca::Environment;

const TOUCA_VARIABLES: [&str; 3] = ["TOUCA_API_KEY", "TOUCA_API_URL", "TOUCA_TEST_VERSION"];

/// Isolated working and home directories for one test.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    home: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let home = root.path().join("home");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(&home).expect("Failed to create test home directory");
        Self { root, work_dir, home }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled `touca-options` binary.
    ///
    /// Touca variables from the outer environment are cleared.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("touca-options").expect("Failed to locate touca-options binary");
        cmd.current_dir(&self.work_dir).env("HOME", &self.home).env_remove("RUST_LOG");
        for key in TOUCA_VARIABLES {
            cmd.env_remove(key);
        }
        cmd
    }

    /// Write `content` under the test root, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write the default profile in the emulated home directory.
    pub fn write_profile(&self, content: &str) -> PathBuf {
        self.write("home/.touca/profiles/default", content)
    }

    pub fn environment(&self) -> StaticEnvironment {
        StaticEnvironment {
            vars: HashMap::new(),
            cwd: self.work_dir.clone(),
            home: self.home.clone(),
        }
    }
}

/// Environment with fixed variables and directories.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct StaticEnvironment {
    vars: HashMap<String, String>,
    cwd: PathBuf,
    home: PathBuf,
}

#[allow(dead_code)]
impl StaticEnvironment {
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl Environment for StaticEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn current_dir(&self) -> Option<PathBuf> {
        Some(self.cwd.clone())
    }

    fn home_dir(&self) -> Option<PathBuf> {
        Some(self.home.clone())
    }
}

/// Sets or removes a process variable and restores it on drop.
#[allow(dead_code)]
pub struct EnvVarGuard {
    key: String,
    original: Option<std::ffi::OsString>,
}

#[allow(dead_code)]
impl EnvVarGuard {
    pub fn set(key: &str, value: &str) -> Self {
        let original = std::env::var_os(key);
        unsafe { std::env::set_var(key, value) };
        Self { key: key.to_string(), original }
    }

    pub fn remove(key: &str) -> Self {
        let original = std::env::var_os(key);
        unsafe { std::env::remove_var(key) };
        Self { key: key.to_string(), original }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        match self.original.as_ref() {
            Some(original) => unsafe { std::env::set_var(&self.key, original) },
            None => unsafe { std::env::remove_var(&self.key) },
        }
    }
}
