mod fake_environment;
mod fake_transport;

pub use fake_environment::FakeEnvironment;
pub use fake_transport::FakeTransport;

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary working and home directories for filesystem-backed stages.
pub struct Sandbox {
    root: TempDir,
}

#[allow(dead_code)]
impl Sandbox {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::create_dir_all(root.path().join("work")).expect("Failed to create work directory");
        fs::create_dir_all(root.path().join("home")).expect("Failed to create home directory");
        Self { root }
    }

    pub fn cwd(&self) -> PathBuf {
        self.root.path().join("work")
    }

    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    pub fn env(&self) -> FakeEnvironment {
        FakeEnvironment::new(&self.cwd(), &self.home())
    }

    /// Write `content` to `relative` under the sandbox root, creating parents.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write sandbox file");
        path
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }
}
