pub mod error;
pub mod field;
pub mod options;
pub mod workflow;

pub use error::{ErrorCode, ToucaError};
pub use field::{Field, FieldKind};
pub use options::{OptionSource, Options, assign_options, has_value};
pub use workflow::{TestcaseGenerator, Testcases, Workflow, WorkflowCallback};

/// Production Touca API endpoint used when only an API key is configured.
pub const DEFAULT_API_URL: &str = "https://api.touca.io";

/// Name of the per-project and per-user Touca directory.
pub const TOUCA_DIR: &str = ".touca";
