use std::fs;

use serde_json::Value;

use crate::domain::{Options, ToucaError, assign_options};
use crate::ports::Environment;

/// Top-level key holding Touca options inside a configuration file.
const CONFIG_SECTION: &str = "touca";

/// Merge the `touca` section of the JSON file named by `config_file`.
///
/// Relative paths resolve against the working directory.
pub fn apply_config_file(options: &mut Options, env: &impl Environment) -> Result<(), ToucaError> {
    let Some(file) = options.config_file.clone().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    let display = file.display().to_string();
    let path = match env.current_dir() {
        Some(cwd) if file.is_relative() => cwd.join(&file),
        _ => file,
    };

    if !path.is_file() {
        return Err(ToucaError::ConfigFileMissing(display));
    }
    let content =
        fs::read_to_string(&path).map_err(|_| ToucaError::ConfigFileMissing(display.clone()))?;
    let parsed: Value =
        serde_json::from_str(&content).map_err(|_| ToucaError::ConfigFileInvalid(display.clone()))?;
    let Some(Value::Object(section)) = parsed.get(CONFIG_SECTION) else {
        return Err(ToucaError::ConfigFileInvalid(display));
    };

    assign_options(options, section)?;
    tracing::debug!(path = %path.display(), "Applied configuration file");
    Ok(())
}
