//! Named configuration profiles stored under the Touca home directory.

use std::fs;
use std::path::Path;

use ini::Ini;
use serde_json::Value;

use super::home::find_home_directory;
use crate::domain::{OptionSource, Options, ToucaError, assign_options};
use crate::ports::Environment;

const SETTINGS_SECTION: &str = "settings";
const DEFAULT_PROFILE: &str = "default";

/// Merge the `[settings]` section of the active profile.
///
/// The active profile is named by `profile` in `<home>/settings` and lives at
/// `<home>/profiles/<name>`. Missing files are skipped.
pub fn apply_config_profile(options: &mut Options, env: &impl Environment) -> Result<(), ToucaError> {
    let home = find_home_directory(env);
    let name = active_profile(&home.join("settings"))?;
    let profile = home.join("profiles").join(&name);
    if !profile.is_file() {
        tracing::debug!(profile = %name, "No configuration profile found");
        return Ok(());
    }

    let config = load_ini(&profile)?;
    if let Some(section) = config.section(Some(SETTINGS_SECTION)) {
        let source: OptionSource =
            section.iter().map(|(key, value)| (key.to_string(), ini_value(value))).collect();
        assign_options(options, &source)?;
    }
    tracing::debug!(profile = %name, "Applied configuration profile");
    Ok(())
}

fn active_profile(settings: &Path) -> Result<String, ToucaError> {
    if !settings.is_file() {
        return Ok(DEFAULT_PROFILE.to_string());
    }
    let config = load_ini(settings)?;
    let name = config
        .section(Some(SETTINGS_SECTION))
        .and_then(|section| section.get("profile"))
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_PROFILE);
    Ok(name.to_string())
}

fn load_ini(path: &Path) -> Result<Ini, ToucaError> {
    let invalid = || ToucaError::ConfigFileInvalid(path.display().to_string());
    let content = fs::read_to_string(path).map_err(|_| invalid())?;
    Ini::load_from_str(&content).map_err(|_| invalid())
}

/// INI carries no types; `true` and `false` are read as booleans.
fn ini_value(raw: &str) -> Value {
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        other => Value::String(other.to_string()),
    }
}
