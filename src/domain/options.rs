//! The option record threaded through every resolution stage.

use std::fmt;
use std::path::PathBuf;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::domain::field::Field;
use crate::domain::{ToucaError, Workflow};

/// Key/value view of a single configuration source.
///
/// Keys may be canonical option names or their aliases. `null` values count as
/// absent.
pub type OptionSource = Map<String, Value>;

/// Effective configuration of a run, filled in stage by stage.
#[derive(Default, Serialize)]
pub struct Options {
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "redact")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub colored_output: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_directory: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite_results: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_binary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_json: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_async: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testcases: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflows: Option<Vec<Workflow>>,
    /// Web application address reported by the server. Never user supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
}

fn redact<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(_) => serializer.serialize_str("[REDACTED]"),
        None => serializer.serialize_none(),
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_url", &self.api_url)
            .field("team", &self.team)
            .field("suite", &self.suite)
            .field("version", &self.version)
            .field("offline", &self.offline)
            .field("concurrency", &self.concurrency)
            .field("colored_output", &self.colored_output)
            .field("config_file", &self.config_file)
            .field("output_directory", &self.output_directory)
            .field("overwrite_results", &self.overwrite_results)
            .field("save_binary", &self.save_binary)
            .field("save_json", &self.save_json)
            .field("submit_async", &self.submit_async)
            .field("testcases", &self.testcases)
            .field("workflow_filter", &self.workflow_filter)
            .field("workflows", &self.workflows)
            .field("web_url", &self.web_url)
            .finish()
    }
}

/// True when a string option holds a non-empty value.
pub fn has_value(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

impl Options {
    pub fn is_offline(&self) -> bool {
        self.offline.unwrap_or(false)
    }

    /// Fill a single field if it is still unset.
    ///
    /// Returns whether the value was written.
    pub fn fill(&mut self, field: Field, value: &Value) -> Result<bool, ToucaError> {
        let written = match field {
            Field::ApiKey => fill_slot(&mut self.api_key, string_value(field, value)?),
            Field::ApiUrl => fill_slot(&mut self.api_url, string_value(field, value)?),
            Field::Team => fill_slot(&mut self.team, string_value(field, value)?),
            Field::Suite => fill_slot(&mut self.suite, string_value(field, value)?),
            Field::Version => fill_slot(&mut self.version, string_value(field, value)?),
            Field::Offline => fill_slot(&mut self.offline, bool_value(field, value)?),
            Field::Concurrency => fill_slot(&mut self.concurrency, bool_value(field, value)?),
            Field::SaveBinary => fill_slot(&mut self.save_binary, bool_value(field, value)?),
            Field::SaveJson => fill_slot(&mut self.save_json, bool_value(field, value)?),
            Field::OutputDirectory => {
                fill_slot(&mut self.output_directory, string_value(field, value)?.into())
            }
            Field::OverwriteResults => {
                fill_slot(&mut self.overwrite_results, bool_value(field, value)?)
            }
            Field::Testcases => fill_slot(&mut self.testcases, list_value(field, value)?),
            Field::WorkflowFilter => {
                fill_slot(&mut self.workflow_filter, string_value(field, value)?)
            }
            Field::ColoredOutput => fill_slot(&mut self.colored_output, bool_value(field, value)?),
            Field::ConfigFile => fill_slot(&mut self.config_file, string_value(field, value)?.into()),
            Field::SubmitAsync => fill_slot(&mut self.submit_async, bool_value(field, value)?),
        };
        Ok(written)
    }
}

/// Merge a configuration source into the record.
///
/// Entries with unknown keys or `null` values are skipped. Known entries are
/// converted to the field's kind and written only where the record has no
/// value yet.
pub fn assign_options(target: &mut Options, source: &OptionSource) -> Result<(), ToucaError> {
    for (key, value) in source {
        if value.is_null() {
            continue;
        }
        let Some(field) = Field::lookup(key) else {
            tracing::trace!(key = %key, "Ignoring unknown option");
            continue;
        };
        if target.fill(field, value)? {
            tracing::trace!(option = field.name(), "Option assigned");
        }
    }
    Ok(())
}

fn fill_slot<T>(slot: &mut Option<T>, value: T) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(value);
    true
}

fn string_value(field: Field, value: &Value) -> Result<String, ToucaError> {
    value.as_str().map(str::to_string).ok_or_else(|| ToucaError::invalid(field.name()))
}

fn bool_value(field: Field, value: &Value) -> Result<bool, ToucaError> {
    value.as_bool().ok_or_else(|| ToucaError::invalid(field.name()))
}

fn list_value(field: Field, value: &Value) -> Result<Vec<String>, ToucaError> {
    let items = value.as_array().ok_or_else(|| ToucaError::invalid(field.name()))?;
    items.iter().map(|item| string_value(field, item)).collect()
}
