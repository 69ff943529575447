use crate::domain::{Options, Testcases};
use crate::ports::Environment;

use super::home::find_home_directory;

/// Normalize runner options and push top-level overrides into each workflow.
///
/// Top-level `suite`, `version` and `testcases` only seed the workflows and
/// are cleared afterwards, as is `workflow_filter` once applied.
pub fn apply_runner_options(options: &mut Options, env: &impl Environment) {
    options.submit_async.get_or_insert(false);
    options.colored_output.get_or_insert(true);
    options.save_binary.get_or_insert(false);
    options.save_json.get_or_insert(false);
    options.overwrite_results.get_or_insert(false);
    if options.output_directory.as_ref().is_none_or(|dir| dir.as_os_str().is_empty()) {
        options.output_directory = Some(find_home_directory(env).join("results"));
    }

    let workflows = options.workflows.get_or_insert_with(Vec::new);
    if let Some(filter) = options.workflow_filter.take().filter(|f| !f.is_empty()) {
        workflows.retain(|workflow| workflow.suite.as_deref() == Some(filter.as_str()));
        tracing::debug!(filter = %filter, remaining = workflows.len(), "Filtered workflows");
    }

    let testcases = options.testcases.take().filter(|list| !list.is_empty());
    let suite = options.suite.take().filter(|s| !s.is_empty());
    let version = options.version.take().filter(|v| !v.is_empty());

    for workflow in workflows.iter_mut() {
        match &testcases {
            Some(list) => workflow.testcases = Testcases::Fixed(list.clone()),
            None => {
                workflow.testcases.materialize();
            }
        }
        if let Some(suite) = &suite {
            workflow.suite = Some(suite.clone());
        }
        if let Some(version) = &version {
            workflow.version = Some(version.clone());
        }
    }
}
