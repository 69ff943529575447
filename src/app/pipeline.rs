//! Ordered resolution pipelines.
//!
//! Sources are merged first-writer-wins, so the application order below is the
//! precedence order: explicit options, command-line flags, configuration file,
//! profile, environment variables, then derived defaults.

use std::ffi::OsString;

use crate::domain::{Options, ToucaError};
use crate::logging;
use crate::ports::{Environment, Transport};

use super::stages::{
    apply_api_url, apply_cli_arguments, apply_config_file, apply_config_profile,
    apply_core_options, apply_environment_variables, apply_remote_options, apply_runner_options,
    apply_server_options, authenticate, validate_core_options, validate_runner_options,
};

/// Resolve the options needed to capture results from library code.
///
/// Returns whether the client is fully configured.
pub fn resolve_core_options(
    options: &mut Options,
    transport: &mut impl Transport,
    env: &impl Environment,
) -> Result<bool, ToucaError> {
    apply_environment_variables(options, env)?;
    apply_api_url(options)?;
    apply_core_options(options);
    authenticate(options, transport)?;
    validate_core_options(options)
}

/// Resolve the options of a test runner invocation.
///
/// `args` are the command-line arguments, program name included.
pub fn resolve_runner_options<I, T>(
    args: I,
    options: &mut Options,
    transport: &mut impl Transport,
    env: &impl Environment,
) -> Result<(), ToucaError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    // Only the server handshake may set this.
    options.web_url = None;

    let log_level = apply_cli_arguments(options, args)?;
    if let Err(err) = logging::init(log_level) {
        tracing::debug!(error = %err, "Keeping existing log subscriber");
    }
    tracing::debug!(log_level = log_level.as_str(), "Applied command-line arguments");
    apply_config_file(options, env)?;
    apply_config_profile(options, env)?;
    apply_environment_variables(options, env)?;
    apply_api_url(options)?;
    apply_core_options(options);
    authenticate(options, transport)?;
    apply_server_options(options, transport)?;
    apply_runner_options(options, env);
    apply_remote_options(options, transport)?;
    validate_runner_options(options)?;
    tracing::debug!(
        offline = options.is_offline(),
        workflows = options.workflows.as_ref().map_or(0, Vec::len),
        "Resolved runner options"
    );
    Ok(())
}
