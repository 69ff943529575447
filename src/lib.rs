//! touca: Resolve the effective configuration of a Touca test run.
//!
//! Options are gathered from explicit values, command-line flags, a JSON
//! configuration file, the active profile, environment variables and the Touca
//! server. Earlier sources win; later ones only fill what is still unset.

pub mod app;
pub mod domain;
pub mod logging;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::{resolve_core_options, resolve_runner_options};
use services::ProcessEnvironment;

pub use app::stages::RunnerArgs;
pub use domain::{
    DEFAULT_API_URL, ErrorCode, Field, FieldKind, OptionSource, Options, Testcases, ToucaError,
    Workflow, assign_options,
};
pub use ports::{Environment, Method, Response, Transport, TransportError};
pub use services::HttpTransport;

/// Resolve options for capturing results from library code.
///
/// Reads the process environment. Returns whether the client is fully
/// configured.
pub fn update_core_options(
    options: &mut Options,
    transport: &mut impl Transport,
) -> Result<bool, ToucaError> {
    resolve_core_options(options, transport, &ProcessEnvironment)
}

/// Resolve options for a test runner invocation.
///
/// Reads the process arguments and environment, the configuration file and
/// profile, and back-fills missing workflow details from the server.
pub fn update_runner_options(
    options: &mut Options,
    transport: &mut impl Transport,
) -> Result<(), ToucaError> {
    resolve_runner_options(std::env::args_os(), options, transport, &ProcessEnvironment)
}
