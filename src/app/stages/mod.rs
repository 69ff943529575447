//! Resolution stages, one per configuration source or concern.
//!
//! Every stage reads and writes the same [`Options`](crate::domain::Options)
//! record. Stages that merge a source only fill unset fields.

mod api_url;
mod arguments;
mod config_file;
mod defaults;
mod environment;
mod home;
mod profile;
mod remote;
mod runner;
mod server;
mod validate;

pub use api_url::apply_api_url;
pub use arguments::{RunnerArgs, apply_cli_arguments};
pub use config_file::apply_config_file;
pub use defaults::apply_core_options;
pub use environment::apply_environment_variables;
pub use home::find_home_directory;
pub use profile::apply_config_profile;
pub use remote::{RemoteOptions, RemoteOptionsQuery, apply_remote_options, fetch_remote_options};
pub use runner::apply_runner_options;
pub use server::{apply_server_options, authenticate};
pub use validate::{validate_core_options, validate_runner_options};
