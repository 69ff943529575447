pub mod cli;
pub mod pipeline;
pub mod stages;

pub use pipeline::{resolve_core_options, resolve_runner_options};
