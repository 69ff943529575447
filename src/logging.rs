use clap::ValueEnum;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Level of detail with which events are logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
        }
    }
}

/// Install a stderr subscriber filtered at `level`.
///
/// `RUST_LOG` takes precedence over `level` when set. Fails if a global
/// subscriber is already installed.
pub fn init(level: LogLevel) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr).compact();

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level.as_str()))?;

    tracing_subscriber::registry().with(filter_layer).with(fmt_layer).try_init()?;

    Ok(())
}
