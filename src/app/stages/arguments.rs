//! Command-line flags accepted by the test runner.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Command, CommandFactory, FromArgMatches, Parser};
use serde_json::{Value, json};

use crate::domain::{Field, OptionSource, Options, ToucaError, assign_options};
use crate::logging::LogLevel;

#[derive(Debug, Parser)]
#[command(name = "touca")]
#[command(version)]
#[command(
    about = "Run Touca regression tests",
    long_about = None,
    after_help = "See https://touca.io/docs for more information."
)]
pub struct RunnerArgs {
    /// API Key issued by the Touca Server
    #[arg(long, help_heading = "Common Options")]
    pub api_key: Option<String>,
    /// API URL issued by the Touca Server
    #[arg(long, help_heading = "Common Options")]
    pub api_url: Option<String>,
    /// Slug of team to which test results belong
    #[arg(long, help_heading = "Common Options")]
    pub team: Option<String>,
    /// Slug of suite to which test results belong
    #[arg(long, help_heading = "Common Options")]
    pub suite: Option<String>,
    /// Version of the code under test
    #[arg(long, help_heading = "Common Options")]
    pub revision: Option<String>,
    /// Disables all communications with the Touca server
    #[arg(long, help_heading = "Common Options")]
    pub offline: bool,
    /// Save a copy of test results on local filesystem in binary format
    #[arg(long, help_heading = "Runner Options")]
    pub save_as_binary: bool,
    /// Save a copy of test results on local filesystem in JSON format
    #[arg(long, help_heading = "Runner Options")]
    pub save_as_json: bool,
    /// Path to a local directory to store result files
    #[arg(long, help_heading = "Runner Options")]
    pub output_directory: Option<PathBuf>,
    /// Overwrite result directory for testcase if it already exists
    #[arg(long, help_heading = "Runner Options")]
    pub overwrite: bool,
    /// One or more testcases to feed to the workflow
    #[arg(long, num_args = 1.., help_heading = "Runner Options")]
    pub testcases: Vec<String>,
    /// Name of the workflow to run
    #[arg(long, help_heading = "Runner Options")]
    pub filter: Option<String>,
    /// Level of detail with which events are logged
    #[arg(long, value_enum, default_value_t = LogLevel::Info, hide = true)]
    pub log_level: LogLevel,
    /// Use color in standard output [default: true]
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help_heading = "Runner Options"
    )]
    pub colored_output: Option<bool>,
    /// Path to a configuration file
    #[arg(long, help_heading = "Other Options")]
    pub config_file: Option<PathBuf>,
}

impl RunnerArgs {
    /// Flags the user actually passed, keyed by flag name.
    ///
    /// Boolean switches that were not given are left out so that later
    /// sources can still provide them.
    pub fn to_source(&self) -> OptionSource {
        let mut source = OptionSource::new();
        let mut put = |key: &str, value: Value| {
            source.insert(key.to_string(), value);
        };

        if let Some(api_key) = &self.api_key {
            put("api-key", json!(api_key));
        }
        if let Some(api_url) = &self.api_url {
            put("api-url", json!(api_url));
        }
        if let Some(team) = &self.team {
            put("team", json!(team));
        }
        if let Some(suite) = &self.suite {
            put("suite", json!(suite));
        }
        if let Some(revision) = &self.revision {
            put("revision", json!(revision));
        }
        if self.offline {
            put("offline", json!(true));
        }
        if self.save_as_binary {
            put("save-as-binary", json!(true));
        }
        if self.save_as_json {
            put("save-as-json", json!(true));
        }
        if let Some(dir) = &self.output_directory {
            put("output-directory", json!(dir.to_string_lossy()));
        }
        if self.overwrite {
            put("overwrite", json!(true));
        }
        if !self.testcases.is_empty() {
            put("testcases", json!(self.testcases));
        }
        if let Some(filter) = &self.filter {
            put("filter", json!(filter));
        }
        if let Some(colored) = self.colored_output {
            put("colored-output", json!(colored));
        }
        if let Some(file) = &self.config_file {
            put("config-file", json!(file.to_string_lossy()));
        }
        source
    }
}

/// Merge command-line flags into options the caller has not set.
///
/// `args` includes the program name. Arguments the runner does not know, such
/// as flags meant for a test harness, are dropped. Prints usage and exits on
/// `--help` or `--version`. Returns the requested log level.
pub fn apply_cli_arguments<I, T>(options: &mut Options, args: I) -> Result<LogLevel, ToucaError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut command = RunnerArgs::command();
    command.build();
    let known = known_arguments(&command, args.into_iter().map(Into::into));
    let matches = command.try_get_matches_from(known).map_err(parse_error)?;
    let args = RunnerArgs::from_arg_matches(&matches).map_err(parse_error)?;
    assign_options(options, &args.to_source())?;
    Ok(args.log_level)
}

/// Keep the program name, recognized flags, and the values they consume.
fn known_arguments(command: &Command, mut args: impl Iterator<Item = OsString>) -> Vec<OsString> {
    let mut kept: Vec<OsString> = args.next().into_iter().collect();
    // Values the last recognized flag may still consume.
    let mut pending = 0usize;

    for arg in args {
        let text = arg.to_string_lossy().into_owned();
        let known = if let Some(flag) = text.strip_prefix("--") {
            let (name, inline) = match flag.split_once('=') {
                Some((name, _)) => (name, true),
                None => (flag, false),
            };
            command.get_arguments().find(|a| a.get_long() == Some(name)).map(|a| (a, inline))
        } else if let Some(short) = text.strip_prefix('-').filter(|s| s.chars().count() == 1) {
            let short = short.chars().next();
            command.get_arguments().find(|a| a.get_short() == short).map(|a| (a, false))
        } else if pending > 0 && !text.starts_with('-') {
            pending -= 1;
            kept.push(arg);
            continue;
        } else {
            continue;
        };

        pending = 0;
        let Some((flag, inline)) = known else {
            continue;
        };
        if !inline && !flag.is_require_equals_set() {
            pending = flag.get_num_args().map_or(0, |range| range.max_values());
        }
        kept.push(arg);
    }
    kept
}

fn parse_error(err: clap::Error) -> ToucaError {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        err.exit();
    }
    let flag = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg.split_whitespace().next().unwrap_or_default(),
        _ => "",
    };
    let name = flag.trim_start_matches('-').split('=').next().unwrap_or_default();
    match Field::lookup(name) {
        Some(field) => ToucaError::invalid(field.name()),
        None if !name.is_empty() => ToucaError::invalid(name),
        None => ToucaError::invalid("arguments"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> RunnerArgs {
        RunnerArgs::try_parse_from(std::iter::once("touca").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn maps_flags_onto_options() {
        let mut options = Options::default();
        let level = apply_cli_arguments(
            &mut options,
            [
                "touca",
                "--api-key",
                "secret",
                "--revision",
                "v2",
                "--save-as-json",
                "--overwrite",
                "--testcases",
                "alice",
                "bob",
                "--filter",
                "students",
                "--log-level",
                "debug",
                "--config-file",
                "touca.json",
            ],
        )
        .unwrap();

        assert_eq!(level, LogLevel::Debug);
        assert_eq!(options.api_key.as_deref(), Some("secret"));
        assert_eq!(options.version.as_deref(), Some("v2"));
        assert_eq!(options.save_json, Some(true));
        assert_eq!(options.overwrite_results, Some(true));
        assert_eq!(options.testcases, Some(vec!["alice".to_string(), "bob".to_string()]));
        assert_eq!(options.workflow_filter.as_deref(), Some("students"));
        assert_eq!(options.config_file, Some(PathBuf::from("touca.json")));
    }

    #[test]
    fn omitted_switches_stay_unset() {
        let mut options = Options::default();
        let level = apply_cli_arguments(&mut options, ["touca"]).unwrap();

        assert_eq!(level, LogLevel::Info);
        assert!(options.offline.is_none());
        assert!(options.save_binary.is_none());
        assert!(options.colored_output.is_none());
        assert!(options.testcases.is_none());
    }

    #[test]
    fn explicit_options_win_over_flags() {
        let mut options =
            Options { team: Some("explicit".to_string()), ..Options::default() };
        apply_cli_arguments(&mut options, ["touca", "--team", "flag", "--suite", "students"])
            .unwrap();

        assert_eq!(options.team.as_deref(), Some("explicit"));
        assert_eq!(options.suite.as_deref(), Some("students"));
    }

    #[test]
    fn testcases_flag_is_repeatable() {
        let args = parse(&["--testcases", "alice", "--testcases", "bob", "carol"]);
        assert_eq!(args.testcases, ["alice", "bob", "carol"]);
    }

    #[test]
    fn colored_output_accepts_explicit_value() {
        assert_eq!(parse(&["--colored-output"]).colored_output, Some(true));
        assert_eq!(parse(&["--colored-output=false"]).colored_output, Some(false));
        assert_eq!(parse(&[]).colored_output, None);
    }

    #[test]
    fn rejects_unknown_log_level() {
        let mut options = Options::default();
        let result = apply_cli_arguments(&mut options, ["touca", "--log-level", "trace"]);
        assert_eq!(result, Err(ToucaError::invalid("log-level")));
    }

    #[test]
    fn unknown_flags_and_positionals_are_dropped() {
        let mut options = Options::default();
        let level = apply_cli_arguments(&mut options, ["touca", "--nocapture", "x"]).unwrap();

        assert_eq!(level, LogLevel::Info);
        assert!(options.team.is_none());
    }

    #[test]
    fn known_flags_survive_among_foreign_ones() {
        let mut options = Options::default();
        apply_cli_arguments(
            &mut options,
            [
                "touca",
                "--test-threads=1",
                "--team",
                "acme",
                "some-filter",
                "-q",
                "--testcases",
                "alice",
                "bob",
                "--exact",
                "--colored-output=false",
            ],
        )
        .unwrap();

        assert_eq!(options.team.as_deref(), Some("acme"));
        assert_eq!(options.testcases, Some(vec!["alice".to_string(), "bob".to_string()]));
        assert_eq!(options.colored_output, Some(false));
    }

    #[test]
    fn flag_without_value_is_invalid() {
        let mut options = Options::default();
        let result = apply_cli_arguments(&mut options, ["touca", "--team"]);
        assert_eq!(result, Err(ToucaError::invalid("team")));
    }
}
