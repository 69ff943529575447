//! Static table of mergeable option fields and their aliases.

/// Value kind an option accepts from a configuration source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    String,
    StringList,
}

/// Options that configuration sources are allowed to set.
///
/// `workflows` and `web_url` are absent on purpose: the first only comes from
/// code, the second only from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ApiKey,
    ApiUrl,
    Team,
    Suite,
    Version,
    Offline,
    Concurrency,
    SaveBinary,
    SaveJson,
    OutputDirectory,
    OverwriteResults,
    Testcases,
    WorkflowFilter,
    ColoredOutput,
    ConfigFile,
    SubmitAsync,
}

impl Field {
    pub const ALL: [Field; 16] = [
        Field::ApiKey,
        Field::ApiUrl,
        Field::Team,
        Field::Suite,
        Field::Version,
        Field::Offline,
        Field::Concurrency,
        Field::SaveBinary,
        Field::SaveJson,
        Field::OutputDirectory,
        Field::OverwriteResults,
        Field::Testcases,
        Field::WorkflowFilter,
        Field::ColoredOutput,
        Field::ConfigFile,
        Field::SubmitAsync,
    ];

    /// Canonical option name.
    pub fn name(&self) -> &'static str {
        match self {
            Field::ApiKey => "api_key",
            Field::ApiUrl => "api_url",
            Field::Team => "team",
            Field::Suite => "suite",
            Field::Version => "version",
            Field::Offline => "offline",
            Field::Concurrency => "concurrency",
            Field::SaveBinary => "save_binary",
            Field::SaveJson => "save_json",
            Field::OutputDirectory => "output_directory",
            Field::OverwriteResults => "overwrite_results",
            Field::Testcases => "testcases",
            Field::WorkflowFilter => "workflow_filter",
            Field::ColoredOutput => "colored_output",
            Field::ConfigFile => "config_file",
            Field::SubmitAsync => "submit_async",
        }
    }

    /// Alternate spellings, mostly command-line flag names.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Field::ApiKey => &["api-key"],
            Field::ApiUrl => &["api-url"],
            Field::Version => &["revision"],
            Field::SaveBinary => &["save-as-binary"],
            Field::SaveJson => &["save-as-json"],
            Field::OutputDirectory => &["output-directory"],
            Field::OverwriteResults => &["overwrite"],
            Field::WorkflowFilter => &["filter"],
            Field::ColoredOutput => &["colored-output"],
            Field::ConfigFile => &["config-file"],
            Field::Team
            | Field::Suite
            | Field::Offline
            | Field::Concurrency
            | Field::Testcases
            | Field::SubmitAsync => &[],
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Offline
            | Field::Concurrency
            | Field::SaveBinary
            | Field::SaveJson
            | Field::OverwriteResults
            | Field::ColoredOutput
            | Field::SubmitAsync => FieldKind::Bool,
            Field::Testcases => FieldKind::StringList,
            Field::ApiKey
            | Field::ApiUrl
            | Field::Team
            | Field::Suite
            | Field::Version
            | Field::OutputDirectory
            | Field::WorkflowFilter
            | Field::ConfigFile => FieldKind::String,
        }
    }

    /// Resolve a source key, canonical or alias, to its field.
    pub fn lookup(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.name() == key || field.aliases().contains(&key))
    }
}
