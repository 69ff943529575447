use thiserror::Error;

/// Symbolic code of a catalog error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    AuthInvalidKey,
    AuthInvalidResponse,
    AuthServerDown,
    ConfigFileMissing,
    ConfigFileInvalid,
    ConfigOptionInvalid,
    ConfigOptionMissing,
    ConfigOptionFetch,
}

impl ErrorCode {
    /// Snake-case identifier shared with the other Touca clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::AuthInvalidKey => "auth_invalid_key",
            ErrorCode::AuthInvalidResponse => "auth_invalid_response",
            ErrorCode::AuthServerDown => "auth_server_down",
            ErrorCode::ConfigFileMissing => "config_file_missing",
            ErrorCode::ConfigFileInvalid => "config_file_invalid",
            ErrorCode::ConfigOptionInvalid => "config_option_invalid",
            ErrorCode::ConfigOptionMissing => "config_option_missing",
            ErrorCode::ConfigOptionFetch => "config_option_fetch",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fatal conditions raised while resolving options.
///
/// Every variant aborts the resolution call that raised it. Arguments carried
/// by a variant are the values substituted into its message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToucaError {
    #[error("Authentication failed: API Key Invalid.")]
    AuthInvalidKey,

    #[error("Authentication failed: Invalid Response.")]
    AuthInvalidResponse,

    #[error("Touca server appears to be down")]
    AuthServerDown,

    /// Configuration file path does not point to a readable file.
    #[error("Configuration file \"{0}\" does not exist")]
    ConfigFileMissing(String),

    /// Configuration or profile file could not be interpreted.
    #[error("Configuration file \"{0}\" has an unexpected format.")]
    ConfigFileInvalid(String),

    /// Option was supplied with a value of the wrong kind.
    #[error("Configuration option \"{0}\" has unexpected type.")]
    ConfigOptionInvalid(String),

    /// Required option has no value.
    #[error("Configuration option \"{0}\" is missing.")]
    ConfigOptionMissing(String),

    #[error("Failed to fetch options from the remote server.")]
    ConfigOptionFetch,
}

impl ToucaError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ToucaError::AuthInvalidKey => ErrorCode::AuthInvalidKey,
            ToucaError::AuthInvalidResponse => ErrorCode::AuthInvalidResponse,
            ToucaError::AuthServerDown => ErrorCode::AuthServerDown,
            ToucaError::ConfigFileMissing(_) => ErrorCode::ConfigFileMissing,
            ToucaError::ConfigFileInvalid(_) => ErrorCode::ConfigFileInvalid,
            ToucaError::ConfigOptionInvalid(_) => ErrorCode::ConfigOptionInvalid,
            ToucaError::ConfigOptionMissing(_) => ErrorCode::ConfigOptionMissing,
            ToucaError::ConfigOptionFetch => ErrorCode::ConfigOptionFetch,
        }
    }

    /// Arguments substituted into the message template.
    pub fn args(&self) -> Vec<&str> {
        match self {
            ToucaError::ConfigFileMissing(arg)
            | ToucaError::ConfigFileInvalid(arg)
            | ToucaError::ConfigOptionInvalid(arg)
            | ToucaError::ConfigOptionMissing(arg) => vec![arg.as_str()],
            ToucaError::AuthInvalidKey
            | ToucaError::AuthInvalidResponse
            | ToucaError::AuthServerDown
            | ToucaError::ConfigOptionFetch => vec![],
        }
    }

    pub fn missing<S: Into<String>>(option: S) -> Self {
        ToucaError::ConfigOptionMissing(option.into())
    }

    pub fn invalid<S: Into<String>>(option: S) -> Self {
        ToucaError::ConfigOptionInvalid(option.into())
    }
}
