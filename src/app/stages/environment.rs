use serde_json::Value;

use crate::domain::{Field, OptionSource, Options, ToucaError, assign_options};
use crate::ports::Environment;

const ENVIRONMENT_VARIABLES: [(&str, Field); 3] = [
    ("TOUCA_API_KEY", Field::ApiKey),
    ("TOUCA_API_URL", Field::ApiUrl),
    ("TOUCA_TEST_VERSION", Field::Version),
];

/// Fill credentials and version from `TOUCA_*` variables. Empty values are ignored.
pub fn apply_environment_variables(
    options: &mut Options,
    env: &impl Environment,
) -> Result<(), ToucaError> {
    let source: OptionSource = ENVIRONMENT_VARIABLES
        .iter()
        .filter_map(|(name, field)| {
            env.var(name)
                .filter(|value| !value.is_empty())
                .map(|value| (field.name().to_string(), Value::String(value)))
        })
        .collect();
    assign_options(options, &source)
}
