use crate::domain::{Field, Options, ToucaError, has_value};

fn require(entries: &[(Field, &Option<String>)]) -> Result<(), ToucaError> {
    for (field, value) in entries {
        if value.is_none() {
            return Err(ToucaError::missing(field.name()));
        }
    }
    Ok(())
}

fn require_credentials(options: &Options) -> Result<(), ToucaError> {
    if options.is_offline() {
        return Ok(());
    }
    require(&[(Field::ApiKey, &options.api_key), (Field::ApiUrl, &options.api_url)])
}

/// Check core options and report whether the client is fully configured.
///
/// Raises when team, suite and version are only partly present, or when an
/// online run lacks credentials. Returns `false` when the slugs are present
/// but some are blank.
pub fn validate_core_options(options: &Options) -> Result<bool, ToucaError> {
    let slugs = [&options.team, &options.suite, &options.version];
    if slugs.iter().any(|slug| slug.is_some()) {
        require(&[
            (Field::Team, &options.team),
            (Field::Suite, &options.suite),
            (Field::Version, &options.version),
        ])?;
    }
    require_credentials(options)?;

    let any_slug = slugs.iter().any(|slug| has_value(slug));
    let all_slugs = slugs.iter().all(|slug| has_value(slug));
    if any_slug && !all_slugs {
        return Ok(false);
    }
    if options.is_offline() {
        return Ok(true);
    }
    Ok(has_value(&options.api_key) && has_value(&options.api_url))
}

/// Check that every workflow is ready to run. Stops at the first violation.
pub fn validate_runner_options(options: &Options) -> Result<(), ToucaError> {
    require_credentials(options)?;
    let Some(workflows) = &options.workflows else {
        return Err(ToucaError::missing(Field::Version.name()));
    };
    if !workflows.iter().all(|workflow| has_value(&workflow.version)) {
        return Err(ToucaError::missing(Field::Version.name()));
    }
    if workflows.iter().any(|workflow| workflow.testcases.is_empty()) {
        return Err(ToucaError::missing(Field::Testcases.name()));
    }
    Ok(())
}
