//! Back-fill workflow versions and test cases from the Touca server.

use serde::{Deserialize, Serialize};

use crate::domain::{Options, Testcases, ToucaError, has_value};
use crate::ports::{Method, Transport};

const OPTIONS_PATH: &str = "/client/options";

/// Per-workflow query sent to the server.
///
/// An empty `testcases` list asks the server to supply them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteOptionsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testcases: Option<Vec<String>>,
}

/// Server-resolved options for one workflow.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteOptions {
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub suite: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub testcases: Option<Vec<String>>,
}

/// Send all queries in one batch.
pub fn fetch_remote_options(
    queries: &[RemoteOptionsQuery],
    transport: &impl Transport,
) -> Result<Vec<RemoteOptions>, ToucaError> {
    let payload = serde_json::to_string(queries).map_err(|_| ToucaError::ConfigOptionFetch)?;
    let response = transport.request(Method::Post, OPTIONS_PATH, Some(&payload)).map_err(|e| {
        tracing::warn!(error = %e, "Remote options request failed");
        ToucaError::ConfigOptionFetch
    })?;
    match response.status {
        200 => {}
        401 => return Err(ToucaError::AuthInvalidKey),
        status => {
            tracing::warn!(status, "Unexpected status fetching remote options");
            return Err(ToucaError::ConfigOptionFetch);
        }
    }
    serde_json::from_str(&response.body).map_err(|_| ToucaError::ConfigOptionFetch)
}

/// Fill missing workflow versions and test cases from the server.
///
/// Only fields the server returns are overwritten.
pub fn apply_remote_options(
    options: &mut Options,
    transport: &impl Transport,
) -> Result<(), ToucaError> {
    if options.is_offline() || !has_value(&options.api_key) || !has_value(&options.api_url) {
        return Ok(());
    }
    let Some(workflows) = options.workflows.as_mut().filter(|w| !w.is_empty()) else {
        return Ok(());
    };

    let queries: Vec<RemoteOptionsQuery> = workflows
        .iter()
        .map(|workflow| RemoteOptionsQuery {
            team: options.team.clone(),
            suite: workflow.suite.clone(),
            version: workflow.version.clone(),
            testcases: workflow.testcases.is_empty().then(Vec::new),
        })
        .collect();
    let resolved = fetch_remote_options(&queries, transport)?;
    tracing::debug!(queried = queries.len(), resolved = resolved.len(), "Fetched remote options");

    for remote in resolved {
        let Some(workflow) = workflows.iter_mut().find(|w| w.suite == remote.suite) else {
            continue;
        };
        if let Some(version) = remote.version.filter(|v| !v.is_empty()) {
            workflow.version = Some(version);
        }
        if let Some(testcases) = remote.testcases {
            workflow.testcases = Testcases::Fixed(testcases);
        }
    }
    Ok(())
}
