//! Authentication handshake and server readiness check.

use serde_json::Value;

use crate::domain::{Options, ToucaError, has_value};
use crate::ports::{Method, Transport};

const PLATFORM_PATH: &str = "/platform";

/// Authenticate the transport when the run is online and fully credentialed.
pub fn authenticate(options: &Options, transport: &mut impl Transport) -> Result<(), ToucaError> {
    if options.is_offline() {
        return Ok(());
    }
    let (Some(api_url), Some(api_key)) = (
        options.api_url.as_deref().filter(|v| !v.is_empty()),
        options.api_key.as_deref().filter(|v| !v.is_empty()),
    ) else {
        return Ok(());
    };
    transport.configure(api_url, api_key)?;
    tracing::debug!(api_url = api_url, "Transport configured");
    Ok(())
}

/// Check that the server is ready and record its web application address.
///
/// Runs only after a handshake, so without an API key the check is skipped
/// and validation reports the missing key.
pub fn apply_server_options(
    options: &mut Options,
    transport: &impl Transport,
) -> Result<(), ToucaError> {
    if options.is_offline() || !has_value(&options.api_url) || !has_value(&options.api_key) {
        return Ok(());
    }
    let response = transport.request(Method::Get, PLATFORM_PATH, None).map_err(|e| {
        tracing::warn!(error = %e, "Platform status request failed");
        ToucaError::AuthServerDown
    })?;
    if response.status != 200 {
        return Err(ToucaError::AuthServerDown);
    }
    let body: Value =
        serde_json::from_str(&response.body).map_err(|_| ToucaError::AuthServerDown)?;
    if !body.get("ready").is_some_and(is_truthy) {
        return Err(ToucaError::AuthServerDown);
    }
    if let Some(webapp) = body.get("webapp").and_then(Value::as_str) {
        tracing::info!(web_url = webapp, "Discovered Touca web application");
        options.web_url = Some(webapp.to_string());
    }
    Ok(())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
