use crate::domain::{DEFAULT_API_URL, Options, has_value};

/// Derive defaults shared by every client.
///
/// A run without credentials is offline even if `offline` was set to false,
/// and an API key alone targets the production server.
pub fn apply_core_options(options: &mut Options) {
    options.concurrency.get_or_insert(true);
    if !options.is_offline() {
        options.offline = Some(!has_value(&options.api_key) && !has_value(&options.api_url));
    }
    if has_value(&options.api_key) && !has_value(&options.api_url) {
        options.api_url = Some(DEFAULT_API_URL.to_string());
    }
}
