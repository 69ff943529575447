use url::Url;

use crate::domain::{Options, ToucaError};

/// Separates the API base path from the team/suite/version slugs.
const SLUG_MARKER: &str = "/@/";

/// Canonicalize `api_url` and extract slugs embedded in it.
///
/// `api.touca.io/@/acme/students/v1.0` becomes `https://api.touca.io` with
/// team `acme`, suite `students` and version `v1.0`. Slugs only fill options
/// that are still unset.
pub fn apply_api_url(options: &mut Options) -> Result<(), ToucaError> {
    let Some(raw) = options.api_url.clone().filter(|url| !url.is_empty()) else {
        return Ok(());
    };
    let with_scheme = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw
    } else {
        format!("https://{}", raw)
    };
    let url = Url::parse(&with_scheme).map_err(|_| ToucaError::invalid("api_url"))?;
    let origin = url.origin();
    if !origin.is_tuple() {
        return Err(ToucaError::invalid("api_url"));
    }

    let mut parts = url.path().splitn(2, SLUG_MARKER);
    let base = segments(parts.next().unwrap_or_default());
    let slugs = parts.next().map(segments).unwrap_or_default();

    let mut canonical = origin.ascii_serialization();
    if !base.is_empty() {
        canonical.push('/');
        canonical.push_str(&base.join("/"));
    }
    tracing::debug!(api_url = %canonical, slugs = slugs.len(), "Decomposed API URL");
    options.api_url = Some(canonical);

    for (slot, slug) in [&mut options.team, &mut options.suite, &mut options.version]
        .into_iter()
        .zip(slugs)
    {
        if slot.is_none() {
            *slot = Some(slug.to_string());
        }
    }
    Ok(())
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decompose(api_url: &str) -> Options {
        let mut options = Options { api_url: Some(api_url.to_string()), ..Options::default() };
        apply_api_url(&mut options).unwrap();
        options
    }

    #[test]
    fn extracts_slugs_and_adds_scheme() {
        let options = decompose("api.touca.io/@/acme/students/v1.0");
        assert_eq!(options.api_url.as_deref(), Some("https://api.touca.io"));
        assert_eq!(options.team.as_deref(), Some("acme"));
        assert_eq!(options.suite.as_deref(), Some("students"));
        assert_eq!(options.version.as_deref(), Some("v1.0"));
    }

    #[test]
    fn keeps_base_path_and_port() {
        let options = decompose("http://localhost:8080/api/@/acme/students/");
        assert_eq!(options.api_url.as_deref(), Some("http://localhost:8080/api"));
        assert_eq!(options.team.as_deref(), Some("acme"));
        assert_eq!(options.suite.as_deref(), Some("students"));
        assert!(options.version.is_none());
    }

    #[test]
    fn short_url_drops_trailing_slash() {
        let options = decompose("https://api.touca.io/");
        assert_eq!(options.api_url.as_deref(), Some("https://api.touca.io"));
        assert!(options.team.is_none());
    }

    #[test]
    fn slugs_do_not_override_existing_options() {
        let mut options = Options {
            api_url: Some("https://api.touca.io/@/acme/students/v1.0".to_string()),
            version: Some("v2.0".to_string()),
            ..Options::default()
        };
        apply_api_url(&mut options).unwrap();

        assert_eq!(options.team.as_deref(), Some("acme"));
        assert_eq!(options.version.as_deref(), Some("v2.0"));
    }

    #[test]
    fn leaves_missing_url_alone() {
        let mut options = Options::default();
        apply_api_url(&mut options).unwrap();
        assert!(options.api_url.is_none());
    }

    #[test]
    fn rejects_unparsable_url() {
        let mut options = Options { api_url: Some("http://".to_string()), ..Options::default() };
        assert_eq!(apply_api_url(&mut options), Err(ToucaError::invalid("api_url")));
    }
}
