//! Request URI normalization.
//!
//! Dispatch matches against a bare absolute path. Incoming request targets
//! may be origin-form (`/users/42?page=2`) or absolute-form
//! (`http://host/users/42`); both are reduced to their path component, and a
//! configured basepath prefix is stripped off before matching.

use ruten_core::RouteError;

/// Reduce a raw request URI to the path routing operates on.
///
/// Scheme, authority, query string and fragment are discarded; `base_path`
/// (already normalized by the engine, empty for none) is stripped from the
/// front. Stripping is idempotent: a path that no longer carries the prefix
/// passes through unchanged.
///
/// # Errors
///
/// [`RouteError::MalformedUri`] when the input cannot be parsed into a path
/// at all.
pub fn normalize(raw: &str, base_path: &str) -> Result<String, RouteError> {
    // Fragments never reach a well-behaved server, but the contract is to
    // drop them, and http::Uri has no fragment component.
    let without_fragment = raw.split_once('#').map_or(raw, |(head, _)| head);

    let uri: http::Uri = without_fragment
        .parse()
        .map_err(|_| RouteError::MalformedUri {
            uri: raw.to_string(),
        })?;

    let path = match uri.path() {
        "" => "/",
        path => path,
    };
    Ok(strip_base_path(path, base_path).to_string())
}

fn strip_base_path<'a>(path: &'a str, base_path: &str) -> &'a str {
    if base_path.is_empty() {
        return path;
    }
    match path.strip_prefix(base_path) {
        // The basepath itself maps to the root route.
        Some("") => "/",
        // Only strip at a segment boundary: "/apifoo" keeps its prefix.
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::normalize;
    use ruten_core::RouteError;

    #[test]
    fn test_query_and_fragment_are_discarded() {
        assert_eq!(normalize("/users/42?page=2", "").unwrap(), "/users/42");
        assert_eq!(normalize("/users/42#section", "").unwrap(), "/users/42");
        assert_eq!(normalize("/users/42?page=2#x", "").unwrap(), "/users/42");
    }

    #[test]
    fn test_absolute_form_reduces_to_path() {
        assert_eq!(
            normalize("http://example.com/users/42?page=2", "").unwrap(),
            "/users/42"
        );
        assert_eq!(normalize("http://example.com", "").unwrap(), "/");
    }

    #[test]
    fn test_base_path_is_stripped_at_segment_boundary() {
        assert_eq!(normalize("/api/users", "/api").unwrap(), "/users");
        assert_eq!(normalize("/api", "/api").unwrap(), "/");
        assert_eq!(normalize("/apifoo", "/api").unwrap(), "/apifoo");
    }

    #[test]
    fn test_stripping_is_idempotent() {
        let once = normalize("/api/users", "/api").unwrap();
        let twice = normalize(&once, "/api").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unparseable_input_is_malformed() {
        for raw in ["", "/fo o", "/users/{42"] {
            let err = normalize(raw, "").unwrap_err();
            assert!(
                matches!(err, RouteError::MalformedUri { uri } if uri == raw),
                "expected MalformedUri for {raw:?}"
            );
        }
    }
}
