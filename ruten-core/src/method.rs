//! HTTP method vocabulary.
//!
//! The recognized method set is a closed, compile-time constant table.
//! Parsing is case-insensitive; anything outside the table is rejected with
//! [`RouteError::UnsupportedMethod`] before routing even starts, so callers
//! can tell a misconfigured request apart from a routing miss.

use crate::error::RouteError;

/// A recognized HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
    /// HEAD
    Head,
    /// OPTIONS
    Options,
}

/// The full recognized method set, in canonical order.
///
/// Shared by value; the order here determines the order of the allowed-method
/// set reported by [`RouteError::MethodNotAllowed`].
pub const METHODS: [HttpMethod; 7] = [
    HttpMethod::Get,
    HttpMethod::Post,
    HttpMethod::Put,
    HttpMethod::Patch,
    HttpMethod::Delete,
    HttpMethod::Head,
    HttpMethod::Options,
];

impl HttpMethod {
    /// The canonical (uppercase) name of this method.
    pub const fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }

    /// Parse a method name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnsupportedMethod`] for any name outside
    /// [`METHODS`].
    pub fn parse(name: &str) -> Result<Self, RouteError> {
        METHODS
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| RouteError::UnsupportedMethod {
                method: name.to_string(),
            })
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::parse(s)
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{HttpMethod, METHODS};
    use crate::error::RouteError;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(HttpMethod::parse("GET").unwrap(), HttpMethod::Get);
        assert_eq!(HttpMethod::parse("get").unwrap(), HttpMethod::Get);
        assert_eq!(HttpMethod::parse("Delete").unwrap(), HttpMethod::Delete);
    }

    #[test]
    fn test_parse_rejects_unknown_methods() {
        let err = HttpMethod::parse("TRACE").unwrap_err();
        assert!(matches!(
            err,
            RouteError::UnsupportedMethod { method } if method == "TRACE"
        ));
    }

    #[test]
    fn test_display_is_canonical() {
        for method in METHODS {
            assert_eq!(method.to_string(), method.as_str());
            assert!(method.as_str().chars().all(|c| c.is_ascii_uppercase()));
        }
    }
}
