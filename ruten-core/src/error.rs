//! Error types for Ruten.
//!
//! All routing failures are raised synchronously from dispatch and are never
//! retried internally: routing is deterministic, so retrying with the same
//! input never helps. Failures inside the execution strategy are not part of
//! this taxonomy and propagate through the strategy's own output type.

use crate::method::HttpMethod;
use thiserror::Error;

/// Errors raised while resolving a request to a route.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The requested HTTP method is outside the recognized set.
    ///
    /// This is a configuration-level failure, not a routing miss; the
    /// transport layer should map it to a protocol bad-request response.
    #[error("unsupported HTTP method: {method}")]
    UnsupportedMethod {
        /// The method name as received.
        method: String,
    },

    /// The request URI could not be reduced to a path.
    #[error("malformed request uri: {uri}")]
    MalformedUri {
        /// The URI as received.
        uri: String,
    },

    /// No route matches the path under any recognized method.
    #[error("no route found for {method} {uri}")]
    NotFound {
        /// The requested method.
        method: HttpMethod,
        /// The normalized request path.
        uri: String,
    },

    /// The path matches under other methods, but not the requested one.
    #[error("method {method} not allowed for {uri} (allowed: {})", fmt_methods(.allowed))]
    MethodNotAllowed {
        /// The requested method.
        method: HttpMethod,
        /// The normalized request path.
        uri: String,
        /// Every other method that matches this path, in [`crate::METHODS`]
        /// order.
        allowed: Vec<HttpMethod>,
    },
}

fn fmt_methods(methods: &[HttpMethod]) -> String {
    methods
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::RouteError;
    use crate::method::HttpMethod;

    #[test]
    fn test_method_not_allowed_display_lists_methods() {
        let err = RouteError::MethodNotAllowed {
            method: HttpMethod::Post,
            uri: "/users/42".to_string(),
            allowed: vec![HttpMethod::Get, HttpMethod::Delete],
        };
        assert_eq!(
            err.to_string(),
            "method POST not allowed for /users/42 (allowed: GET, DELETE)"
        );
    }

    #[test]
    fn test_not_found_display() {
        let err = RouteError::NotFound {
            method: HttpMethod::Get,
            uri: "/nope".to_string(),
        };
        assert_eq!(err.to_string(), "no route found for GET /nope");
    }
}
