//! Cross-method fallback scan.
//!
//! When a request misses under its own method, the engine still has to say
//! *why*: "no such resource" or "resource exists, wrong method". This module
//! answers that by probing the same path under every other recognized
//! method. The scan is O(methods × routes) and runs only on the miss path,
//! never on a hit.
//!
//! Dynamic probing is narrowed to entries whose declared segment depth
//! equals the request path's slash count. That filter is a cheap heuristic
//! over the pattern *source*, not a guarantee about what the pattern can
//! match: a parameter whose custom pattern crosses segment boundaries is
//! under-selected here and will not be reported as an allowed method.

use crate::dispatch::match_dynamic;
use ruten_core::{HttpMethod, METHODS, RouteCollection, RouteError};

/// Every method other than `requested` under which `path` would resolve,
/// in [`METHODS`] order.
pub fn allowed_methods<R, C>(collection: &C, requested: HttpMethod, path: &str) -> Vec<HttpMethod>
where
    C: RouteCollection<R> + ?Sized,
{
    let depth = segment_count(path);
    METHODS
        .into_iter()
        .filter(|&method| method != requested)
        .filter(|&method| {
            collection.static_route(method, path).is_some()
                || match_dynamic(collection.dynamic_entries(method, Some(depth)), path).is_some()
        })
        .collect()
}

/// Build the routing error for a miss: method-not-allowed when the path
/// resolves under other methods, not-found otherwise.
pub(crate) fn routing_error<R, C>(collection: &C, method: HttpMethod, path: &str) -> RouteError
where
    C: RouteCollection<R> + ?Sized,
{
    let allowed = allowed_methods(collection, method, path);
    if allowed.is_empty() {
        RouteError::NotFound {
            method,
            uri: path.to_string(),
        }
    } else {
        RouteError::MethodNotAllowed {
            method,
            uri: path.to_string(),
            allowed,
        }
    }
}

fn segment_count(path: &str) -> usize {
    path.matches('/').count()
}
