//! Route storage contract.

use crate::action::Action;
use crate::method::HttpMethod;
use crate::route::DynamicEntry;

/// The store the dispatch engine resolves routes against.
///
/// A collection is built once, before dispatch begins, and is read-only for
/// the engine's lifetime: implementations hand out borrows, never mutate on
/// lookup, and must be safe to share across concurrent dispatch calls.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot serve routes for handler output `{R}`",
    label = "missing `RouteCollection` implementation",
    note = "Implement `RouteCollection<{R}>` to let a dispatch engine resolve routes against this store."
)]
pub trait RouteCollection<R>: Send + Sync {
    /// Exact-path lookup in the static table for one method.
    fn static_route(&self, method: HttpMethod, path: &str) -> Option<&Action<R>>;

    /// Iterate the method's compiled dynamic entries in registration order.
    ///
    /// With `depth_hint` set, implementations may narrow the iteration to
    /// entries whose declared segment depth equals the hint. This is a cheap
    /// slash-count filter used by the cross-method fallback scan, not a
    /// guarantee about what the patterns can match.
    fn dynamic_entries<'a>(
        &'a self,
        method: HttpMethod,
        depth_hint: Option<usize>,
    ) -> Box<dyn Iterator<Item = &'a DynamicEntry<R>> + Send + 'a>
    where
        R: 'a;
}
