//! # Dispatch Engine
//!
//! The orchestration core: given a method name and a raw URI, resolve the
//! request against a [`RouteCollection`] and hand the winning action to the
//! configured [`ExecutionStrategy`].
//!
//! # Resolution order
//!
//! 1. Canonicalize the method against the recognized set.
//! 2. Normalize the URI (path extraction + basepath stripping).
//! 3. Exact static lookup; literal paths dominate typical route sets, so
//!    this short-circuits before any pattern evaluation.
//! 4. Dynamic scan in registration order, first match wins.
//! 5. On a miss, the cross-method fallback scan decides between not-found
//!    and method-not-allowed.
//!
//! Dispatch is a pure computation over immutable route data; the only
//! observable effect of a call is the single strategy invocation. The
//! basepath is the engine's one piece of mutable configuration and should be
//! set at startup, not concurrently with in-flight calls.

use crate::{fallback, resolver, uri};
use regex::Captures;
use ruten_core::{
    DynamicEntry, ExecutionStrategy, HttpMethod, RouteCollection, RouteError, RouteMatch,
    RouteParams,
};

/// The dispatch engine: a route collection, an execution strategy, and the
/// basepath configuration.
pub struct DispatchEngine<C, S> {
    collection: C,
    strategy: S,
    base_path: String,
}

impl<C, S> DispatchEngine<C, S> {
    /// Create an engine over a collection and a strategy, with no basepath.
    pub fn new(collection: C, strategy: S) -> Self {
        Self {
            collection,
            strategy,
            base_path: String::new(),
        }
    }

    /// The configured basepath (empty when none is set).
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Configure the basepath stripped from every incoming URI.
    ///
    /// Stored with a leading slash and no trailing slash; `""` and `"/"`
    /// both disable stripping.
    pub fn set_base_path(&mut self, base_path: impl Into<String>) {
        let mut base_path: String = base_path.into();
        while base_path.ends_with('/') {
            base_path.pop();
        }
        if !base_path.is_empty() && !base_path.starts_with('/') {
            base_path.insert(0, '/');
        }
        self.base_path = base_path;
    }

    /// Read access to the underlying route collection.
    pub fn collection(&self) -> &C {
        &self.collection
    }

    /// Read access to the configured execution strategy.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Resolve `method` + `uri` and invoke the execution strategy.
    ///
    /// The strategy's output is returned untouched; strategy-level failures
    /// live inside `Ok(..)` and propagate unchanged.
    ///
    /// # Errors
    ///
    /// [`RouteError::UnsupportedMethod`], [`RouteError::MalformedUri`],
    /// [`RouteError::NotFound`] or [`RouteError::MethodNotAllowed`].
    pub fn dispatch<R>(&self, method: &str, uri: &str) -> Result<S::Output, RouteError>
    where
        C: RouteCollection<R>,
        S: ExecutionStrategy<R>,
    {
        let method: HttpMethod = method.parse()?;
        let path = uri::normalize(uri, &self.base_path)?;

        if let Some(action) = self.collection.static_route(method, &path) {
            #[cfg(feature = "tracing")]
            tracing::debug!(%method, %path, "static route matched");
            return Ok(self.strategy.invoke(action, RouteParams::new()));
        }

        if let Some(found) = match_dynamic(self.collection.dynamic_entries(method, None), &path) {
            #[cfg(feature = "tracing")]
            tracing::debug!(%method, %path, params = found.params.len(), "dynamic route matched");
            let action = resolver::resolve(found.action, &found.params);
            return Ok(self.strategy.invoke(&action, found.params));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(%method, %path, "no route matched");
        Err(fallback::routing_error(&self.collection, method, &path))
    }
}

/// Scan compiled dynamic entries in order and return the first match.
///
/// For the entry that matches, the participating capture-group count selects
/// which combined alternative matched; the target's parameter names are then
/// zipped against the participating group values in order. Padding groups
/// appended by the collection builder sit after the real captures, so the
/// zip never picks them up.
pub fn match_dynamic<'a, R: 'a>(
    entries: impl IntoIterator<Item = &'a DynamicEntry<R>>,
    path: &str,
) -> Option<RouteMatch<R>> {
    for entry in entries {
        let Some(caps) = entry.pattern().captures(path) else {
            continue;
        };
        let count = matched_group_count(&caps);
        // The builder guarantees a target for every count its alternatives
        // can produce; fall through if the collection broke that contract.
        let Some(target) = entry.target(count) else {
            continue;
        };

        let mut params = RouteParams::new();
        let values = caps.iter().skip(1).flatten();
        for (name, value) in target.params.iter().zip(values) {
            params.insert(name.clone(), value.as_str());
        }
        return Some(RouteMatch {
            action: target.action.clone(),
            params,
        });
    }
    None
}

/// Count the capture groups that participated in a match.
///
/// This is the discriminator for combined patterns: each alternative in a
/// compiled entry is arranged to produce a distinct participating count, so
/// the count alone identifies which route alternative matched.
pub fn matched_group_count(caps: &Captures<'_>) -> usize {
    caps.iter().skip(1).flatten().count()
}
