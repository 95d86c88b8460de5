//! Standard regex-backed route collection.
//!
//! Routes are registered through [`CollectionBuilder`] and frozen into a
//! [`RegexCollection`] before dispatch begins. Literal patterns land in a
//! per-method static table; parameterized patterns are compiled into
//! *combined* entries: consecutive dynamic routes of the same declared depth
//! are joined into one alternation regex, with each alternative padded by
//! empty groups to a distinct capture-group count. One match attempt then
//! covers a whole chunk, and the participating-group count of a successful
//! match identifies the route.
//!
//! Chunking never reorders routes, so first-match-wins semantics follow
//! registration order exactly.

mod pattern;

use self::pattern::ParsedPattern;
use regex::Regex;
use ruten_core::{Action, DynamicEntry, HttpMethod, RouteCollection, RouteTarget};
use std::collections::HashMap;
use thiserror::Error;

/// Upper bound on alternatives per combined pattern.
const CHUNK_SIZE: usize = 10;

/// Errors raised while registering or compiling routes.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A static path was registered twice for the same method.
    #[error("duplicate route: {method} {path}")]
    DuplicateRoute {
        /// The method the path was registered under.
        method: HttpMethod,
        /// The conflicting path.
        path: String,
    },

    /// The route pattern is not syntactically valid.
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A parameter name appears twice in one pattern.
    #[error("duplicate parameter `{name}` in pattern `{pattern}`")]
    DuplicateParam {
        /// The offending pattern.
        pattern: String,
        /// The repeated name.
        name: String,
    },

    /// The combined pattern failed to compile.
    #[error("failed to compile route pattern: {0}")]
    Regex(#[from] regex::Error),
}

#[derive(Debug)]
struct PendingRoute<R> {
    regex: String,
    params: Vec<String>,
    depth: usize,
    action: Action<R>,
}

/// A frozen route store: per-method static table plus compiled dynamic
/// entries in registration order.
pub struct RegexCollection<R> {
    statics: HashMap<HttpMethod, HashMap<String, Action<R>>>,
    dynamics: HashMap<HttpMethod, Vec<DynamicEntry<R>>>,
}

impl<R> RegexCollection<R> {
    /// Start building a collection.
    pub fn builder() -> CollectionBuilder<R> {
        CollectionBuilder::new()
    }

    /// The number of registered static routes across all methods.
    pub fn static_len(&self) -> usize {
        self.statics.values().map(HashMap::len).sum()
    }

    /// The number of compiled dynamic entries across all methods.
    pub fn dynamic_len(&self) -> usize {
        self.dynamics.values().map(Vec::len).sum()
    }
}

impl<R> RouteCollection<R> for RegexCollection<R> {
    fn static_route(&self, method: HttpMethod, path: &str) -> Option<&Action<R>> {
        self.statics.get(&method)?.get(path)
    }

    fn dynamic_entries<'a>(
        &'a self,
        method: HttpMethod,
        depth_hint: Option<usize>,
    ) -> Box<dyn Iterator<Item = &'a DynamicEntry<R>> + Send + 'a>
    where
        R: 'a,
    {
        let Some(entries) = self.dynamics.get(&method) else {
            return Box::new(std::iter::empty());
        };
        match depth_hint {
            None => Box::new(entries.iter()),
            Some(depth) => Box::new(entries.iter().filter(move |e| e.depth() == depth)),
        }
    }
}

/// Builder for [`RegexCollection`].
///
/// Registration order is preserved and is semantically significant: among
/// dynamic routes of one method, the earliest registered route that matches
/// a path wins.
#[derive(Debug)]
pub struct CollectionBuilder<R> {
    statics: HashMap<HttpMethod, HashMap<String, Action<R>>>,
    pending: HashMap<HttpMethod, Vec<PendingRoute<R>>>,
}

impl<R> Default for CollectionBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> CollectionBuilder<R> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            statics: HashMap::new(),
            pending: HashMap::new(),
        }
    }

    /// Register a route.
    ///
    /// `pattern` is an absolute path, optionally with `{name}` or
    /// `{name:regex}` placeholder segments; a pattern without placeholders
    /// is a static route.
    ///
    /// # Errors
    ///
    /// [`BuildError::DuplicateRoute`] for an already-registered static path,
    /// [`BuildError::InvalidPattern`] / [`BuildError::DuplicateParam`] for
    /// malformed patterns.
    pub fn route(
        mut self,
        method: HttpMethod,
        pattern: &str,
        action: Action<R>,
    ) -> Result<Self, BuildError> {
        match pattern::parse(pattern)? {
            ParsedPattern::Static(path) => {
                let table = self.statics.entry(method).or_default();
                if table.contains_key(&path) {
                    return Err(BuildError::DuplicateRoute { method, path });
                }
                table.insert(path, action);
            }
            ParsedPattern::Dynamic {
                regex,
                params,
                depth,
            } => {
                self.pending.entry(method).or_default().push(PendingRoute {
                    regex,
                    params,
                    depth,
                    action,
                });
            }
        }
        Ok(self)
    }

    /// Compile all registered routes into a frozen collection.
    ///
    /// # Errors
    ///
    /// [`BuildError::Regex`] if a combined pattern fails to compile.
    pub fn build(self) -> Result<RegexCollection<R>, BuildError> {
        let mut dynamics = HashMap::new();
        for (method, routes) in self.pending {
            let mut entries = Vec::new();
            let mut chunk: Vec<PendingRoute<R>> = Vec::new();
            for route in routes {
                let split = chunk.len() >= CHUNK_SIZE
                    || chunk.first().is_some_and(|first| first.depth != route.depth);
                if split {
                    entries.push(compile_chunk(std::mem::take(&mut chunk))?);
                }
                chunk.push(route);
            }
            if !chunk.is_empty() {
                entries.push(compile_chunk(chunk)?);
            }
            dynamics.insert(method, entries);
        }
        Ok(RegexCollection {
            statics: self.statics,
            dynamics,
        })
    }
}

/// Compile one chunk of same-depth routes into a combined entry.
///
/// Group counts are made distinct by strictly increasing padding: every
/// alternative is appended enough `()` groups that its participating count
/// exceeds that of all earlier alternatives.
fn compile_chunk<R>(chunk: Vec<PendingRoute<R>>) -> Result<DynamicEntry<R>, BuildError> {
    let depth = chunk.first().map_or(0, |route| route.depth);
    let mut alternatives = Vec::with_capacity(chunk.len());
    let mut targets = HashMap::with_capacity(chunk.len());
    let mut group_count = 0usize;

    for route in chunk {
        let vars = route.params.len();
        group_count = group_count.max(vars);
        let padding = "()".repeat(group_count - vars);
        alternatives.push(format!("{}{}", route.regex, padding));
        targets.insert(
            group_count,
            RouteTarget {
                action: route.action,
                params: route.params,
            },
        );
        group_count += 1;
    }

    let pattern = Regex::new(&format!("^(?:{})$", alternatives.join("|")))?;
    Ok(DynamicEntry::new(pattern, depth, targets))
}
