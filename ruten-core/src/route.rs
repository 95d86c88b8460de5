//! Compiled route model.
//!
//! Dynamic routes are stored as *combined* patterns: several logically
//! distinct routes share one compiled regex, joined by alternation, so a
//! single match attempt covers all of them. The alternative that actually
//! matched is identified by the number of capture groups that participated
//! in the match: each alternative is arranged (by the collection builder)
//! to own a distinct count. That count keys the disambiguation map back to
//! the route's action template and its ordered parameter names.

use crate::action::Action;
use crate::params::RouteParams;
use regex::Regex;
use std::collections::HashMap;

/// One route alternative inside a [`DynamicEntry`]: the action template and
/// the parameter names its capture groups bind to, in declaration order.
#[derive(Debug, Clone)]
pub struct RouteTarget<R> {
    /// The action template this alternative dispatches to.
    pub action: Action<R>,
    /// Parameter names in capture-group order.
    pub params: Vec<String>,
}

/// A compiled dynamic-route entry: one combined pattern plus the
/// disambiguation map from participating-group count to route target.
#[derive(Debug)]
pub struct DynamicEntry<R> {
    pattern: Regex,
    depth: usize,
    targets: HashMap<usize, RouteTarget<R>>,
}

impl<R> DynamicEntry<R> {
    /// Build an entry from a compiled pattern, its declared path-segment
    /// depth, and the group-count disambiguation map.
    ///
    /// Every alternative in `pattern` must produce a distinct participating
    /// group count present in `targets`; that is the builder's contract and
    /// is not re-validated here.
    pub fn new(pattern: Regex, depth: usize, targets: HashMap<usize, RouteTarget<R>>) -> Self {
        Self {
            pattern,
            depth,
            targets,
        }
    }

    /// The combined compiled pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// The declared path-segment depth: the number of literal `/` separators
    /// in the route patterns this entry was compiled from.
    ///
    /// Best-effort metadata: a parameter whose custom pattern spans segments
    /// can match paths of a different depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Look up the route target for a participating group count.
    pub fn target(&self, group_count: usize) -> Option<&RouteTarget<R>> {
        self.targets.get(&group_count)
    }
}

/// The transient result of a successful dynamic match.
#[derive(Debug)]
pub struct RouteMatch<R> {
    /// The matched route's action (still a template at this point).
    pub action: Action<R>,
    /// The captured parameters, zipped name-to-value in declaration order.
    pub params: RouteParams,
}

impl<R> Clone for RouteMatch<R> {
    fn clone(&self) -> Self {
        Self {
            action: self.action.clone(),
            params: self.params.clone(),
        }
    }
}
