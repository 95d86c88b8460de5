//! Route actions.
//!
//! An action is the target a route resolves to. The set of shapes is a
//! closed tagged variant rather than a type-inspection scheme: a bare
//! handler closure, a controller/action name pair, or a templated pair whose
//! string fields still contain `{param}` placeholder tokens to be filled in
//! from the captured parameters.
//!
//! `Action` is generic over `R`, the value a handler invocation produces.
//! The routing layers never inspect `R`; only an
//! [`ExecutionStrategy`](crate::ExecutionStrategy) gives it meaning.

use crate::params::RouteParams;
use std::fmt;
use std::sync::Arc;

/// A handler closure held by an [`Action::Handler`].
pub type HandlerFn<R> = Arc<dyn Fn(&RouteParams) -> R + Send + Sync>;

/// The target a matched route dispatches to.
pub enum Action<R> {
    /// A bare callable, invoked directly with the captured parameters.
    Handler(HandlerFn<R>),
    /// A controller/action name pair, resolved by the execution strategy.
    Controller {
        /// Controller name, e.g. `UserController`.
        name: String,
        /// Action (method) name on that controller, e.g. `show`.
        action: String,
    },
    /// A controller/action pair whose fields may contain `{param}` tokens.
    ///
    /// The action resolver substitutes captured values into both fields
    /// before the strategy sees the action.
    Template {
        /// Controller name template.
        name: String,
        /// Action name template, e.g. `show{id}`.
        action: String,
    },
}

impl<R> Action<R> {
    /// Wrap a closure as a bare handler action.
    pub fn handler(f: impl Fn(&RouteParams) -> R + Send + Sync + 'static) -> Self {
        Action::Handler(Arc::new(f))
    }

    /// Build a controller/action pair.
    pub fn controller(name: impl Into<String>, action: impl Into<String>) -> Self {
        Action::Controller {
            name: name.into(),
            action: action.into(),
        }
    }

    /// Build a templated controller/action pair.
    pub fn template(name: impl Into<String>, action: impl Into<String>) -> Self {
        Action::Template {
            name: name.into(),
            action: action.into(),
        }
    }
}

// Manual impls: deriving would put unwanted bounds on `R`, and the handler
// variant holds a closure.

impl<R> Clone for Action<R> {
    fn clone(&self) -> Self {
        match self {
            Action::Handler(f) => Action::Handler(Arc::clone(f)),
            Action::Controller { name, action } => Action::Controller {
                name: name.clone(),
                action: action.clone(),
            },
            Action::Template { name, action } => Action::Template {
                name: name.clone(),
                action: action.clone(),
            },
        }
    }
}

impl<R> fmt::Debug for Action<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Handler(_) => f.write_str("Handler(..)"),
            Action::Controller { name, action } => f
                .debug_struct("Controller")
                .field("name", name)
                .field("action", action)
                .finish(),
            Action::Template { name, action } => f
                .debug_struct("Template")
                .field("name", name)
                .field("action", action)
                .finish(),
        }
    }
}

/// Handler actions compare by closure identity; the named variants compare
/// by their fields.
impl<R> PartialEq for Action<R> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Action::Handler(a), Action::Handler(b)) => Arc::ptr_eq(a, b),
            (
                Action::Controller { name, action },
                Action::Controller {
                    name: other_name,
                    action: other_action,
                },
            )
            | (
                Action::Template { name, action },
                Action::Template {
                    name: other_name,
                    action: other_action,
                },
            ) => name == other_name && action == other_action,
            _ => false,
        }
    }
}
