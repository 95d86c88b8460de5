//! Standard execution strategies.

use ruten_core::{Action, ExecutionStrategy, HandlerFn, RouteParams};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors from [`ControllerStrategy`] invocation.
///
/// These are strategy failures, not routing failures: the engine returns
/// them untouched inside its `Ok(..)` value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvokeError {
    /// No handler is registered for the controller/action pair.
    #[error("no handler registered for {name}::{action}")]
    UnknownAction {
        /// The controller name.
        name: String,
        /// The action name.
        action: String,
    },
}

/// A strategy that invokes handler closures directly and resolves
/// controller/action pairs through a registration table.
///
/// Templated actions are expected to have been resolved by the dispatch
/// engine before they arrive here; they are looked up exactly like plain
/// controller actions.
pub struct ControllerStrategy<R> {
    table: HashMap<String, HandlerFn<R>>,
}

impl<R> Default for ControllerStrategy<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> ControllerStrategy<R> {
    /// Create an empty strategy.
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Register a handler for a controller/action pair.
    pub fn register(
        mut self,
        name: &str,
        action: &str,
        handler: impl Fn(&RouteParams) -> R + Send + Sync + 'static,
    ) -> Self {
        self.table.insert(key(name, action), Arc::new(handler));
        self
    }

    /// The number of registered controller actions.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no controller actions are registered.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

fn key(name: &str, action: &str) -> String {
    format!("{name}::{action}")
}

impl<R> ExecutionStrategy<R> for ControllerStrategy<R> {
    type Output = Result<R, InvokeError>;

    fn invoke(&self, action: &Action<R>, params: RouteParams) -> Self::Output {
        match action {
            Action::Handler(handler) => Ok(handler(&params)),
            Action::Controller { name, action } | Action::Template { name, action } => {
                match self.table.get(&key(name, action)) {
                    Some(handler) => Ok(handler(&params)),
                    None => Err(InvokeError::UnknownAction {
                        name: name.clone(),
                        action: action.clone(),
                    }),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ControllerStrategy, InvokeError};
    use ruten_core::{Action, ExecutionStrategy, RouteParams};

    #[test]
    fn test_handler_actions_are_invoked_directly() {
        let strategy: ControllerStrategy<i32> = ControllerStrategy::new();
        let action = Action::handler(|_| 7);
        assert_eq!(strategy.invoke(&action, RouteParams::new()), Ok(7));
    }

    #[test]
    fn test_controller_actions_resolve_through_the_table() {
        let strategy = ControllerStrategy::new().register("UserController", "show", |params| {
            format!("user {}", params.get("id").unwrap_or("?"))
        });

        let mut params = RouteParams::new();
        params.insert("id", "42");
        let action = Action::controller("UserController", "show");
        assert_eq!(strategy.invoke(&action, params), Ok("user 42".to_string()));
    }

    #[test]
    fn test_unknown_pair_is_an_invoke_error() {
        let strategy: ControllerStrategy<()> = ControllerStrategy::new();
        let action = Action::controller("Nope", "missing");
        assert_eq!(
            strategy.invoke(&action, RouteParams::new()),
            Err(InvokeError::UnknownAction {
                name: "Nope".to_string(),
                action: "missing".to_string(),
            })
        );
    }
}
