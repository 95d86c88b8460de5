//! Execution strategy contract.

use crate::action::Action;
use crate::params::RouteParams;

/// The component that actually invokes a resolved action.
///
/// The dispatch engine hands over the action and the captured parameters and
/// returns `Output` untouched. Whatever invocation means (calling a closure,
/// instantiating a controller, queueing work) and whatever failure looks
/// like, both are owned entirely by the strategy.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot invoke actions producing `{R}`",
    label = "missing `ExecutionStrategy` implementation",
    note = "Implement `ExecutionStrategy<{R}>` to execute resolved route actions."
)]
pub trait ExecutionStrategy<R>: Send + Sync {
    /// What an invocation produces. The engine never inspects this.
    type Output;

    /// Invoke `action` with the captured parameters.
    fn invoke(&self, action: &Action<R>, params: RouteParams) -> Self::Output;
}
