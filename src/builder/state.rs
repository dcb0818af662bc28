//! Builder for individual states.

use crate::core::{AutomationFn, AutomationResult, BoxError, StateHook, Transition};
use futures::FutureExt;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;

/// Fluent builder for one state of a machine.
///
/// Collects the state's outgoing transitions, its automation callback (which
/// makes the state transient) and its notification hooks. Validation of the
/// collected data (duplicate symbols, dangling targets) happens when the
/// owning [`StateMachineBuilder`](crate::builder::StateMachineBuilder) builds.
pub struct StateBuilder {
    id: String,
    transitions: Vec<Transition>,
    automation: Option<AutomationFn>,
    entry_hooks: Vec<StateHook>,
    leave_hooks: Vec<StateHook>,
}

impl StateBuilder {
    /// Start building the state with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            transitions: Vec::new(),
            automation: None,
            entry_hooks: Vec::new(),
            leave_hooks: Vec::new(),
        }
    }

    /// Add an outgoing transition: reading `symbol` in this state moves the
    /// machine to `target`.
    pub fn on(mut self, symbol: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.push(Transition::new(symbol, target));
        self
    }

    /// Attach the automation callback, making this state transient: whenever
    /// the machine enters it, the callback runs and its result is consumed as
    /// the next input symbol.
    pub fn automation<F, Fut>(mut self, callback: F) -> Self
    where
        F: Fn(Vec<Value>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = AutomationResult> + Send + 'static,
    {
        self.automation = Some(Arc::new(move |params| callback(params).boxed()));
        self
    }

    /// Register a hook fired after the machine enters this state. Receives
    /// `(source_id, symbol)`.
    pub fn on_entry<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, &str) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.entry_hooks.push(Box::new(hook));
        self
    }

    /// Register a hook fired before the machine leaves this state. Receives
    /// `(target_id, symbol)`.
    pub fn on_leave<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, &str) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.leave_hooks.push(Box::new(hook));
        self
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        String,
        Vec<Transition>,
        Option<AutomationFn>,
        Vec<StateHook>,
        Vec<StateHook>,
    ) {
        (
            self.id,
            self.transitions,
            self.automation,
            self.entry_hooks,
            self.leave_hooks,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_transitions_in_declaration_order() {
        let (id, transitions, automation, ..) = StateBuilder::new("q1")
            .on("up", "q2")
            .on("down", "q0")
            .into_parts();

        assert_eq!(id, "q1");
        assert!(automation.is_none());
        let pairs: Vec<(&str, &str)> = transitions
            .iter()
            .map(|t| (t.symbol(), t.target()))
            .collect();
        assert_eq!(pairs, vec![("up", "q2"), ("down", "q0")]);
    }

    #[test]
    fn automation_marks_the_state_for_transience() {
        let (_, _, automation, ..) = StateBuilder::new("loader")
            .automation(|_params| async { Ok(Some("done".to_string())) })
            .into_parts();

        assert!(automation.is_some());
    }
}
