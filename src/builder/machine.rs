//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{BoxError, ChangeHook, State};
use crate::engine::StateMachine;
use std::collections::HashMap;

/// Fluent builder for a [`StateMachine`].
///
/// Gathers states, the initial state id, the optional default error symbol and
/// machine-wide change hooks, then validates the whole definition in one shot
/// when [`build`](StateMachineBuilder::build) is called. Construction is the
/// only way to obtain a machine; once built, the definition never changes.
///
/// # Example
///
/// ```rust
/// use relay::{StateBuilder, StateMachineBuilder};
///
/// let machine = StateMachineBuilder::new()
///     .state(StateBuilder::new("red").on("go", "green"))
///     .state(StateBuilder::new("green").on("stop", "red"))
///     .initial("red")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_state(), "red");
/// ```
pub struct StateMachineBuilder {
    states: Vec<StateBuilder>,
    initial: Option<String>,
    default_error_symbol: Option<String>,
    change_hooks: Vec<ChangeHook>,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            initial: None,
            default_error_symbol: None,
            change_hooks: Vec::new(),
        }
    }

    /// Add a state.
    pub fn state(mut self, state: StateBuilder) -> Self {
        self.states.push(state);
        self
    }

    /// Set the initial state id (required). The initial state must exist and
    /// must not be transient.
    pub fn initial(mut self, id: impl Into<String>) -> Self {
        self.initial = Some(id.into());
        self
    }

    /// Set the symbol the machine continues with when an automation callback
    /// fails without naming its own continuation. An empty symbol leaves the
    /// default unset.
    pub fn default_error_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.default_error_symbol = Some(symbol.into());
        self
    }

    /// Register a machine-wide hook fired after every committed transition.
    /// Receives `(source_id, symbol, target_id)`.
    pub fn on_state_change<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, &str, &str) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.change_hooks.push(Box::new(hook));
        self
    }

    /// Validate the collected definition and assemble the machine.
    pub fn build(self) -> Result<StateMachine, BuildError> {
        let mut states = HashMap::with_capacity(self.states.len());

        for builder in self.states {
            let (id, transitions, automation, entry_hooks, leave_hooks) = builder.into_parts();

            let mut table = HashMap::with_capacity(transitions.len());
            for transition in transitions {
                let symbol = transition.symbol().to_string();
                if table.insert(symbol.clone(), transition).is_some() {
                    return Err(BuildError::DuplicateSymbol { state: id, symbol });
                }
            }

            let state = State::new(id.clone(), table, automation, entry_hooks, leave_hooks);
            if states.insert(id.clone(), state).is_some() {
                return Err(BuildError::DuplicateState(id));
            }
        }

        if states.is_empty() {
            return Err(BuildError::NoStates);
        }

        for state in states.values() {
            for transition in state.transitions() {
                if !states.contains_key(transition.target()) {
                    return Err(BuildError::UndefinedTarget {
                        state: state.id().to_string(),
                        symbol: transition.symbol().to_string(),
                        target: transition.target().to_string(),
                    });
                }
            }
        }

        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let Some(start) = states.get(&initial) else {
            return Err(BuildError::UndefinedInitialState(initial));
        };
        if start.is_transient() {
            return Err(BuildError::TransientInitialState(initial));
        }

        let default_error_symbol = self.default_error_symbol.filter(|s| !s.is_empty());

        Ok(StateMachine::assemble(
            states,
            initial,
            default_error_symbol,
            self.change_hooks,
        ))
    }
}

impl Default for StateMachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
