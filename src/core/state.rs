//! State records.
//!
//! States are assembled at run time from string identifiers rather than being
//! a compile-time enum: a machine definition is data, handed to the engine
//! once and immutable from then on.

use super::automation::AutomationFn;
use super::hooks::StateHook;
use super::transition::Transition;
use std::collections::HashMap;
use std::fmt;

/// A single state of a machine.
///
/// A state owns its outgoing transition table (one transition per symbol), an
/// optional automation callback, and its entry/leave notification hooks. The
/// presence of the automation callback is precisely what makes the state
/// *transient*: [`State::is_transient`] is derived from it and cannot be set
/// independently. None of this changes after the machine is built.
pub struct State {
    id: String,
    transitions: HashMap<String, Transition>,
    automation: Option<AutomationFn>,
    entry_hooks: Vec<StateHook>,
    leave_hooks: Vec<StateHook>,
}

impl State {
    pub(crate) fn new(
        id: String,
        transitions: HashMap<String, Transition>,
        automation: Option<AutomationFn>,
        entry_hooks: Vec<StateHook>,
        leave_hooks: Vec<StateHook>,
    ) -> Self {
        Self {
            id,
            transitions,
            automation,
            entry_hooks,
            leave_hooks,
        }
    }

    /// The state's identifier, unique within its machine.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether entering this state triggers an automation callback.
    pub fn is_transient(&self) -> bool {
        self.automation.is_some()
    }

    /// Look up the outgoing transition for `symbol`.
    pub fn transition(&self, symbol: &str) -> Option<&Transition> {
        self.transitions.get(symbol)
    }

    /// All outgoing transitions, in no particular order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> {
        self.transitions.values()
    }

    pub(crate) fn automation(&self) -> Option<&AutomationFn> {
        self.automation.as_ref()
    }

    pub(crate) fn entry_hooks(&self) -> &[StateHook] {
        &self.entry_hooks
    }

    pub(crate) fn leave_hooks(&self) -> &[StateHook] {
        &self.leave_hooks
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("id", &self.id)
            .field("transitions", &self.transitions)
            .field("transient", &self.is_transient())
            .finish_non_exhaustive()
    }
}
