//! Runtime failure taxonomy.
//!
//! A single `read_symbol` call can accumulate several failures while it drives
//! a chain of transient hops: handler errors never stop the chain, and a
//! failing automation callback may still name a continuation. All failures
//! collected during one chain surface to the caller that initiated it: one
//! failure is returned as-is, two or more are wrapped in
//! [`MachineError::Multiple`] in order of occurrence.

use crate::core::BoxError;
use std::fmt;
use thiserror::Error;

/// Which kind of notification hook a [`MachineError::Handler`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HookKind {
    /// A leave hook on the state being left.
    Leave,
    /// An entry hook on the state being entered.
    Entry,
    /// A machine-wide state-change hook.
    Change,
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HookKind::Leave => "leave",
            HookKind::Entry => "entry",
            HookKind::Change => "state-change",
        })
    }
}

/// Failure raised by [`read_symbol`](crate::engine::StateMachine::read_symbol).
#[derive(Debug, Error)]
pub enum MachineError {
    /// The current state has no transition for the given symbol. Recoverable:
    /// the current state did not move.
    #[error("no transition from state '{state}' on symbol '{symbol}'")]
    NoTransition { state: String, symbol: String },

    /// A notification hook failed. The transition it observed still committed
    /// and the chain proceeded.
    #[error("{hook} handler failed moving from '{from}' to '{to}' on '{symbol}': {source}")]
    Handler {
        hook: HookKind,
        from: String,
        to: String,
        symbol: String,
        source: BoxError,
    },

    /// An automation callback produced no continuation symbol. The machine is
    /// left in the transient state, permanently stuck.
    #[error("automation in state '{state}' returned no continuation symbol")]
    EmptyContinuation { state: String },

    /// An automation callback failed without naming a continuation and no
    /// default error symbol is configured. The machine is left stuck.
    #[error("automation in state '{state}' failed with no default error symbol configured: {source}")]
    NoDefaultErrorSymbol { state: String, source: BoxError },

    /// The machine was already stuck in a transient state when the call was
    /// admitted. Terminal: every further call fails the same way.
    #[error("machine is stuck in transient state '{state}'")]
    Stuck { state: String },

    /// An automation callback failed but the chain continued, either with the
    /// continuation the failure named or with the default error symbol.
    #[error("automation in state '{state}' failed (continuation {continuation:?}): {source}")]
    Automation {
        state: String,
        continuation: Option<String>,
        source: BoxError,
    },

    /// Two or more failures accumulated during one call, in order of
    /// occurrence.
    #[error("{} failures while reading a symbol", .0.len())]
    Multiple(Vec<MachineError>),
}

impl MachineError {
    /// Collapse the failures accumulated by one call into a result: none is
    /// success, exactly one is returned unwrapped, more are aggregated.
    pub(crate) fn collapse(mut failures: Vec<MachineError>) -> Result<(), MachineError> {
        match failures.len() {
            0 => Ok(()),
            1 => Err(failures.remove(0)),
            _ => Err(MachineError::Multiple(failures)),
        }
    }

    /// View this error as a list of failures: the contents of a
    /// [`MachineError::Multiple`], or a one-element slice of `self`.
    pub fn failures(&self) -> &[MachineError] {
        match self {
            MachineError::Multiple(failures) => failures,
            single => std::slice::from_ref(single),
        }
    }
}
