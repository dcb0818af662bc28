//! Build errors for machine and state builders.

use thiserror::Error;

/// Errors that can occur when assembling a state machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(id) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error("Duplicate state id '{0}'")]
    DuplicateState(String),

    #[error("Duplicate symbol '{symbol}' in state '{state}'")]
    DuplicateSymbol { state: String, symbol: String },

    #[error("Transition from '{state}' on '{symbol}' targets undefined state '{target}'")]
    UndefinedTarget {
        state: String,
        symbol: String,
        target: String,
    },

    #[error("Initial state '{0}' is not defined")]
    UndefinedInitialState(String),

    #[error("Initial state '{0}' is transient")]
    TransientInitialState(String),
}
