//! The execution engine.
//!
//! [`StateMachine`] owns the immutable state graph and a cursor, and executes
//! the symbol-processing loop: admit one caller at a time through a FIFO-fair
//! gate, walk transitions, fire hooks, run automation callbacks of transient
//! states, and fold every failure along the way into one [`MachineError`].

mod error;
mod machine;

pub use error::{HookKind, MachineError};
pub use machine::StateMachine;
