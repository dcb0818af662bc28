//! Core data model of a machine.
//!
//! This module holds the immutable definition the engine executes:
//! - [`State`] records with symbol-indexed transition tables
//! - [`Transition`] edges referencing target states by id
//! - automation callback types that make a state transient
//! - notification hook types fired around state changes
//! - [`StateHistory`] tracking of committed hops
//!
//! Everything here is plain data; the execution semantics live in
//! [`crate::engine`].

mod automation;
mod history;
mod hooks;
mod state;
mod transition;

pub use automation::{AutomationFailure, AutomationFn, AutomationResult, BoxError};
pub use history::{StateHistory, TransitionRecord};
pub use hooks::{ChangeHook, StateHook};
pub use state::State;
pub use transition::Transition;
