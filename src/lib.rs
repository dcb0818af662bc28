//! Relay: an async deterministic state machine engine with transient states
//!
//! Relay runs string-keyed deterministic automata in which a state may carry
//! an *automation callback*. Entering such a transient state triggers the
//! callback, and its return value is fed back into the machine as the next
//! input symbol, before any externally supplied symbol gets a turn. A single
//! external call can therefore drive the machine through a whole chain of
//! autonomous hops until it rests on a stable state.
//!
//! # Core Concepts
//!
//! - **States and transitions**: assembled once through the builder, immutable
//!   afterwards. One transition per symbol per state; deterministic by
//!   construction.
//! - **Transient states**: states with an automation callback. The machine
//!   never rests on one between successful calls.
//! - **Serialized reads**: concurrent callers of
//!   [`read_symbol`](engine::StateMachine::read_symbol) are admitted one at a
//!   time, in arrival order, through a FIFO-fair gate.
//! - **Accumulated failures**: hook and automation failures along a chain
//!   never stop the machine from reaching a resting state; they are collected
//!   and surfaced together in one [`MachineError`].
//!
//! # Example
//!
//! ```rust
//! use relay::{StateBuilder, StateMachineBuilder};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let machine = StateMachineBuilder::new()
//!     .state(StateBuilder::new("idle").on("start", "loading"))
//!     .state(
//!         StateBuilder::new("loading")
//!             .on("done", "ready")
//!             .automation(|_params| async { Ok(Some("done".to_string())) }),
//!     )
//!     .state(StateBuilder::new("ready"))
//!     .initial("idle")
//!     .build()
//!     .unwrap();
//!
//! // One external symbol, two hops: "start" enters the transient "loading"
//! // state, whose automation immediately continues with "done".
//! machine.read_symbol("start", Vec::new()).await.unwrap();
//! assert_eq!(machine.current_state(), "ready");
//! # }
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, StateBuilder, StateMachineBuilder};
pub use crate::core::{
    AutomationFailure, AutomationFn, AutomationResult, BoxError, ChangeHook, State, StateHistory,
    StateHook, Transition, TransitionRecord,
};
pub use engine::{HookKind, MachineError, StateMachine};
