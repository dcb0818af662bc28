//! Builder API for assembling machines.
//!
//! Machines are constructed in one shot: gather states with [`StateBuilder`],
//! hand them to a [`StateMachineBuilder`], and call `build()`. All validation
//! (duplicate ids, duplicate symbols, dangling targets, a missing or
//! transient initial state) happens there, so a machine that builds is a
//! machine the engine can run without re-checking the graph.

pub mod error;
pub mod machine;
pub mod state;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use state::StateBuilder;
