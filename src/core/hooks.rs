//! Notification hooks fired around state changes.
//!
//! Hooks are plain synchronous callbacks registered at build time. For one
//! transition they fire in a fixed order: the source state's leave hooks, the
//! target state's entry hooks, then the machine-wide change hooks. A failing
//! hook never blocks the transition it observes; its error is accumulated and
//! reported to the caller that drove the chain.

use super::automation::BoxError;

/// Per-state hook. Leave hooks receive `(target_id, symbol)`, entry hooks
/// receive `(source_id, symbol)`.
pub type StateHook = Box<dyn Fn(&str, &str) -> Result<(), BoxError> + Send + Sync>;

/// Machine-wide change hook, receiving `(source_id, symbol, target_id)`.
pub type ChangeHook = Box<dyn Fn(&str, &str, &str) -> Result<(), BoxError> + Send + Sync>;
