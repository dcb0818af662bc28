//! Automation callbacks for transient states.
//!
//! A state becomes *transient* by carrying an automation callback. When the
//! machine enters such a state, the callback runs and its return value is fed
//! back into the machine as the next input symbol, before any externally
//! supplied symbol is considered.

use futures::future::BoxFuture;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Boxed error type carried by hook and automation failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Outcome of an automation callback.
///
/// `Ok(Some(symbol))` continues the chain with `symbol`; `Ok(None)` (or an
/// empty symbol) means the callback produced nothing to continue with, which
/// leaves the machine stuck in the transient state.
pub type AutomationResult = Result<Option<String>, AutomationFailure>;

/// Stored form of an automation callback.
///
/// Callbacks receive the parameters of the symbol that caused the hop and
/// yield an [`AutomationResult`]. They are invoked while the machine's
/// admission gate is held, so a callback that never completes starves every
/// other caller; the engine deliberately injects no timeout.
pub type AutomationFn =
    Arc<dyn Fn(Vec<Value>) -> BoxFuture<'static, AutomationResult> + Send + Sync>;

/// Failure raised by an automation callback.
#[derive(Debug, Error)]
pub enum AutomationFailure {
    /// The callback failed but names the symbol the machine should continue
    /// with. The failure is still reported to the caller that initiated the
    /// chain; a `None` or empty symbol leaves the machine stuck.
    #[error("automation redirected to {symbol:?}: {source}")]
    Redirect {
        symbol: Option<String>,
        source: BoxError,
    },

    /// The callback failed without naming a continuation. The machine falls
    /// back to the configured default error symbol, if any.
    #[error("automation failed: {0}")]
    Failed(#[source] BoxError),
}

impl AutomationFailure {
    /// Shorthand for a [`AutomationFailure::Redirect`] with a continuation.
    pub fn redirect(symbol: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Redirect {
            symbol: Some(symbol.into()),
            source: source.into(),
        }
    }

    /// Shorthand for a [`AutomationFailure::Failed`].
    pub fn failed(source: impl Into<BoxError>) -> Self {
        Self::Failed(source.into())
    }
}
