//! The symbol-reading engine.

use crate::core::{
    AutomationFailure, AutomationResult, ChangeHook, State, StateHistory, StateHook,
    TransitionRecord,
};
use crate::engine::error::{HookKind, MachineError};
use chrono::Utc;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// The mutable position of a machine: the current state id and whether an
/// automation callback is in flight. Written only inside the admission-gated
/// critical section.
struct Cursor {
    current: String,
    busy: bool,
}

/// A deterministic state machine with transient states.
///
/// The state/transition graph is immutable after construction (see
/// [`StateMachineBuilder`](crate::builder::StateMachineBuilder)); the only
/// thing that moves is the cursor, and it moves only inside
/// [`read_symbol`](StateMachine::read_symbol)'s critical section. The machine
/// is `Send + Sync` and may be shared freely; concurrent callers are admitted
/// one at a time, in arrival order.
pub struct StateMachine {
    states: HashMap<String, State>,
    cursor: RwLock<Cursor>,
    gate: Mutex<()>,
    default_error_symbol: Option<String>,
    change_hooks: Vec<ChangeHook>,
    history: RwLock<StateHistory>,
}

impl StateMachine {
    pub(crate) fn assemble(
        states: HashMap<String, State>,
        initial: String,
        default_error_symbol: Option<String>,
        change_hooks: Vec<ChangeHook>,
    ) -> Self {
        Self {
            states,
            cursor: RwLock::new(Cursor {
                current: initial,
                busy: false,
            }),
            gate: Mutex::new(()),
            default_error_symbol,
            change_hooks,
            history: RwLock::new(StateHistory::new()),
        }
    }

    /// Id of the state the machine currently rests on.
    ///
    /// Between completed calls this is always either a non-transient state or
    /// the transient state a failed chain got stuck on, never a mid-chain
    /// position.
    pub fn current_state(&self) -> String {
        self.cursor.read().current.clone()
    }

    /// Whether an automation callback is executing right now.
    pub fn is_busy(&self) -> bool {
        self.cursor.read().busy
    }

    /// Look up a state of the machine by id.
    pub fn state(&self, id: &str) -> Option<&State> {
        self.states.get(id)
    }

    /// All states of the machine, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.states.values()
    }

    /// The symbol used to continue after a non-redirecting automation failure,
    /// if one was configured.
    pub fn default_error_symbol(&self) -> Option<&str> {
        self.default_error_symbol.as_deref()
    }

    /// Snapshot of every transition committed so far.
    pub fn history(&self) -> StateHistory {
        self.history.read().clone()
    }

    /// Feed one input symbol to the machine.
    ///
    /// Callers are admitted one at a time in arrival order; a call that
    /// arrives while another is executing suspends until admitted. Once
    /// admitted, the call drives the machine through its transition and then
    /// through however many autonomous hops the transient states it lands on
    /// produce, until the machine rests on a non-transient state or the chain
    /// runs out of symbols.
    ///
    /// `parameters` are handed to the automation callback of the state the
    /// symbol leads to; autonomous continuations run with no parameters.
    ///
    /// Failures along the chain accumulate instead of short-circuiting: a
    /// failing hook never blocks its transition, and a failing automation may
    /// still name a continuation. One accumulated failure is returned as-is,
    /// two or more come back as [`MachineError::Multiple`]. Only two
    /// conditions end a chain early, both for want of a next symbol: a missing
    /// transition, and an automation failure with no continuation and no
    /// configured default error symbol. The latter leaves the machine stuck:
    /// every later call fails with [`MachineError::Stuck`] without moving
    /// anything, and there is no recovery short of building a new machine.
    pub async fn read_symbol(
        &self,
        symbol: impl Into<String>,
        parameters: Vec<Value>,
    ) -> Result<(), MachineError> {
        let _admission = self.gate.lock().await;

        // A transient resting state means a previous chain ended without a
        // continuation; the machine is permanently stuck.
        let resting = self.cursor.read().current.clone();
        if self.expect_state(&resting).is_transient() {
            return Err(MachineError::Stuck { state: resting });
        }

        let mut failures = Vec::new();
        let mut next = Some((symbol.into(), parameters));

        while let Some((symbol, parameters)) = next.take() {
            if symbol.is_empty() {
                break;
            }

            let source_id = self.cursor.read().current.clone();
            let source = self.expect_state(&source_id);

            let Some(transition) = source.transition(&symbol) else {
                failures.push(MachineError::NoTransition {
                    state: source_id,
                    symbol,
                });
                break;
            };
            let target_id = transition.target().to_string();
            let target = self.expect_state(&target_id);

            self.run_state_hooks(
                source.leave_hooks(),
                HookKind::Leave,
                &target_id,
                &source_id,
                &target_id,
                &symbol,
                &mut failures,
            );

            self.cursor.write().current = target_id.clone();
            self.history.write().record(TransitionRecord {
                from: source_id.clone(),
                to: target_id.clone(),
                symbol: symbol.clone(),
                timestamp: Utc::now(),
            });
            debug!(from = %source_id, to = %target_id, %symbol, "transition committed");

            self.run_state_hooks(
                target.entry_hooks(),
                HookKind::Entry,
                &source_id,
                &source_id,
                &target_id,
                &symbol,
                &mut failures,
            );
            for hook in &self.change_hooks {
                if let Err(cause) = hook(&source_id, &symbol, &target_id) {
                    warn!(from = %source_id, to = %target_id, %symbol, error = %cause, "state-change handler failed");
                    failures.push(MachineError::Handler {
                        hook: HookKind::Change,
                        from: source_id.clone(),
                        to: target_id.clone(),
                        symbol: symbol.clone(),
                        source: cause,
                    });
                }
            }

            if let Some(automation) = target.automation() {
                self.cursor.write().busy = true;
                let outcome = automation(parameters).await;
                self.cursor.write().busy = false;
                next = self.fold_automation(&target_id, outcome, &mut failures);
            }
        }

        MachineError::collapse(failures)
    }

    /// Turn an automation outcome into the next chain step, accumulating the
    /// failures it produced. `None` ends the chain.
    fn fold_automation(
        &self,
        state: &str,
        outcome: AutomationResult,
        failures: &mut Vec<MachineError>,
    ) -> Option<(String, Vec<Value>)> {
        let continuation = match outcome {
            Ok(symbol) => {
                debug!(%state, continuation = ?symbol, "automation returned");
                symbol
            }
            Err(AutomationFailure::Redirect { symbol, source }) => {
                warn!(%state, continuation = ?symbol, error = %source, "automation failed with redirect");
                failures.push(MachineError::Automation {
                    state: state.to_string(),
                    continuation: symbol.clone(),
                    source,
                });
                symbol
            }
            Err(AutomationFailure::Failed(cause)) => match &self.default_error_symbol {
                Some(fallback) => {
                    warn!(%state, %fallback, error = %cause, "automation failed, continuing with default error symbol");
                    failures.push(MachineError::Automation {
                        state: state.to_string(),
                        continuation: Some(fallback.clone()),
                        source: cause,
                    });
                    Some(fallback.clone())
                }
                None => {
                    warn!(%state, error = %cause, "automation failed with no default error symbol");
                    failures.push(MachineError::NoDefaultErrorSymbol {
                        state: state.to_string(),
                        source: cause,
                    });
                    return None;
                }
            },
        };

        match continuation {
            Some(symbol) if !symbol.is_empty() => Some((symbol, Vec::new())),
            _ => {
                failures.push(MachineError::EmptyContinuation {
                    state: state.to_string(),
                });
                None
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn run_state_hooks(
        &self,
        hooks: &[StateHook],
        kind: HookKind,
        peer: &str,
        from: &str,
        to: &str,
        symbol: &str,
        failures: &mut Vec<MachineError>,
    ) {
        for hook in hooks {
            if let Err(cause) = hook(peer, symbol) {
                warn!(hook = %kind, %from, %to, %symbol, error = %cause, "handler failed");
                failures.push(MachineError::Handler {
                    hook: kind,
                    from: from.to_string(),
                    to: to.to_string(),
                    symbol: symbol.to_string(),
                    source: cause,
                });
            }
        }
    }

    fn expect_state(&self, id: &str) -> &State {
        self.states
            .get(id)
            .expect("state graph is validated at build time")
    }
}

impl fmt::Debug for StateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.cursor.read().current)
            .field("states", &self.states.len())
            .finish_non_exhaustive()
    }
}
