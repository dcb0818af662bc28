//! Document review pipeline with self-driving screening.
//!
//! A submitted document passes through a transient "screening" state whose
//! automation decides where it goes next, without further external input. The
//! third run shows the default error symbol catching a crashed automation.
//!
//! Run with: cargo run --example document_flow

use relay::{AutomationFailure, StateBuilder, StateMachine, StateMachineBuilder};
use serde_json::json;

fn pipeline(scanner_online: bool) -> StateMachine {
    StateMachineBuilder::new()
        .state(StateBuilder::new("draft").on("submit", "screening"))
        .state(
            StateBuilder::new("screening")
                .on("accept", "published")
                .on("reject", "rejected")
                .on("error", "needs-review")
                .automation(move |params| async move {
                    if !scanner_online {
                        return Err(AutomationFailure::failed("scanner offline"));
                    }
                    let clean = params.first().and_then(|v| v.as_bool()).unwrap_or(false);
                    Ok(Some(if clean { "accept" } else { "reject" }.to_string()))
                }),
        )
        .state(StateBuilder::new("published"))
        .state(StateBuilder::new("rejected"))
        .state(StateBuilder::new("needs-review"))
        .initial("draft")
        .default_error_symbol("error")
        .build()
        .expect("pipeline builds")
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let machine = pipeline(true);
    machine
        .read_symbol("submit", vec![json!(true)])
        .await
        .expect("clean document screens without failures");
    println!("clean document landed on:   {}", machine.current_state());

    let machine = pipeline(true);
    machine
        .read_symbol("submit", vec![json!(false)])
        .await
        .expect("flagged document screens without failures");
    println!("flagged document landed on: {}", machine.current_state());

    let machine = pipeline(false);
    let error = machine
        .read_symbol("submit", vec![json!(true)])
        .await
        .expect_err("offline scanner is reported");
    println!("offline scanner reported:   {error}");
    println!("document parked on:         {}", machine.current_state());
}
