//! Coin-operated turnstile.
//!
//! The classic two-state automaton, with notification hooks wired up so the
//! transitions are visible as they happen.
//!
//! Run with: cargo run --example turnstile

use relay::{StateBuilder, StateMachineBuilder};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("=== Turnstile ===\n");

    let machine = StateMachineBuilder::new()
        .state(
            StateBuilder::new("locked")
                .on("coin", "unlocked")
                .on("push", "locked"),
        )
        .state(
            StateBuilder::new("unlocked")
                .on("push", "locked")
                .on("coin", "unlocked"),
        )
        .initial("locked")
        .on_state_change(|from, symbol, to| {
            println!("  {from} --{symbol}--> {to}");
            Ok(())
        })
        .build()
        .expect("turnstile builds");

    for symbol in ["push", "coin", "push"] {
        println!("reading '{symbol}'");
        machine
            .read_symbol(symbol, Vec::new())
            .await
            .expect("known symbol");
    }

    println!("\nFinal state: {}", machine.current_state());
    println!("Path taken: {:?}", machine.history().path());
}
