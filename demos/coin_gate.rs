//! Coin-Operated Gate
//!
//! The classic turnstile: locked until a coin arrives, locked again once
//! pushed through.
//!
//! Key concepts:
//! - Declarative table configuration with `machine_config!`
//! - Event-driven transitions with `trigger`
//! - The `InvalidTransition` error for events the current state ignores
//!
//! Run with: cargo run --example coin_gate

use tracing_subscriber::EnvFilter;
use turnstile::{machine_config, StateMachine};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Coin-Operated Gate ===\n");

    let mut gate: StateMachine<String, String> = StateMachine::new(machine_config! {
        initial: "locked",
        states: {
            "locked" => { "coin" => "unlocked" },
            "unlocked" => { "push" => "locked" },
        },
    });

    println!("Initial state: {:?}", gate.state().unwrap());

    // Pushing a locked gate does nothing but report the invalid event.
    if let Err(err) = gate.trigger("push".to_string()) {
        println!("Pushing while locked: {err}");
    }

    gate.trigger("coin".to_string()).unwrap();
    println!("After coin: {:?}", gate.state().unwrap());

    gate.trigger("push".to_string()).unwrap();
    println!("After push: {:?}", gate.state().unwrap());

    println!("\nStates that accept \"coin\": {:?}", gate.states_handling(&"coin".to_string()));
    println!("All states: {:?}", gate.states());

    println!("\nVisited: {:?}", gate.history().path());
    println!("\n=== Example Complete ===");
}
