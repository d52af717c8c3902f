//! Document Workflow with Undo/Redo
//!
//! A document moves through draft, review, and published states while an
//! editor walks the visit log backwards and forwards.
//!
//! Key concepts:
//! - Direct jumps with `change_state`
//! - Linear undo/redo over the visit log
//! - A new change discarding the redo branch
//! - `reset` returning home without touching history
//!
//! Run with: cargo run --example editor_undo

use tracing_subscriber::EnvFilter;
use turnstile::{machine_config, StateMachine};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Document Workflow ===\n");

    let mut document: StateMachine<String, String> = StateMachine::new(machine_config! {
        initial: "draft",
        states: {
            "draft" => { "submit" => "review" },
            "review" => { "approve" => "published", "reject" => "draft" },
            "published" => { "retract" => "draft" },
        },
    });

    document.trigger("submit".to_string()).unwrap();
    document.trigger("approve".to_string()).unwrap();
    println!("Walked to: {:?}", document.state().unwrap());
    println!("Visit log: {:?}", document.history().path());

    println!("\nUndo twice:");
    document.undo();
    println!("  -> {:?}", document.state().unwrap());
    document.undo();
    println!("  -> {:?}", document.state().unwrap());

    println!("\nRedo once:");
    document.redo();
    println!("  -> {:?}", document.state().unwrap());

    // A fresh change from here abandons the redo branch to "published".
    document.trigger("reject".to_string()).unwrap();
    println!("\nAfter reject: {:?}", document.state().unwrap());
    println!("Redo available: {}", document.redo());
    println!("Visit log: {:?}", document.history().path());

    // Reset jumps home silently; the log and cursor stay put.
    document.change_state("review".to_string()).unwrap();
    document.reset();
    println!("\nAfter reset: {:?}", document.state().unwrap());
    println!("Visit log unchanged by reset: {:?}", document.history().path());

    println!("\n=== Example Complete ===");
}
