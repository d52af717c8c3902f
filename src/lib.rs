//! Turnstile: a table-driven finite state machine with undo/redo.
//!
//! A machine is configured once with a transition table (state to
//! descriptor, descriptor mapping event names to target states) and an
//! initial state. From there it tracks a single current state, follows
//! named events along the table's edges, jumps directly to any table state,
//! and keeps a linear undo/redo log of everything it visited.
//!
//! # Core Concepts
//!
//! - **Table as data**: states and events are opaque keys in plain maps,
//!   not a class hierarchy; tables deserialize straight from JSON
//! - **Events as edges**: `trigger` performs one labeled-edge traversal,
//!   `change_state` an unconditional jump to any node
//! - **History as a cursor**: one append/truncate log, where a new change
//!   after an undo discards the redo branch
//!
//! # Example
//!
//! ```rust
//! use turnstile::{machine_config, StateMachine};
//!
//! let mut machine: StateMachine<String, String> = StateMachine::new(machine_config! {
//!     initial: "locked",
//!     states: {
//!         "locked" => { "coin" => "unlocked" },
//!         "unlocked" => { "push" => "locked" },
//!     },
//! });
//!
//! machine.trigger("coin".to_string()).unwrap();
//! machine.trigger("push".to_string()).unwrap();
//! assert_eq!(machine.state().map(String::as_str), Some("locked"));
//!
//! // Walk the visit log backwards, then forwards again.
//! assert!(machine.undo());
//! assert_eq!(machine.state().map(String::as_str), Some("unlocked"));
//! assert!(machine.redo());
//! assert_eq!(machine.state().map(String::as_str), Some("locked"));
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use builder::MachineBuilder;
pub use core::{
    EventKey, History, HistoryEntry, MachineConfig, MachineError, StateDescriptor, StateKey,
    StateMachine, TransitionTable,
};
