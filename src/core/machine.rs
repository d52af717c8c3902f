//! The state machine container.

use super::config::MachineConfig;
use super::error::MachineError;
use super::history::History;
use super::key::{EventKey, StateKey};
use super::table::TransitionTable;
use crate::builder::MachineBuilder;
use tracing::{debug, trace};

/// Table-driven state machine with linear undo/redo history.
///
/// A machine owns its transition table for its whole lifetime and tracks a
/// single current state. Named events move along the table's edges;
/// [`change_state`](StateMachine::change_state) jumps to any table state
/// regardless of edges. Every recorded change lands in an undo/redo log.
///
/// Machines are single-owner values with no interior locking. To share one
/// across threads, serialize access externally (for example behind a
/// mutex); nothing inside protects `current` or the history from
/// interleaved mutation.
///
/// # Example
///
/// ```rust
/// use turnstile::{machine_config, StateMachine};
///
/// let mut machine: StateMachine<String, String> = StateMachine::new(machine_config! {
///     initial: "locked",
///     states: {
///         "locked" => { "coin" => "unlocked" },
///         "unlocked" => { "push" => "locked" },
///     },
/// });
///
/// machine.trigger("coin".to_string()).unwrap();
/// assert_eq!(machine.state().map(String::as_str), Some("unlocked"));
///
/// assert!(machine.undo());
/// assert_eq!(machine.state().map(String::as_str), Some("locked"));
/// assert!(machine.redo());
/// assert_eq!(machine.state().map(String::as_str), Some("unlocked"));
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine<S: StateKey, E: EventKey> {
    initial: Option<S>,
    current: Option<S>,
    table: TransitionTable<S, E>,
    history: History<S>,
}

impl<S: StateKey, E: EventKey> StateMachine<S, E> {
    /// Create a machine from a configuration.
    ///
    /// When an initial state is present it becomes the current state and
    /// the first history entry. The initial state is not validated against
    /// the table; a machine whose initial state has no descriptor simply
    /// ignores events until an explicit change succeeds.
    pub fn new(config: MachineConfig<S, E>) -> Self {
        let MachineConfig { initial, states } = config;
        let mut history = History::new();
        if let Some(state) = &initial {
            history.record(state.clone());
        }
        Self {
            current: initial.clone(),
            initial,
            table: states,
            history,
        }
    }

    /// Start a fluent builder.
    pub fn builder() -> MachineBuilder<S, E> {
        MachineBuilder::new()
    }

    /// The active state. Pure read, never fails.
    pub fn state(&self) -> Option<&S> {
        self.current.as_ref()
    }

    /// The state the machine was constructed with.
    pub fn initial(&self) -> Option<&S> {
        self.initial.as_ref()
    }

    /// The transition table.
    pub fn table(&self) -> &TransitionTable<S, E> {
        &self.table
    }

    /// The undo/redo log.
    pub fn history(&self) -> &History<S> {
        &self.history
    }

    /// Jump to any state in the table, recording history.
    ///
    /// The jump is unconditional with respect to edges: the target only has
    /// to be a key of the table. Recording truncates any redo branch left
    /// over from earlier undos. Fails with
    /// [`MachineError::UnknownState`] before any mutation when the target
    /// is not in the table.
    pub fn change_state(&mut self, target: S) -> Result<(), MachineError<S, E>> {
        if !self.table.contains(&target) {
            return Err(MachineError::UnknownState(target));
        }
        debug!(state = ?target, "state changed");
        self.current = Some(target.clone());
        self.history.record(target);
        Ok(())
    }

    /// Follow the current state's edge for `event`.
    ///
    /// A machine with no current state, or whose current state has no
    /// descriptor in the table, ignores the event entirely and returns
    /// `Ok(())`. When a descriptor exists and maps the event, this behaves
    /// exactly like [`change_state`](StateMachine::change_state) to the
    /// mapped target, validation and history included. When the descriptor
    /// does not map the event, fails with
    /// [`MachineError::InvalidTransition`] and mutates nothing.
    pub fn trigger(&mut self, event: E) -> Result<(), MachineError<S, E>> {
        let Some(current) = self.current.as_ref() else {
            trace!("event ignored: no current state");
            return Ok(());
        };
        let Some(descriptor) = self.table.descriptor(current) else {
            trace!(state = ?current, "event ignored: current state has no descriptor");
            return Ok(());
        };
        let target = match descriptor.target(&event) {
            Some(target) => target.clone(),
            None => {
                return Err(MachineError::InvalidTransition {
                    from: current.clone(),
                    event,
                });
            }
        };
        self.change_state(target)
    }

    /// Return to the initial state without touching history.
    ///
    /// Deliberately asymmetric with
    /// [`change_state`](StateMachine::change_state): a reset is a silent
    /// jump home, not a navigable step. The cursor stays where it was, so a
    /// following [`undo`](StateMachine::undo) resumes from the position the
    /// log was already at, not from the reset.
    pub fn reset(&mut self) {
        debug!(state = ?self.initial, "reset to initial state");
        self.current = self.initial.clone();
    }

    /// All states in the table, in table insertion order.
    pub fn states(&self) -> Vec<&S> {
        self.table.states().collect()
    }

    /// States whose descriptor maps `event`, in table insertion order.
    pub fn states_handling(&self, event: &E) -> Vec<&S> {
        self.table.states_handling(event)
    }

    /// Step back one entry in history and load it as the current state.
    ///
    /// Returns `false` without mutating when there is no earlier entry.
    pub fn undo(&mut self) -> bool {
        match self.history.back() {
            Some(state) => {
                let state = state.clone();
                trace!(state = ?state, "undo");
                self.current = Some(state);
                true
            }
            None => false,
        }
    }

    /// Step forward one entry in history and load it as the current state.
    ///
    /// Returns `false` without mutating when there is no later entry.
    pub fn redo(&mut self) -> bool {
        match self.history.forward() {
            Some(state) => {
                let state = state.clone();
                trace!(state = ?state, "redo");
                self.current = Some(state);
                true
            }
            None => false,
        }
    }

    /// Empty the history log, leaving the current state untouched.
    ///
    /// Undo and redo both report `false` afterwards until a new change
    /// repopulates the log.
    pub fn clear_history(&mut self) {
        trace!("history cleared");
        self.history.clear();
    }
}

impl<S: StateKey, E: EventKey> From<MachineConfig<S, E>> for StateMachine<S, E> {
    fn from(config: MachineConfig<S, E>) -> Self {
        Self::new(config)
    }
}
