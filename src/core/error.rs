//! Machine error taxonomy.

use thiserror::Error;

/// Errors surfaced by machine construction and transitions.
///
/// This is a closed set: every failure the machine can report is one of
/// these variants, and each carries the offending keys so callers can
/// branch on kind and report detail. Failed calls never mutate the
/// machine, so no rollback is ever needed.
///
/// Running out of history during undo/redo is a normal boundary condition
/// signaled by a `bool`, not an error.
#[derive(Debug, Error)]
pub enum MachineError<S, E> {
    /// Construction was attempted with no configuration at all.
    #[error("no configuration supplied")]
    ConfigMissing,

    /// The requested state is not a key of the transition table.
    #[error("unknown state {0:?}")]
    UnknownState(S),

    /// The current state's descriptor has no rule for the event.
    #[error("no transition for event {event:?} in state {from:?}")]
    InvalidTransition {
        /// State the machine was in when the event fired.
        from: S,
        /// The unmapped event.
        event: E,
    },
}
