//! Machine configuration.

use super::key::{EventKey, StateKey};
use super::table::TransitionTable;
use serde::{Deserialize, Serialize};

/// Construction-time configuration for a machine.
///
/// Both fields are permissive: a missing initial state leaves the machine
/// without a current state until the first explicit change, and a missing
/// table means every transition attempt reports an unknown state. Tables
/// are plain data, so configurations deserialize directly from JSON:
///
/// ```rust
/// use turnstile::core::MachineConfig;
///
/// let config: MachineConfig<String, String> = serde_json::from_str(
///     r#"{
///         "initial": "locked",
///         "states": {
///             "locked": { "transitions": { "coin": "unlocked" } },
///             "unlocked": { "transitions": { "push": "locked" } }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.initial.as_deref(), Some("locked"));
/// assert_eq!(config.states.len(), 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MachineConfig<S: StateKey, E: EventKey> {
    /// Starting state, recorded as the first history entry when present.
    #[serde(default)]
    pub initial: Option<S>,
    /// The transition table.
    #[serde(default)]
    pub states: TransitionTable<S, E>,
}

impl<S: StateKey, E: EventKey> MachineConfig<S, E> {
    /// Configuration with an initial state and a table.
    pub fn new(initial: S, states: TransitionTable<S, E>) -> Self {
        Self {
            initial: Some(initial),
            states,
        }
    }
}

impl<S: StateKey, E: EventKey> Default for MachineConfig<S, E> {
    fn default() -> Self {
        Self {
            initial: None,
            states: TransitionTable::new(),
        }
    }
}
