//! Fluent builder for constructing machines.

use crate::core::{
    EventKey, MachineConfig, MachineError, StateDescriptor, StateKey, StateMachine,
    TransitionTable,
};

/// Builder for constructing state machines with a fluent API.
///
/// Partial configuration is allowed: an initial state with no table, or a
/// table with no initial state, both build. Only a builder that was never
/// configured at all refuses to build.
///
/// # Example
///
/// ```rust
/// use turnstile::StateMachine;
///
/// let machine: StateMachine<String, String> = StateMachine::builder()
///     .initial("locked".to_string())
///     .transition("locked".to_string(), "coin".to_string(), "unlocked".to_string())
///     .transition("unlocked".to_string(), "push".to_string(), "locked".to_string())
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.state().map(String::as_str), Some("locked"));
/// ```
pub struct MachineBuilder<S: StateKey, E: EventKey> {
    initial: Option<S>,
    table: TransitionTable<S, E>,
    configured: bool,
}

impl<S: StateKey, E: EventKey> MachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            table: TransitionTable::new(),
            configured: false,
        }
    }

    /// Set the initial state.
    pub fn initial(mut self, state: S) -> Self {
        self.configured = true;
        self.initial = Some(state);
        self
    }

    /// Add a state with its descriptor, replacing any previous descriptor.
    pub fn state(mut self, state: S, descriptor: StateDescriptor<S, E>) -> Self {
        self.configured = true;
        self.table.insert(state, descriptor);
        self
    }

    /// Add a single transition, creating the source state if needed.
    ///
    /// Only `from` is registered in the table; targets are validated when a
    /// transition is attempted, so `to` may name a state added later or, if
    /// never added, fail at call time.
    pub fn transition(mut self, from: S, event: E, to: S) -> Self {
        self.configured = true;
        if !self.table.contains(&from) {
            self.table.insert(from.clone(), StateDescriptor::new());
        }
        if let Some(descriptor) = self.table.descriptor_mut(&from) {
            descriptor.insert(event, to);
        }
        self
    }

    /// Replace the whole transition table.
    pub fn table(mut self, table: TransitionTable<S, E>) -> Self {
        self.configured = true;
        self.table = table;
        self
    }

    /// Absorb a prebuilt configuration.
    pub fn config(mut self, config: MachineConfig<S, E>) -> Self {
        self.configured = true;
        self.initial = config.initial;
        self.table = config.states;
        self
    }

    /// Build the machine.
    ///
    /// Fails with [`MachineError::ConfigMissing`] when no configuration
    /// call of any kind was made.
    pub fn build(self) -> Result<StateMachine<S, E>, MachineError<S, E>> {
        if !self.configured {
            return Err(MachineError::ConfigMissing);
        }
        Ok(StateMachine::new(MachineConfig {
            initial: self.initial,
            states: self.table,
        }))
    }
}

impl<S: StateKey, E: EventKey> Default for MachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_builder_fails_with_config_missing() {
        let result = StateMachine::<String, String>::builder().build();
        assert!(matches!(result, Err(MachineError::ConfigMissing)));
    }

    #[test]
    fn initial_alone_is_enough_to_build() {
        let machine = StateMachine::<String, String>::builder()
            .initial("idle".to_string())
            .build()
            .unwrap();

        assert_eq!(machine.state().map(String::as_str), Some("idle"));
        assert!(machine.table().is_empty());
    }

    #[test]
    fn table_alone_builds_a_stateless_machine() {
        let machine = StateMachine::<String, String>::builder()
            .transition("idle".to_string(), "start".to_string(), "busy".to_string())
            .build()
            .unwrap();

        assert_eq!(machine.state(), None);
        assert!(machine.table().contains(&"idle".to_string()));
    }

    #[test]
    fn transitions_accumulate_per_state() {
        let machine = StateMachine::<String, String>::builder()
            .initial("idle".to_string())
            .transition("idle".to_string(), "start".to_string(), "busy".to_string())
            .transition("idle".to_string(), "sleep".to_string(), "off".to_string())
            .transition("busy".to_string(), "finish".to_string(), "idle".to_string())
            .build()
            .unwrap();

        let descriptor = machine.table().descriptor(&"idle".to_string()).unwrap();
        assert_eq!(descriptor.len(), 2);
        assert_eq!(machine.states(), ["idle", "busy"]);
    }

    #[test]
    fn config_passthrough_matches_direct_construction() {
        let mut table = TransitionTable::new();
        table.insert(
            "on".to_string(),
            [("toggle".to_string(), "off".to_string())].into(),
        );
        table.insert(
            "off".to_string(),
            [("toggle".to_string(), "on".to_string())].into(),
        );
        let config = MachineConfig::new("off".to_string(), table);

        let built = StateMachine::builder().config(config.clone()).build().unwrap();
        let direct = StateMachine::new(config);

        assert_eq!(built.state(), direct.state());
        assert_eq!(built.states(), direct.states());
        assert_eq!(built.history().path(), direct.history().path());
    }
}
