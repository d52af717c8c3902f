//! Macros for declarative machine configuration.

/// Build a [`MachineConfig`](crate::core::MachineConfig) from a table
/// literal.
///
/// Keys go through `Into`, so plain string literals work for `String`-keyed
/// machines. The `initial` line is optional; a configuration without it
/// builds a machine with no current state. States listed with `=> {}` have
/// no outgoing transitions.
///
/// # Example
///
/// ```rust
/// use turnstile::{machine_config, StateMachine};
///
/// let machine: StateMachine<String, String> = StateMachine::new(machine_config! {
///     initial: "water",
///     states: {
///         "ice" => { "melt" => "water" },
///         "water" => { "freeze" => "ice", "boil" => "steam" },
///         "steam" => { "condense" => "water" },
///     },
/// });
///
/// assert_eq!(machine.state().map(String::as_str), Some("water"));
/// assert_eq!(machine.states(), ["ice", "water", "steam"]);
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        $(initial: $initial:expr,)?
        states: {
            $( $state:expr => { $( $event:expr => $target:expr ),* $(,)? } ),* $(,)?
        } $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut table = $crate::core::TransitionTable::new();
        $(
            #[allow(unused_mut)]
            let mut descriptor = $crate::core::StateDescriptor::new();
            $( descriptor.insert($event.into(), $target.into()); )*
            table.insert($state.into(), descriptor);
        )*
        $crate::core::MachineConfig {
            initial: None $( .or(Some($initial.into())) )?,
            states: table,
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::{MachineConfig, StateMachine};

    #[test]
    fn macro_builds_full_configuration() {
        let config: MachineConfig<String, String> = machine_config! {
            initial: "ice",
            states: {
                "ice" => { "melt" => "water" },
                "water" => { "freeze" => "ice" },
            },
        };

        assert_eq!(config.initial.as_deref(), Some("ice"));
        let states: Vec<_> = config.states.states().collect();
        assert_eq!(states, ["ice", "water"]);
    }

    #[test]
    fn initial_line_is_optional() {
        let config: MachineConfig<String, String> = machine_config! {
            states: {
                "ice" => { "melt" => "water" },
                "water" => {},
            },
        };

        assert!(config.initial.is_none());
        assert_eq!(config.states.len(), 2);
    }

    #[test]
    fn empty_state_blocks_have_empty_descriptors() {
        let config: MachineConfig<String, String> = machine_config! {
            initial: "done",
            states: {
                "done" => {},
            },
        };

        let descriptor = config.states.descriptor(&"done".to_string()).unwrap();
        assert!(descriptor.is_empty());
    }

    #[test]
    fn macro_output_feeds_a_working_machine() {
        let mut machine: StateMachine<String, String> = StateMachine::new(machine_config! {
            initial: "ice",
            states: {
                "ice" => { "melt" => "water" },
                "water" => { "freeze" => "ice" },
            },
        });

        machine.trigger("melt".to_string()).unwrap();
        assert_eq!(machine.state().map(String::as_str), Some("water"));
    }
}
