//! Transition table types.
//!
//! The table is the static configuration of a machine: each state maps to a
//! descriptor listing its outgoing transitions as an event-to-target map.
//! Together they form a directed labeled graph where states are nodes and
//! events are edge labels. The table never validates that a target exists;
//! existence is checked when a transition is attempted.

use super::key::{EventKey, StateKey};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// Outgoing transitions of a single state.
///
/// A descriptor without any transitions is valid; it simply handles no
/// events. When deserialized, a missing `transitions` field reads as an
/// empty map.
///
/// # Example
///
/// ```rust
/// use turnstile::core::StateDescriptor;
///
/// let descriptor: StateDescriptor<String, String> =
///     [("melt".to_string(), "liquid".to_string())].into();
///
/// assert!(descriptor.handles(&"melt".to_string()));
/// assert_eq!(descriptor.target(&"melt".to_string()), Some(&"liquid".to_string()));
/// assert_eq!(descriptor.target(&"freeze".to_string()), None);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateDescriptor<S: StateKey, E: EventKey> {
    #[serde(default)]
    transitions: HashMap<E, S>,
}

impl<S: StateKey, E: EventKey> StateDescriptor<S, E> {
    /// Create a descriptor with no outgoing transitions.
    pub fn new() -> Self {
        Self {
            transitions: HashMap::new(),
        }
    }

    /// Map an event to a target state, replacing any previous mapping.
    pub fn insert(&mut self, event: E, target: S) {
        self.transitions.insert(event, target);
    }

    /// Target state for an event, if the descriptor maps it.
    pub fn target(&self, event: &E) -> Option<&S> {
        self.transitions.get(event)
    }

    /// Whether the descriptor maps this event.
    pub fn handles(&self, event: &E) -> bool {
        self.transitions.contains_key(event)
    }

    /// Number of outgoing transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether the descriptor has no outgoing transitions.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Iterate over `(event, target)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&E, &S)> {
        self.transitions.iter()
    }
}

impl<S: StateKey, E: EventKey> Default for StateDescriptor<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateKey, E: EventKey> FromIterator<(E, S)> for StateDescriptor<S, E> {
    fn from_iter<I: IntoIterator<Item = (E, S)>>(iter: I) -> Self {
        Self {
            transitions: iter.into_iter().collect(),
        }
    }
}

impl<S: StateKey, E: EventKey, const N: usize> From<[(E, S); N]> for StateDescriptor<S, E> {
    fn from(pairs: [(E, S); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Mapping of states to their descriptors.
///
/// Lookup is by hash; iteration follows insertion order, which is the order
/// state listings are reported in. Inserting a descriptor for an existing
/// state replaces it without changing the state's position.
///
/// # Example
///
/// ```rust
/// use turnstile::core::{StateDescriptor, TransitionTable};
///
/// let mut table: TransitionTable<String, String> = TransitionTable::new();
/// table.insert(
///     "locked".to_string(),
///     [("coin".to_string(), "unlocked".to_string())].into(),
/// );
/// table.insert(
///     "unlocked".to_string(),
///     [("push".to_string(), "locked".to_string())].into(),
/// );
///
/// let states: Vec<_> = table.states().collect();
/// assert_eq!(states, [&"locked".to_string(), &"unlocked".to_string()]);
/// assert!(table.contains(&"locked".to_string()));
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable<S: StateKey, E: EventKey> {
    order: Vec<S>,
    descriptors: HashMap<S, StateDescriptor<S, E>>,
}

impl<S: StateKey, E: EventKey> TransitionTable<S, E> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            descriptors: HashMap::new(),
        }
    }

    /// Insert a state with its descriptor.
    ///
    /// New states are appended to the iteration order; re-inserting an
    /// existing state replaces its descriptor in place.
    pub fn insert(&mut self, state: S, descriptor: StateDescriptor<S, E>) {
        if !self.descriptors.contains_key(&state) {
            self.order.push(state.clone());
        }
        self.descriptors.insert(state, descriptor);
    }

    /// Whether the state is a key of the table.
    pub fn contains(&self, state: &S) -> bool {
        self.descriptors.contains_key(state)
    }

    /// Descriptor for a state, if present.
    pub fn descriptor(&self, state: &S) -> Option<&StateDescriptor<S, E>> {
        self.descriptors.get(state)
    }

    /// Mutable descriptor for a state, if present.
    pub fn descriptor_mut(&mut self, state: &S) -> Option<&mut StateDescriptor<S, E>> {
        self.descriptors.get_mut(state)
    }

    /// All states in insertion order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.order.iter()
    }

    /// States whose descriptor maps `event`, in insertion order.
    pub fn states_handling(&self, event: &E) -> Vec<&S> {
        self.order
            .iter()
            .filter(|state| {
                self.descriptors
                    .get(*state)
                    .is_some_and(|descriptor| descriptor.handles(event))
            })
            .collect()
    }

    /// Iterate over `(state, descriptor)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &StateDescriptor<S, E>)> {
        self.order
            .iter()
            .map(move |state| (state, &self.descriptors[state]))
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the table has no states.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<S: StateKey, E: EventKey> Default for TransitionTable<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateKey, E: EventKey> FromIterator<(S, StateDescriptor<S, E>)> for TransitionTable<S, E> {
    fn from_iter<I: IntoIterator<Item = (S, StateDescriptor<S, E>)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (state, descriptor) in iter {
            table.insert(state, descriptor);
        }
        table
    }
}

impl<S: StateKey, E: EventKey> Serialize for TransitionTable<S, E> {
    fn serialize<Sr>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error>
    where
        Sr: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for (state, descriptor) in self.iter() {
            map.serialize_entry(state, descriptor)?;
        }
        map.end()
    }
}

impl<'de, S: StateKey, E: EventKey> Deserialize<'de> for TransitionTable<S, E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TableVisitor<S, E>(PhantomData<(S, E)>);

        impl<'de, S: StateKey, E: EventKey> Visitor<'de> for TableVisitor<S, E> {
            type Value = TransitionTable<S, E>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of states to state descriptors")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut table = TransitionTable::new();
                while let Some((state, descriptor)) = access.next_entry()? {
                    table.insert(state, descriptor);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TransitionTable<String, String> {
        let mut table = TransitionTable::new();
        table.insert(
            "normal".to_string(),
            [
                ("study".to_string(), "hungry".to_string()),
                ("get_tired".to_string(), "sleeping".to_string()),
            ]
            .into(),
        );
        table.insert(
            "hungry".to_string(),
            [("eat".to_string(), "normal".to_string())].into(),
        );
        table.insert(
            "sleeping".to_string(),
            [
                ("get_hungry".to_string(), "hungry".to_string()),
                ("get_up".to_string(), "normal".to_string()),
            ]
            .into(),
        );
        table
    }

    #[test]
    fn states_iterate_in_insertion_order() {
        let table = table();
        let states: Vec<_> = table.states().collect();
        assert_eq!(states, ["normal", "hungry", "sleeping"]);
    }

    #[test]
    fn reinsert_replaces_descriptor_without_reordering() {
        let mut table = table();
        table.insert(
            "hungry".to_string(),
            [("nap".to_string(), "sleeping".to_string())].into(),
        );

        let states: Vec<_> = table.states().collect();
        assert_eq!(states, ["normal", "hungry", "sleeping"]);

        let descriptor = table.descriptor(&"hungry".to_string()).unwrap();
        assert!(descriptor.handles(&"nap".to_string()));
        assert!(!descriptor.handles(&"eat".to_string()));
    }

    #[test]
    fn descriptor_lookup_misses_unknown_states() {
        let table = table();
        assert!(table.descriptor(&"awake".to_string()).is_none());
        assert!(!table.contains(&"awake".to_string()));
    }

    #[test]
    fn states_handling_filters_in_order() {
        let mut table = table();
        table
            .descriptor_mut(&"sleeping".to_string())
            .unwrap()
            .insert("study".to_string(), "normal".to_string());

        let handlers = table.states_handling(&"study".to_string());
        assert_eq!(handlers, [&"normal".to_string(), &"sleeping".to_string()]);

        let none = table.states_handling(&"fly".to_string());
        assert!(none.is_empty());
    }

    #[test]
    fn empty_descriptor_handles_nothing() {
        let mut table = table();
        table.insert("coma".to_string(), StateDescriptor::new());

        assert!(table.contains(&"coma".to_string()));
        let handlers = table.states_handling(&"eat".to_string());
        assert_eq!(handlers, [&"hungry".to_string()]);
    }

    #[test]
    fn serde_round_trip_preserves_order() {
        let table = table();
        let json = serde_json::to_string(&table).unwrap();
        let parsed: TransitionTable<String, String> = serde_json::from_str(&json).unwrap();

        let states: Vec<_> = parsed.states().collect();
        assert_eq!(states, ["normal", "hungry", "sleeping"]);
        assert_eq!(
            parsed
                .descriptor(&"normal".to_string())
                .unwrap()
                .target(&"study".to_string()),
            Some(&"hungry".to_string())
        );
    }

    #[test]
    fn missing_transitions_field_reads_as_empty() {
        let json = r#"{ "idle": {}, "busy": { "transitions": { "finish": "idle" } } }"#;
        let parsed: TransitionTable<String, String> = serde_json::from_str(json).unwrap();

        assert!(parsed.descriptor(&"idle".to_string()).unwrap().is_empty());
        assert_eq!(
            parsed
                .descriptor(&"busy".to_string())
                .unwrap()
                .target(&"finish".to_string()),
            Some(&"idle".to_string())
        );
    }
}
