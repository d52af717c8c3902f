//! Key traits for state and event identifiers.
//!
//! A machine does not interpret its identifiers; states and events are
//! opaque keys looked up in the transition table. These traits collect the
//! bounds a key type needs and are blanket-implemented, so `String` (the
//! JSON-configuration case) and user-defined key enums both qualify without
//! any explicit impl.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Bounds for a state identifier.
///
/// States are map keys: they must be cloneable (history keeps copies),
/// hashable and comparable (table lookup), debuggable (diagnostics and
/// error messages), and serializable (table and history serialization).
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use turnstile::core::StateKey;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// fn assert_key<S: StateKey>() {}
///
/// assert_key::<Door>();
/// assert_key::<String>();
/// ```
pub trait StateKey:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

impl<T> StateKey for T where
    T: Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

/// Bounds for an event name.
///
/// Events are the keys of a state descriptor's outgoing-transition map and
/// carry the same requirements as [`StateKey`].
pub trait EventKey:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

impl<T> EventKey for T where
    T: Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Phase {
        Solid,
        Liquid,
    }

    fn assert_state_key<S: StateKey>() {}
    fn assert_event_key<E: EventKey>() {}

    #[test]
    fn string_keys_qualify() {
        assert_state_key::<String>();
        assert_event_key::<String>();
    }

    #[test]
    fn enum_keys_qualify() {
        assert_state_key::<Phase>();
        assert_event_key::<Phase>();
    }

    #[test]
    fn keys_are_usable_as_map_keys() {
        let mut map = std::collections::HashMap::new();
        map.insert(Phase::Solid, 1);
        map.insert(Phase::Liquid, 2);
        assert_eq!(map[&Phase::Solid], 1);
    }
}
