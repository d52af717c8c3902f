//! Builder API for ergonomic machine construction.
//!
//! Two layers over [`MachineConfig`](crate::core::MachineConfig): the
//! fluent [`MachineBuilder`] for programmatic assembly, and the
//! [`machine_config!`](crate::machine_config) macro for table literals.

pub mod machine;
pub mod macros;

pub use machine::MachineBuilder;

use crate::core::{EventKey, StateDescriptor, StateKey};

/// Build a descriptor from `(event, target)` pairs.
///
/// # Example
///
/// ```rust
/// use turnstile::builder::descriptor;
///
/// let open = descriptor([("push".to_string(), "closed".to_string())]);
/// assert!(open.handles(&"push".to_string()));
/// ```
pub fn descriptor<S, E>(pairs: impl IntoIterator<Item = (E, S)>) -> StateDescriptor<S, E>
where
    S: StateKey,
    E: EventKey,
{
    pairs.into_iter().collect()
}
