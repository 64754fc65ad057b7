//! Transition table trait for status enums.
//!
//! A table is a value, not a property of the status type, so the same status
//! enum can run under different rule sets chosen by configuration.

use super::ValidationError;

/// A declared set of permitted `from -> to` status transitions.
///
/// Implementors define which transitions are valid and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl TransitionTable<RegistrationStatus> for TransitionPolicy {
///     fn can_transition(&self, from: &RegistrationStatus, to: &RegistrationStatus) -> bool {
///         match self {
///             TransitionPolicy::Open => true,
///             TransitionPolicy::Guarded => !matches!((from, to), (Completed, t) if *t != Completed),
///         }
///     }
///     // ...
/// }
///
/// let next = policy.transition(current, RegistrationStatus::Approved)?;
/// ```
pub trait TransitionTable<S>
where
    S: Copy + PartialEq + std::fmt::Debug,
{
    /// Returns true if the table permits moving from `from` to `to`.
    fn can_transition(&self, from: &S, to: &S) -> bool;

    /// Returns all valid target states from `from`.
    fn valid_transitions(&self, from: &S) -> Vec<S>;

    /// Performs the transition with validation, returning an error if the
    /// table forbids it.
    fn transition(&self, from: S, to: S) -> Result<S, ValidationError> {
        if self.can_transition(&from, &to) {
            Ok(to)
        } else {
            Err(ValidationError::invalid_format(
                "status",
                format!("Cannot transition from {:?} to {:?}", from, to),
            ))
        }
    }

    /// Checks if `state` has no outgoing transitions other than to itself.
    fn is_terminal(&self, state: &S) -> bool {
        self.valid_transitions(state).iter().all(|t| t == state)
    }
}
