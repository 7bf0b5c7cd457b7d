//! Entity lifecycle state machine
//!
//! Every catalog entity carries an `is_active` soft-delete flag. Rather
//! than re-deriving the rules from the raw boolean at each call site,
//! the flag maps to a tagged state with explicit transitions:
//! `Active <-> Inactive` via toggle (reversible), and permanent removal
//! only from `Inactive`. Hard-deleting an active entity is rejected.

use super::errors::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Active,
    Inactive,
}

impl LifecycleState {
    pub fn from_flag(is_active: bool) -> Self {
        if is_active {
            LifecycleState::Active
        } else {
            LifecycleState::Inactive
        }
    }

    pub fn as_flag(self) -> bool {
        matches!(self, LifecycleState::Active)
    }

    /// Soft-delete transition. Applying it twice restores the original state.
    pub fn toggled(self) -> Self {
        match self {
            LifecycleState::Active => LifecycleState::Inactive,
            LifecycleState::Inactive => LifecycleState::Active,
        }
    }

    /// Gate for hard deletion: only an inactive entity may be removed.
    pub fn ensure_purgeable(self, kind: &str) -> Result<(), ServiceError> {
        match self {
            LifecycleState::Inactive => Ok(()),
            LifecycleState::Active => Err(ServiceError::Policy(format!(
                "The {} must be deactivated before it can be deleted",
                kind
            ))),
        }
    }
}
