use crate::core::errors::ExchangeError;
use uuid::Uuid;

/// Identity-bearing wrapper around a decoded value-or-error.
///
/// Every wrapper gets a fresh id at construction, so logically identical
/// repeated deliveries remain distinguishable objects for identity-keyed
/// consumers (UI diffing and the like). Equality compares the id and nothing
/// else: two responses wrapping bit-identical values are unequal unless one
/// is a clone of the other.
#[derive(Debug, Clone)]
pub struct ApiResponse<T, E = ExchangeError> {
    id: Uuid,
    pub outcome: Result<T, E>,
}

impl<T, E> ApiResponse<T, E> {
    pub fn new(outcome: Result<T, E>) -> Self {
        Self {
            id: Uuid::new_v4(),
            outcome,
        }
    }

    /// The identity assigned at construction.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

impl<T, E> From<Result<T, E>> for ApiResponse<T, E> {
    fn from(outcome: Result<T, E>) -> Self {
        Self::new(outcome)
    }
}

impl<T, E> PartialEq for ApiResponse<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T, E> Eq for ApiResponse<T, E> {}
