//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (conflicts,
/// ceilings, invariants). Each variant is a distinct kind so the transport layer
/// can map it to its own status without inspecting messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The identity already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    /// A referenced entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A referenced identifier (e.g. a location) does not resolve.
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// A location-level ceiling (count or capacity) would be violated.
    #[error("capacity exceeded: {0}")]
    CapacityExceeded(String),

    /// An internal consistency rule was violated.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A well-formed request that cannot be applied as sent (e.g. a client-set id).
    #[error("unprocessable: {0}")]
    Unprocessable(String),

    /// The storage collaborator failed.
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Discriminant of [`DomainError`], for mapping without matching on payloads.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    InvalidReference,
    CapacityExceeded,
    InvalidState,
    Unprocessable,
    Storage,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_reference(msg: impl Into<String>) -> Self {
        Self::InvalidReference(msg.into())
    }

    pub fn capacity_exceeded(msg: impl Into<String>) -> Self {
        Self::CapacityExceeded(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self::Unprocessable(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation(_) => ErrorKind::Validation,
            DomainError::Conflict(_) => ErrorKind::Conflict,
            DomainError::NotFound(_) => ErrorKind::NotFound,
            DomainError::InvalidReference(_) => ErrorKind::InvalidReference,
            DomainError::CapacityExceeded(_) => ErrorKind::CapacityExceeded,
            DomainError::InvalidState(_) => ErrorKind::InvalidState,
            DomainError::Unprocessable(_) => ErrorKind::Unprocessable,
            DomainError::Storage(_) => ErrorKind::Storage,
        }
    }

    /// Human-readable reason without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            DomainError::Validation(m)
            | DomainError::Conflict(m)
            | DomainError::NotFound(m)
            | DomainError::InvalidReference(m)
            | DomainError::CapacityExceeded(m)
            | DomainError::InvalidState(m)
            | DomainError::Unprocessable(m)
            | DomainError::Storage(m) => m,
        }
    }
}
