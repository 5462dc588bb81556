//! Domain-level error type used across services and the protocol boundary.
//!
//! This error type is HTTP-agnostic. Handlers should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation failure kinds at the event boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    UnknownCommand,
    UnknownInteraction,
    MalformedPayload,
    Other(String),
}

/// Domain-level not found entities.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Session,
    Other(String),
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation failure at the event boundary
    Validation(ValidationKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Programming-error class: a choice missing or outside the catalog
    InvalidChoice(String),
    /// Outbound notification delivery failure
    Delivery(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::InvalidChoice(d) => write!(f, "invalid choice: {d}"),
            DomainError::Delivery(d) => write!(f, "delivery failure: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn invalid_choice(detail: impl Into<String>) -> Self {
        Self::InvalidChoice(detail.into())
    }
    pub fn delivery(detail: impl Into<String>) -> Self {
        Self::Delivery(detail.into())
    }

    /// Shorthand for the missing-session case handled throughout the
    /// lifecycle controller.
    pub fn session_not_found(session_id: &str) -> Self {
        Self::not_found(NotFoundKind::Session, format!("session {session_id} not found"))
    }
}
