//! Error codes for the bot API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the bot API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// General validation error
    ValidationError,
    /// Payload missing a required field
    MalformedPayload,
    /// Command name not recognized
    UnknownCommand,
    /// Interaction kind or component not recognized
    UnknownInteraction,

    // Resource not found
    /// Session not found (stale or already resolved)
    SessionNotFound,
    /// General not found error
    NotFound,

    // Programming-error class
    /// Choice missing or outside the catalog
    InvalidChoice,

    // Infrastructure
    /// Outbound notification delivery failed
    DeliveryFailed,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Every defined code; kept in sync by the uniqueness test.
    pub const ALL: [ErrorCode; 10] = [
        ErrorCode::ValidationError,
        ErrorCode::MalformedPayload,
        ErrorCode::UnknownCommand,
        ErrorCode::UnknownInteraction,
        ErrorCode::SessionNotFound,
        ErrorCode::NotFound,
        ErrorCode::InvalidChoice,
        ErrorCode::DeliveryFailed,
        ErrorCode::Internal,
        ErrorCode::ConfigError,
    ];

    /// Canonical wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::MalformedPayload => "MALFORMED_PAYLOAD",
            ErrorCode::UnknownCommand => "UNKNOWN_COMMAND",
            ErrorCode::UnknownInteraction => "UNKNOWN_INTERACTION",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InvalidChoice => "INVALID_CHOICE",
            ErrorCode::DeliveryFailed => "DELIVERY_FAILED",
            ErrorCode::Internal => "INTERNAL",
            ErrorCode::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
