// Unit tests for error mapping - pure domain logic without HTTP dependencies
use std::collections::HashSet;

use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_400() {
    let de = DomainError::validation(ValidationKind::UnknownCommand, "no such command");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::UnknownCommand);
    assert_eq!(app.status().as_u16(), 400);

    let de = DomainError::validation(ValidationKind::UnknownInteraction, "no such component");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::UnknownInteraction);
    assert_eq!(app.status().as_u16(), 400);

    let de = DomainError::validation(ValidationKind::MalformedPayload, "missing user id");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::MalformedPayload);
    assert_eq!(app.status().as_u16(), 400);

    // Generic validation fallback
    let de = DomainError::validation(ValidationKind::Other("weird".into()), "odd input");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_not_found() {
    let de = DomainError::session_not_found("abc");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::SessionNotFound);
    assert_eq!(app.status().as_u16(), 404);

    let de = DomainError::not_found(NotFoundKind::Other("thing".into()), "no thing");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::NotFound);
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn invalid_choice_is_the_programming_error_class() {
    let de = DomainError::invalid_choice("unknown choice id \"banana\"");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::InvalidChoice);
    assert_eq!(app.status().as_u16(), 500);
    assert!(matches!(app, AppError::InvalidChoice { .. }));
}

#[test]
fn maps_delivery_to_502() {
    let de = DomainError::delivery("webhook edit refused");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::DeliveryFailed);
    assert_eq!(app.status().as_u16(), 502);
}

#[test]
fn error_codes_are_unique_on_the_wire() {
    let mut seen = HashSet::new();
    for code in ErrorCode::ALL {
        assert!(seen.insert(code.as_str()), "duplicate code {}", code.as_str());
        assert!(!code.as_str().is_empty());
        assert_eq!(code.as_str(), code.as_str().to_uppercase());
    }
    assert_eq!(seen.len(), ErrorCode::ALL.len());
}
