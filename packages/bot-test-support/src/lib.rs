//! Bot test support utilities
//!
//! This crate provides utilities shared by unit and integration tests,
//! currently unified logging initialization.

pub mod logging;
