//! Core use-case services.
//!
//! # Responsibility
//! - Build consumer-side queries on top of repository contracts.
//! - Keep callers decoupled from the backing table.

pub mod person_service;
