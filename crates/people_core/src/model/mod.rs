//! Person domain model and the fixed seed dataset.
//!
//! # Responsibility
//! - Define the immutable `Person` record read by repositories.
//! - Own the read-only seed table injected into repository constructors.
//!
//! # Invariants
//! - Records are never mutated after construction.
//! - `PersonId` is unique within any `PersonTable`.

pub mod person;
pub mod seed;
