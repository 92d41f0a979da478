//! Repository layer abstractions.
//!
//! # Responsibility
//! - Define reactive read contracts over person data.
//! - Keep the backing table an explicit constructor dependency.
//!
//! # Invariants
//! - Repositories never raise errors for missing records; absence is an
//!   empty result.

pub mod person_repo;
