//! Cold single-value and multi-value async containers.
//!
//! # Responsibility
//! - Wrap `futures` futures/streams into `Mono` (zero-or-one) and `Flux`
//!   (zero-or-many) containers with the operators repository callers need.
//! - Keep "empty" and "failed" as distinct outcomes.
//!
//! # Invariants
//! - Containers are cold: every subscription re-runs the source from the
//!   start, so independent observers never drain each other.
//! - Only operations named `block*` or `*_blocking` wait on the calling thread.

mod error;
mod flux;
mod mono;

pub use error::{ReactiveError, ReactiveResult};
pub use flux::Flux;
pub use mono::Mono;
