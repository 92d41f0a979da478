//! Reactive person lookups over an in-memory, read-only table.
//! Single values come back as `Mono`, sequences as `Flux`.

pub mod logging;
pub mod model;
pub mod reactive;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::person::{Person, PersonId};
pub use model::seed::{PersonTable, SeedError, SeedResult};
pub use reactive::{Flux, Mono, ReactiveError, ReactiveResult};
pub use repo::person_repo::{InMemoryPersonRepository, PersonRepository};
pub use service::person_service::PersonService;

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
