//! Person repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Expose read-only reactive access to a `PersonTable`.
//!
//! # Invariants
//! - `get_by_id` completes empty on a miss; it never fails and never emits
//!   a placeholder record.
//! - `find_all` replays every record in table order for each subscription.

use crate::model::person::{Person, PersonId};
use crate::model::seed::PersonTable;
use crate::reactive::{Flux, Mono};
use log::debug;

/// Repository interface for person lookups.
pub trait PersonRepository {
    fn get_by_id(&self, id: PersonId) -> Mono<Person>;
    fn find_all(&self) -> Flux<Person>;
}

/// Repository serving records from an injected immutable table.
#[derive(Debug, Clone)]
pub struct InMemoryPersonRepository {
    table: PersonTable,
}

impl InMemoryPersonRepository {
    pub fn new(table: PersonTable) -> Self {
        Self { table }
    }

    /// Repository over the process-wide seed table.
    pub fn seeded() -> Self {
        Self::new(PersonTable::seed())
    }

    pub fn table(&self) -> &PersonTable {
        &self.table
    }
}

impl PersonRepository for InMemoryPersonRepository {
    fn get_by_id(&self, id: PersonId) -> Mono<Person> {
        let found = self.table.find(id).cloned();
        debug!(
            "event=person_get_by_id module=repo status=ok id={} found={}",
            id,
            found.is_some()
        );
        Mono::just_or_empty(found)
    }

    fn find_all(&self) -> Flux<Person> {
        debug!(
            "event=person_find_all module=repo status=ok count={}",
            self.table.len()
        );
        Flux::from_iterable(self.table.clone())
    }
}
