//! Person query service.
//!
//! # Responsibility
//! - Compose repository results into named lookups with explicit
//!   cardinality policies.
//!
//! # Invariants
//! - `first_with_id` completes empty when nothing matches.
//! - `exactly_one_with_id` fails with a cardinality violation unless exactly
//!   one record matches; `exactly_one_with_id_or_default` recovers that
//!   failure with `Person::with_id`.

use crate::model::person::{Person, PersonId};
use crate::reactive::{Flux, Mono};
use crate::repo::person_repo::PersonRepository;
use log::warn;

/// Use-case service wrapper for person lookups.
pub struct PersonService<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Direct id lookup; empty on a miss.
    pub fn get_person(&self, id: PersonId) -> Mono<Person> {
        self.repo.get_by_id(id)
    }

    pub fn list_people(&self) -> Flux<Person> {
        self.repo.find_all()
    }

    pub fn list_people_collected(&self) -> Mono<Vec<Person>> {
        self.repo.find_all().collect_list()
    }

    /// Scans all records and takes the first with `id`.
    pub fn first_with_id(&self, id: PersonId) -> Mono<Person> {
        self.matching_id(id).next()
    }

    /// Scans all records and requires exactly one with `id`.
    ///
    /// # Errors
    /// - `ReactiveError::NoSuchElement` when nothing matches.
    /// - `ReactiveError::TooManyElements` when several records match.
    pub fn exactly_one_with_id(&self, id: PersonId) -> Mono<Person> {
        self.matching_id(id).single()
    }

    /// Same as `exactly_one_with_id`, substituting `Person::with_id(id)` on failure.
    pub fn exactly_one_with_id_or_default(&self, id: PersonId) -> Mono<Person> {
        self.exactly_one_with_id(id)
            .do_on_error(move |err| {
                warn!(
                    "event=person_single_lookup module=service status=error id={} error={}",
                    id, err
                );
            })
            .on_error_return(Person::with_id(id))
    }

    /// First name of the record with `id`; empty on a miss.
    pub fn first_name_of(&self, id: PersonId) -> Mono<String> {
        self.repo
            .get_by_id(id)
            .map(|person| person.first_name().to_string())
    }

    fn matching_id(&self, id: PersonId) -> Flux<Person> {
        self.repo.find_all().filter(move |person| person.id() == id)
    }
}
