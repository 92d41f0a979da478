//! Read-only person tables.
//!
//! # Responsibility
//! - Hold the fixed four-record seed set built once per process.
//! - Allow callers to build and inject alternative tables.
//!
//! # Invariants
//! - Tables are immutable after construction and keep insertion order.
//! - `try_from_records` rejects duplicate ids; the literal seed set is
//!   trusted as written.

use crate::model::person::{Person, PersonId};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

static SEED_TABLE: Lazy<PersonTable> = Lazy::new(|| PersonTable {
    records: Arc::from(vec![
        Person::new(1, "Michael", "Weston"),
        Person::new(2, "Fiona", "Glenanne"),
        Person::new(3, "Sam", "Axe"),
        Person::new(4, "Jesse", "Porter"),
    ]),
});

pub type SeedResult<T> = Result<T, SeedError>;

/// Error raised when building a custom person table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    DuplicateId(PersonId),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate person id in table: {id}"),
        }
    }
}

impl Error for SeedError {}

/// Immutable, ordered set of person records.
///
/// Cloning shares the underlying slice, so one table can back any number of
/// repositories and subscriptions.
#[derive(Debug, Clone)]
pub struct PersonTable {
    records: Arc<[Person]>,
}

impl PersonTable {
    /// Returns the process-wide seed table.
    pub fn seed() -> Self {
        SEED_TABLE.clone()
    }

    pub fn empty() -> Self {
        Self {
            records: Arc::from(Vec::new()),
        }
    }

    /// Builds a table from caller-supplied records, keeping their order.
    ///
    /// # Errors
    /// - Returns `SeedError::DuplicateId` when two records share an id.
    pub fn try_from_records(records: Vec<Person>) -> SeedResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for person in &records {
            if !seen.insert(person.id()) {
                return Err(SeedError::DuplicateId(person.id()));
            }
        }
        Ok(Self {
            records: Arc::from(records),
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.records.iter()
    }

    /// Exact-match lookup by id.
    pub fn find(&self, id: PersonId) -> Option<&Person> {
        self.records.iter().find(|person| person.id() == id)
    }

    pub fn to_vec(&self) -> Vec<Person> {
        self.records.to_vec()
    }
}

/// Yields owned copies of every record, in table order.
impl IntoIterator for PersonTable {
    type Item = Person;
    type IntoIter = std::vec::IntoIter<Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_vec().into_iter()
    }
}
