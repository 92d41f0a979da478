//! Person record.
//!
//! # Responsibility
//! - Define the identity + name value served by person repositories.
//!
//! # Invariants
//! - Fields are private; a `Person` cannot change once constructed.
//! - Wire names are `id`, `firstName`, `lastName`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Identifier of a person record.
pub type PersonId = i32;

/// Immutable person value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    id: PersonId,
    first_name: String,
    last_name: String,
}

impl Person {
    pub fn new(id: PersonId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Creates a placeholder record carrying only an id.
    ///
    /// Used as the substitute value when a lookup that requires exactly one
    /// match fails and the caller recovers with a default.
    pub fn with_id(id: PersonId) -> Self {
        Self::new(id, String::new(), String::new())
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Person{{id={}, firstName='{}', lastName='{}'}}",
            self.id, self.first_name, self.last_name
        )
    }
}
