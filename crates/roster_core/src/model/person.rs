//! Person domain model.
//!
//! # Responsibility
//! - Define the single persisted record kind and its identifier.
//! - Own the non-empty name invariant used by every write path.
//!
//! # Invariants
//! - `PersonName` can only be constructed through validation.
//! - `Person` values are never mutated after the store assigns their id.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque identifier assigned by the store at insert time.
pub type PersonId = Uuid;

/// Validation failures for caller-supplied person input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonValidationError {
    /// Name was empty or contained only whitespace.
    Empty,
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "name must not be empty or whitespace-only"),
        }
    }
}

impl Error for PersonValidationError {}

/// Trimmed, non-empty display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    /// Trims surrounding whitespace and rejects blank input.
    pub fn parse(input: &str) -> Result<Self, PersonValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PersonValidationError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PersonName {
    type Error = PersonValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.0
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for PersonName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One persisted roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Store-assigned identifier, stable for the record lifetime.
    pub id: PersonId,
    pub name: PersonName,
}

impl Person {
    pub fn new(id: PersonId, name: PersonName) -> Self {
        Self { id, name }
    }
}
