//! Domain model for the roster.
//!
//! # Responsibility
//! - Define the canonical record persisted by the store.
//!
//! # Invariants
//! - Every person is identified by a store-assigned `PersonId`.
//! - A persisted name is never empty or whitespace-only.

pub mod person;
