//! Durable persistence boundary for people records.
//!
//! # Responsibility
//! - Define the store contract consumed by the repository layer.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Only store implementations write the backing medium.
//! - Every operation after `close` fails with `StoreError::Closed`.

pub mod person_store;
