//! Repository layer over the person store.
//!
//! # Responsibility
//! - Enforce domain validation before persistence.
//! - Maintain the in-memory cache consumed by renderers.
//!
//! # Invariants
//! - Repository writes must validate names before any store call.
//! - Store failures surface as typed errors, never as silent cache changes.

pub mod cache;
pub mod person_repo;
