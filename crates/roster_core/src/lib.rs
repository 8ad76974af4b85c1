//! Core persistence for the roster: a durable list of people's names.
//! This crate is the single source of truth for the non-empty name invariant.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use config::{ConfigOverrides, RosterConfig};
pub use logging::{
    default_log_level, init_from_config, init_logging, logging_status, LoggingError,
};
pub use model::person::{Person, PersonId, PersonName, PersonValidationError};
pub use repo::cache::PersonCache;
pub use repo::person_repo::{PersonRepository, RepoError, RepoResult};
pub use store::person_store::{
    ErrorKind, PersonStore, SqlitePersonStore, StoreError, StoreResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
