//! Person repository: validation and cache consistency over a store.
//!
//! # Responsibility
//! - Validate caller input before any persistence call.
//! - Keep the in-memory cache consistent with the store.
//!
//! # Invariants
//! - After a successful `load`, the cache equals the store contents in order.
//! - After a successful `add`, the cache gained exactly one trailing record.
//! - Failed calls leave the cache untouched.
//! - Store access and cache mutation happen under one mutex, so concurrent
//!   `add` calls are serialized and `load` never sees a half-applied `add`.

use crate::model::person::{Person, PersonName, PersonValidationError};
use crate::repo::cache::PersonCache;
use crate::store::person_store::{ErrorKind, PersonStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard, PoisonError};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for person load/add operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(PersonValidationError),
    Store(StoreError),
}

impl RepoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::ValidationFailed,
            Self::Store(err) => err.kind(),
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<PersonValidationError> for RepoError {
    fn from(value: PersonValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

struct RepoState<S> {
    store: S,
    cache: PersonCache,
}

/// Single-owner repository that mirrors store contents in a cache.
///
/// The store is injected at construction; the repository is the only caller
/// of its write path.
pub struct PersonRepository<S: PersonStore> {
    state: Mutex<RepoState<S>>,
}

impl<S: PersonStore> PersonRepository<S> {
    /// Creates a repository with an empty cache over `store`.
    pub fn new(store: S) -> Self {
        Self {
            state: Mutex::new(RepoState {
                store,
                cache: PersonCache::new(),
            }),
        }
    }

    /// Resyncs the cache from the store and returns the fresh sequence.
    ///
    /// # Errors
    /// - `ReadFailed` / `StoreClosed` from the store; the cache keeps its
    ///   previous contents.
    pub fn load(&self) -> RepoResult<Vec<Person>> {
        let mut state = self.lock();
        let people = match state.store.fetch_all() {
            Ok(people) => people,
            Err(err) => {
                warn!(
                    "event=person_load module=repo status=error error_code={:?}",
                    err.kind()
                );
                return Err(err.into());
            }
        };

        state.cache.replace_all(people.clone());
        info!(
            "event=person_load module=repo status=ok count={}",
            people.len()
        );
        Ok(people)
    }

    /// Validates `name_input`, persists it and appends the record to the cache.
    ///
    /// The cache is updated from the store-assigned id; there is no resync.
    ///
    /// # Errors
    /// - `ValidationFailed` for blank input; no store call is made.
    /// - `WriteFailed` / `StoreClosed` from the store; the cache is unchanged.
    pub fn add(&self, name_input: &str) -> RepoResult<Person> {
        let name = match PersonName::parse(name_input) {
            Ok(name) => name,
            Err(err) => {
                warn!("event=person_add module=repo status=error error_code=ValidationFailed");
                return Err(err.into());
            }
        };

        let mut state = self.lock();
        let id = match state.store.insert(&name) {
            Ok(id) => id,
            Err(err) => {
                warn!(
                    "event=person_add module=repo status=error error_code={:?}",
                    err.kind()
                );
                return Err(err.into());
            }
        };

        let person = Person::new(id, name);
        state.cache.push(person.clone());
        info!(
            "event=person_add module=repo status=ok cached={}",
            state.cache.len()
        );
        Ok(person)
    }

    /// Returns a copy of the cache for read-only consumers.
    pub fn snapshot(&self) -> Vec<Person> {
        self.lock().cache.snapshot()
    }

    pub fn cached_len(&self) -> usize {
        self.lock().cache.len()
    }

    /// Closes the underlying store. Later `load`/`add` calls fail with
    /// `StoreClosed`; the cache stays readable.
    pub fn close(&self) {
        self.lock().store.close();
    }

    /// Consumes the repository and hands back the store.
    pub fn into_store(self) -> S {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .store
    }

    fn lock(&self) -> MutexGuard<'_, RepoState<S>> {
        // A panic while holding the lock cannot leave the cache half-updated:
        // it is only mutated by whole-value replace or a single push.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
