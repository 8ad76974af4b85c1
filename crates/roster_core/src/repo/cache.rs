//! In-memory mirror of the last known store contents.
//!
//! # Invariants
//! - Order matches store order (insertion order).
//! - Only the owning repository mutates the cache.

use crate::model::person::Person;

/// Ordered sequence of people as last seen by one repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonCache {
    people: Vec<Person>,
}

impl PersonCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards current contents and takes `people` as the new mirror.
    pub fn replace_all(&mut self, people: Vec<Person>) {
        self.people = people;
    }

    /// Appends one record at the end without resyncing.
    pub fn push(&mut self, person: Person) {
        self.people.push(person);
    }

    pub fn as_slice(&self) -> &[Person] {
        &self.people
    }

    pub fn snapshot(&self) -> Vec<Person> {
        self.people.clone()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::PersonCache;
    use crate::model::person::{Person, PersonName};
    use uuid::Uuid;

    fn person(name: &str) -> Person {
        Person::new(Uuid::new_v4(), PersonName::parse(name).unwrap())
    }

    #[test]
    fn replace_all_discards_previous_contents() {
        let mut cache = PersonCache::new();
        cache.push(person("stale"));

        let fresh = vec![person("Ada"), person("Grace")];
        cache.replace_all(fresh.clone());

        assert_eq!(cache.as_slice(), fresh.as_slice());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn push_appends_at_the_end() {
        let mut cache = PersonCache::new();
        assert!(cache.is_empty());

        let ada = person("Ada");
        let grace = person("Grace");
        cache.push(ada.clone());
        cache.push(grace.clone());

        assert_eq!(cache.snapshot(), vec![ada, grace]);
    }
}
