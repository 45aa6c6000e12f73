//! In-memory person store for tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use contacts_core::PersonId;

use super::{PersonStore, RepositoryError};
use crate::models::{NewPerson, Person};

/// Person store backed by a map. IDs are assigned sequentially from 1,
/// matching the serial column of the Postgres store.
#[derive(Default)]
pub struct InMemoryPersonStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i32,
    rows: BTreeMap<i32, Person>,
}

impl InMemoryPersonStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersonStore for InMemoryPersonStore {
    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, RepositoryError> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.get(&id.as_i32()).cloned())
    }

    async fn insert(&self, person: NewPerson) -> Result<Person, RepositoryError> {
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let id = inner.next_id;

        let person = Person {
            id: PersonId::new(id),
            name: person.name,
            hobby: person.hobby,
            address: person.address,
            job: person.job,
            birthday: person.birthday,
            phone_number: person.phone_number,
            deleted: false,
        };
        inner.rows.insert(id, person.clone());
        Ok(person)
    }

    async fn update(&self, person: &Person) -> Result<Person, RepositoryError> {
        let mut inner = self.inner.lock().await;
        let slot = inner
            .rows
            .get_mut(&person.id.as_i32())
            .ok_or(RepositoryError::NotFound)?;
        *slot = person.clone();
        Ok(person.clone())
    }

    async fn find_all(&self) -> Result<Vec<Person>, RepositoryError> {
        let inner = self.inner.lock().await;
        Ok(inner
            .rows
            .values()
            .filter(|person| !person.deleted)
            .cloned()
            .collect())
    }

    async fn find_all_including_deleted(&self) -> Result<Vec<Person>, RepositoryError> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
