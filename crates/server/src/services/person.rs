//! Person service: validation and orchestration for each use case.
//!
//! All validation lives here; the route handlers only translate HTTP.
//! Every mutating operation issues exactly one store write, and store
//! failures propagate to the caller unchanged.

use std::sync::Arc;

use tracing::{debug, instrument};

use contacts_core::{Birthday, PersonId};

use crate::db::PersonStore;
use crate::error::AppError;
use crate::models::{CreatePersonInput, NewPerson, Person, UpdatePersonInput};

/// Service for person use cases.
#[derive(Clone)]
pub struct PersonService {
    store: Arc<dyn PersonStore>,
}

impl PersonService {
    /// Create a new person service.
    #[must_use]
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { store }
    }

    /// Fetch a person by ID, including soft-deleted records.
    ///
    /// # Errors
    ///
    /// Returns `AppError::PersonNotFound` if the ID has no record.
    #[instrument(skip(self))]
    pub async fn get_person(&self, id: PersonId) -> Result<Person, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(AppError::PersonNotFound)
    }

    /// Create a person. The stored record starts with `deleted = false`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NameRequired` if the name is missing or empty.
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreatePersonInput) -> Result<Person, AppError> {
        let name = match input.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(AppError::NameRequired),
        };

        let person = self
            .store
            .insert(NewPerson {
                name,
                hobby: input.hobby,
                address: input.address,
                job: input.job,
                birthday: input.birthday.map(Birthday::new),
                phone_number: input.phone_number,
            })
            .await?;

        debug!(id = %person.id, "created person");
        Ok(person)
    }

    /// Overwrite every profile field except the name.
    ///
    /// # Errors
    ///
    /// Returns `AppError::UpdateTargetMissing` if the ID has no record.
    /// Returns `AppError::RenameNotPermitted` if the submitted name does
    /// not match the stored one; nothing is persisted in either case.
    #[instrument(skip(self, input))]
    pub async fn full_update(
        &self,
        id: PersonId,
        input: UpdatePersonInput,
    ) -> Result<Person, AppError> {
        let Some(mut person) = self.store.find_by_id(id).await? else {
            return Err(AppError::UpdateTargetMissing);
        };

        if input.name.as_deref() != Some(person.name.as_str()) {
            return Err(AppError::RenameNotPermitted);
        }

        person.hobby = input.hobby;
        person.address = input.address;
        person.job = input.job;
        person.birthday = input.birthday.map(Birthday::new);
        person.phone_number = input.phone_number;

        Ok(self.store.update(&person).await?)
    }

    /// Change the name and nothing else.
    ///
    /// The new name is accepted as-is: no uniqueness or format check.
    ///
    /// # Errors
    ///
    /// Returns `AppError::PersonNotFound` if the ID has no record.
    #[instrument(skip(self, new_name))]
    pub async fn rename(&self, id: PersonId, new_name: String) -> Result<Person, AppError> {
        let Some(mut person) = self.store.find_by_id(id).await? else {
            return Err(AppError::PersonNotFound);
        };

        person.name = new_name;
        Ok(self.store.update(&person).await?)
    }

    /// Flag a person as deleted. The record is never physically removed.
    ///
    /// # Errors
    ///
    /// Returns `AppError::PersonNotFound` if the ID has no record.
    #[instrument(skip(self))]
    pub async fn soft_delete(&self, id: PersonId) -> Result<Person, AppError> {
        let Some(mut person) = self.store.find_by_id(id).await? else {
            return Err(AppError::PersonNotFound);
        };

        person.deleted = true;
        Ok(self.store.update(&person).await?)
    }
}
