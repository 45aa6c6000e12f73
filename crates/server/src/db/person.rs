//! Postgres-backed person store.
//!
//! Queries use the runtime-checked sqlx API so the crate builds without a
//! live database.

use async_trait::async_trait;
use sqlx::PgPool;

use contacts_core::{Birthday, PersonId};

use super::{PersonStore, RepositoryError};
use crate::models::{NewPerson, Person};

/// Internal row type for person queries.
#[derive(Debug, sqlx::FromRow)]
struct PersonRow {
    id: i32,
    name: String,
    hobby: Option<String>,
    address: Option<String>,
    job: Option<String>,
    birthday: Option<Birthday>,
    phone_number: Option<String>,
    deleted: bool,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Self {
            id: PersonId::new(row.id),
            name: row.name,
            hobby: row.hobby,
            address: row.address,
            job: row.job,
            birthday: row.birthday,
            phone_number: row.phone_number,
            deleted: row.deleted,
        }
    }
}

/// Person store backed by the `person` table.
pub struct PgPersonStore {
    pool: PgPool,
}

impl PgPersonStore {
    /// Create a new Postgres person store.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonStore for PgPersonStore {
    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, RepositoryError> {
        let row: Option<PersonRow> = sqlx::query_as(
            r"
            SELECT id, name, hobby, address, job, birthday, phone_number, deleted
            FROM person
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, person: NewPerson) -> Result<Person, RepositoryError> {
        let row: PersonRow = sqlx::query_as(
            r"
            INSERT INTO person (name, hobby, address, job, birthday, phone_number, deleted)
            VALUES ($1, $2, $3, $4, $5, $6, FALSE)
            RETURNING id, name, hobby, address, job, birthday, phone_number, deleted
            ",
        )
        .bind(&person.name)
        .bind(&person.hobby)
        .bind(&person.address)
        .bind(&person.job)
        .bind(person.birthday)
        .bind(&person.phone_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, person: &Person) -> Result<Person, RepositoryError> {
        let row: PersonRow = sqlx::query_as(
            r"
            UPDATE person
            SET name = $2, hobby = $3, address = $4, job = $5,
                birthday = $6, phone_number = $7, deleted = $8
            WHERE id = $1
            RETURNING id, name, hobby, address, job, birthday, phone_number, deleted
            ",
        )
        .bind(person.id)
        .bind(&person.name)
        .bind(&person.hobby)
        .bind(&person.address)
        .bind(&person.job)
        .bind(person.birthday)
        .bind(&person.phone_number)
        .bind(person.deleted)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<Person>, RepositoryError> {
        let rows: Vec<PersonRow> = sqlx::query_as(
            r"
            SELECT id, name, hobby, address, job, birthday, phone_number, deleted
            FROM person
            WHERE NOT deleted
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_all_including_deleted(&self) -> Result<Vec<Person>, RepositoryError> {
        let rows: Vec<PersonRow> = sqlx::query_as(
            r"
            SELECT id, name, hobby, address, job, birthday, phone_number, deleted
            FROM person
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
