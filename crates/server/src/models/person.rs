//! Person domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use contacts_core::{Birthday, PersonId};

/// A person record.
///
/// `name` is set at creation and only ever changed through the dedicated
/// rename operation. `deleted` is monotonic: records are flagged, never
/// removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Unique person ID.
    pub id: PersonId,
    /// Display name.
    pub name: String,
    /// Optional hobby.
    pub hobby: Option<String>,
    /// Optional address.
    pub address: Option<String>,
    /// Optional job.
    pub job: Option<String>,
    /// Optional date of birth.
    pub birthday: Option<Birthday>,
    /// Optional phone number.
    pub phone_number: Option<String>,
    /// Soft-delete flag.
    pub deleted: bool,
}

/// Input for creating a person.
///
/// `name` stays optional at the wire level; the service rejects a missing
/// or empty name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonInput {
    /// Display name (required; enforced by the service).
    pub name: Option<String>,
    /// Optional hobby.
    pub hobby: Option<String>,
    /// Optional address.
    pub address: Option<String>,
    /// Optional job.
    pub job: Option<String>,
    /// Optional date of birth.
    pub birthday: Option<NaiveDate>,
    /// Optional phone number.
    pub phone_number: Option<String>,
}

/// Input for a full update.
///
/// `name` must match the stored name; every other field overwrites the
/// stored value, including overwriting with absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePersonInput {
    /// Display name (must equal the stored name).
    pub name: Option<String>,
    /// New hobby.
    pub hobby: Option<String>,
    /// New address.
    pub address: Option<String>,
    /// New job.
    pub job: Option<String>,
    /// New date of birth.
    pub birthday: Option<NaiveDate>,
    /// New phone number.
    pub phone_number: Option<String>,
}

/// Validated insert payload handed to the store.
///
/// Inserted records always start with `deleted = false`.
#[derive(Debug, Clone)]
pub struct NewPerson {
    /// Display name.
    pub name: String,
    /// Optional hobby.
    pub hobby: Option<String>,
    /// Optional address.
    pub address: Option<String>,
    /// Optional job.
    pub job: Option<String>,
    /// Optional date of birth.
    pub birthday: Option<Birthday>,
    /// Optional phone number.
    pub phone_number: Option<String>,
}

/// Wire representation of a person, with fields derived from the birthday
/// at read time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonResponse {
    /// Unique person ID.
    pub id: PersonId,
    /// Display name.
    pub name: String,
    /// Optional hobby.
    pub hobby: Option<String>,
    /// Optional address.
    pub address: Option<String>,
    /// Optional job.
    pub job: Option<String>,
    /// Optional date of birth.
    pub birthday: Option<Birthday>,
    /// Optional phone number.
    pub phone_number: Option<String>,
    /// Soft-delete flag.
    pub deleted: bool,
    /// Age in whole years as of `today`; absent without a birthday.
    pub age: Option<i32>,
    /// Whether the birthday falls on `today`.
    pub birthday_today: bool,
}

impl PersonResponse {
    /// Build the wire representation of `person` as seen on `today`.
    #[must_use]
    pub fn on(person: Person, today: NaiveDate) -> Self {
        let age = person.birthday.map(|b| b.age_on(today));
        let birthday_today = person.birthday.is_some_and(|b| b.is_on(today));

        Self {
            id: person.id,
            name: person.name,
            hobby: person.hobby,
            address: person.address,
            job: person.job,
            birthday: person.birthday,
            phone_number: person.phone_number,
            deleted: person.deleted,
            age,
            birthday_today,
        }
    }
}
