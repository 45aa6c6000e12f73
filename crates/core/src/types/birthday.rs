//! Birthday type.

use core::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A person's date of birth.
///
/// Age and "is the birthday today" are always derived from this date at
/// read time relative to a caller-supplied reference date; neither is ever
/// stored, so they can never go stale.
///
/// ## Examples
///
/// ```
/// use chrono::NaiveDate;
/// use contacts_core::Birthday;
///
/// let birthday = Birthday::new(NaiveDate::from_ymd_opt(1991, 8, 15).unwrap());
/// let today = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
///
/// assert_eq!(birthday.age_on(today), 35);
/// assert!(birthday.is_on(today));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a `Birthday` from a calendar date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the underlying calendar date.
    #[must_use]
    pub const fn as_date(&self) -> NaiveDate {
        self.0
    }

    /// Age in whole years as of `today`.
    ///
    /// Current year minus birth year, minus one if the birthday has not
    /// yet occurred this year.
    #[must_use]
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        let mut age = today.year() - self.0.year();
        if (today.month(), today.day()) < (self.0.month(), self.0.day()) {
            age -= 1;
        }
        age
    }

    /// Whether `today`'s month and day match the birthday.
    #[must_use]
    pub fn is_on(&self, today: NaiveDate) -> bool {
        today.month() == self.0.month() && today.day() == self.0.day()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<Birthday> for NaiveDate {
    fn from(birthday: Birthday) -> Self {
        birthday.0
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Birthday {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <NaiveDate as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <NaiveDate as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Birthday {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let date = <NaiveDate as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self(date))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Birthday {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <NaiveDate as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}
