//! User DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{NewUser, User};

/// User API representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    /// Identifier assigned on creation
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    /// `YYYY-MM-DD`
    #[schema(value_type = String, format = Date, example = "2005-07-14")]
    pub birth_date: NaiveDate,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            phone_number: u.phone_number,
            birth_date: u.birth_date,
        }
    }
}

/// Body of `POST` and `PUT`.
///
/// Any `id` in the body is ignored: storage assigns it on create and the
/// route decides it on update. Property names are also accepted in
/// PascalCase.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[serde(alias = "Name")]
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[serde(alias = "Email")]
    #[validate(length(min = 1, message = "is required"))]
    pub email: String,
    #[serde(default, alias = "PhoneNumber")]
    pub phone_number: Option<String>,
    /// `YYYY-MM-DD`; a full ISO 8601 date-time is accepted and truncated to its date
    #[serde(alias = "BirthDate", deserialize_with = "birth_date::deserialize")]
    #[schema(value_type = String, format = Date, example = "2005-07-14")]
    pub birth_date: NaiveDate,
}

impl From<UserRequest> for NewUser {
    fn from(r: UserRequest) -> Self {
        Self {
            name: r.name,
            email: r.email,
            phone_number: r.phone_number,
            birth_date: r.birth_date,
        }
    }
}

pub(crate) mod birth_date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| {
            de::Error::custom(format!(
                "invalid birthDate '{}': expected YYYY-MM-DD or an ISO 8601 date-time",
                raw
            ))
        })
    }

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();

        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.date_naive());
        }
        ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|dt| dt.date())
    }
}
