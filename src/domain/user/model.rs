use chrono::NaiveDate;

/// A stored user profile.
///
/// Owned snapshot: changing a field here never touches storage until it is
/// passed back to [`UserRepository::update`](super::UserRepository::update).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub birth_date: NaiveDate,
}

/// User fields before storage assigns an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub birth_date: NaiveDate,
}

impl User {
    /// Overwrite every non-id field; `id` is kept.
    pub fn apply(&mut self, fields: NewUser) {
        self.name = fields.name;
        self.email = fields.email;
        self.phone_number = fields.phone_number;
        self.birth_date = fields.birth_date;
    }

    pub fn with_id(id: i32, fields: NewUser) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            phone_number: fields.phone_number,
            birth_date: fields.birth_date,
        }
    }
}
