//! Internal Diesel row structs for the users table.
//!
//! These types are implementation details of the persistence adapter and
//! are never exposed to the domain; they exist to satisfy Diesel's type
//! requirements for queries and inserts.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::User;

use super::schema::users;

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub user_id: i32,
    pub user_name: Option<String>,
    pub user_password: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    #[expect(dead_code, reason = "schema field for future audit trail support")]
    pub created_at: DateTime<Utc>,
}

impl UserRow {
    /// Convert a row into the domain entity.
    pub(crate) fn into_user(self) -> User {
        User {
            id: Some(self.user_id),
            name: self.user_name,
            password: self.user_password,
            address: self.address,
            city: self.city,
        }
    }
}

/// Insertable struct for creating user records.
///
/// `user_id` and `created_at` are absent so the database assigns them.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub user_name: Option<&'a str>,
    pub user_password: Option<&'a str>,
    pub address: Option<&'a str>,
    pub city: Option<&'a str>,
}

impl<'a> NewUserRow<'a> {
    /// Borrow the insertable fields from a domain entity.
    pub(crate) fn from_user(user: &'a User) -> Self {
        Self {
            user_name: user.name.as_deref(),
            user_password: user.password.as_deref(),
            address: user.address.as_deref(),
            city: user.city.as_deref(),
        }
    }
}
