//! User entity and request identifier.

use std::fmt;

/// Validation errors returned by [`UserId::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserIdError {
    /// The identifier was zero or negative.
    NonPositive {
        /// The rejected value.
        value: i32,
    },
}

impl fmt::Display for UserIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { value } => {
                write!(f, "user id must be a positive integer, got {value}")
            }
        }
    }
}

impl std::error::Error for UserIdError {}

/// Validated positive user identifier.
///
/// The persistence gateway assigns identifiers on creation, so a `UserId`
/// only ever refers to a record that could exist. Lookups and the gateway
/// contract take this type rather than a raw integer.
///
/// # Examples
/// ```
/// use userinfo::domain::UserId;
///
/// let id = UserId::new(7).expect("positive id");
/// assert_eq!(id.get(), 7);
/// assert!(UserId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(i32);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(value: i32) -> Result<Self, UserIdError> {
        if value <= 0 {
            return Err(UserIdError::NonPositive { value });
        }
        Ok(Self(value))
    }

    /// Access the underlying integer.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User record in its persisted form.
///
/// Every field mirrors one column of the user store, and the transfer
/// object ([`crate::inbound::http::UserDto`]) is field-isomorphic with this
/// type. Fields are optional so that the DTO↔entity mapping stays total and
/// lossless in both directions; the create endpoint enforces presence
/// before anything reaches the gateway.
///
/// `id` is `None` until the gateway assigns an identifier on save.
///
/// The password is held and persisted in clear text. This mirrors the
/// system being replaced and is a known weakness; hashing was deliberately
/// not introduced here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct User {
    /// Gateway-assigned identifier, absent before the first save.
    pub id: Option<i32>,
    /// Display name of the user.
    pub name: Option<String>,
    /// Clear-text password (see the type-level warning).
    pub password: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// City of residence.
    pub city: Option<String>,
}
