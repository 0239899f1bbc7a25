//! Driving port for the user-record use-cases.
//!
//! Inbound adapters (HTTP handlers) depend on this port rather than on the
//! persistence gateway, so handlers stay testable without I/O and the error
//! surface they see is the domain envelope, never adapter error types.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Use-case surface consumed by the HTTP handlers.
#[async_trait]
pub trait UserRecords: Send + Sync {
    /// Store a new user and return it with its assigned identifier.
    async fn add_user(&self, user: User) -> Result<User, Error>;

    /// Look up a user by identifier; `None` when no record matches.
    async fn fetch_user_by_id(&self, id: UserId) -> Result<Option<User>, Error>;
}
