//! Driven port for user persistence adapters and their errors.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;

use crate::domain::{User, UserId};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// The user store could not be reached.
    #[error("user store connection failed: {message}")]
    Connection {
        /// Adapter-supplied failure description.
        message: String,
    },
    /// A query or mutation failed during execution.
    #[error("user store query failed: {message}")]
    Query {
        /// Adapter-supplied failure description.
        message: String,
    },
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence gateway contract for user records.
///
/// Adapters own identifier assignment: `save` returns the stored record
/// with its identifier filled in, and callers must not supply one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user record, assigning its identifier.
    async fn save(&self, user: &User) -> Result<User, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;
}

/// In-process [`UserRepository`] keeping records in a map.
///
/// Used by the test suites and as the fallback store when the service runs
/// without a database. Identifier assignment mimics a `SERIAL` column: a
/// monotonically increasing counter starting at 1.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    records: Mutex<HashMap<i32, User>>,
    next_id: AtomicI32,
}

impl InMemoryUserRepository {
    /// Number of records currently stored.
    ///
    /// Exposed so tests can assert that rejected requests never reach the
    /// gateway.
    pub fn user_count(&self) -> usize {
        self.records
            .lock()
            .map(|records| records.len())
            .unwrap_or(0)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> Result<User, UserPersistenceError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| UserPersistenceError::query("user store lock poisoned"))?;

        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let mut stored = user.clone();
        stored.id = Some(id);
        records.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let records = self
            .records
            .lock()
            .map_err(|_| UserPersistenceError::query("user store lock poisoned"))?;
        Ok(records.get(&id.get()).cloned())
    }
}
