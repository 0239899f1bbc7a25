//! Shared HTTP adapter state.
//!
//! Handlers receive their collaborators through `actix_web::web::Data`
//! rather than a global registry, so tests can swap in whatever port
//! implementation they need.

use std::sync::Arc;

use crate::domain::ports::UserRecords;

/// Dependency bundle for the HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Use-case port backing the user endpoints.
    pub users: Arc<dyn UserRecords>,
}

impl HttpState {
    /// Construct state from the user-records port.
    pub fn new(users: Arc<dyn UserRecords>) -> Self {
        Self { users }
    }
}
