//! Domain service implementing the user-record use-cases.
//!
//! The service is a thin pass-through: it forwards to the persistence
//! gateway and translates gateway errors into the domain envelope. It holds
//! no state of its own and is safe to share across workers.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRecords, UserRepository};
use crate::domain::{Error, User, UserId};

/// [`UserRecords`] implementation backed by a [`UserRepository`].
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Create a service over the supplied gateway.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Query { message } => Error::internal(message),
    }
}

#[async_trait]
impl UserRecords for UserService {
    async fn add_user(&self, user: User) -> Result<User, Error> {
        self.repository
            .save(&user)
            .await
            .map_err(map_persistence_error)
    }

    async fn fetch_user_by_id(&self, id: UserId) -> Result<Option<User>, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockUserRepository;
    use rstest::rstest;

    fn draft_user() -> User {
        User {
            id: None,
            name: Some("Test User".into()),
            password: Some("password123".into()),
            address: Some("123 Test St".into()),
            city: Some("Test City".into()),
        }
    }

    #[tokio::test]
    async fn add_user_returns_record_with_assigned_identifier() {
        let mut repository = MockUserRepository::new();
        repository.expect_save().times(1).returning(|user| {
            let mut stored = user.clone();
            stored.id = Some(1);
            Ok(stored)
        });
        let service = UserService::new(Arc::new(repository));

        let created = service.add_user(draft_user()).await.expect("add user");

        assert_eq!(created.id, Some(1));
        assert_eq!(created.name.as_deref(), Some("Test User"));
        assert_eq!(created.city.as_deref(), Some("Test City"));
    }

    #[tokio::test]
    async fn fetch_user_by_id_passes_through_a_hit() {
        let mut repository = MockUserRepository::new();
        repository.expect_find_by_id().times(1).returning(|id| {
            let mut stored = draft_user();
            stored.id = Some(id.get());
            Ok(Some(stored))
        });
        let service = UserService::new(Arc::new(repository));

        let found = service
            .fetch_user_by_id(UserId::new(1).expect("positive id"))
            .await
            .expect("fetch user");

        assert_eq!(found.and_then(|user| user.id), Some(1));
    }

    #[tokio::test]
    async fn fetch_user_by_id_passes_through_a_miss() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        let service = UserService::new(Arc::new(repository));

        let found = service
            .fetch_user_by_id(UserId::new(999).expect("positive id"))
            .await
            .expect("fetch user");

        assert_eq!(found, None);
    }

    #[rstest]
    #[case(
        UserPersistenceError::connection("store unreachable"),
        ErrorCode::ServiceUnavailable
    )]
    #[case(UserPersistenceError::query("bad statement"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn gateway_failures_map_to_domain_codes(
        #[case] failure: UserPersistenceError,
        #[case] expected: ErrorCode,
    ) {
        let mut repository = MockUserRepository::new();
        let save_failure = failure.clone();
        repository
            .expect_save()
            .returning(move |_| Err(save_failure.clone()));
        repository
            .expect_find_by_id()
            .returning(move |_| Err(failure.clone()));
        let service = UserService::new(Arc::new(repository));

        let add_err = service
            .add_user(draft_user())
            .await
            .expect_err("save should fail");
        let fetch_err = service
            .fetch_user_by_id(UserId::new(1).expect("positive id"))
            .await
            .expect_err("fetch should fail");

        assert_eq!(add_err.code(), expected);
        assert_eq!(fetch_err.code(), expected);
    }
}
