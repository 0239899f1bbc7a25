//! Domain ports for the hexagonal boundary.

mod user_records;
mod user_repository;

pub use user_records::UserRecords;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{InMemoryUserRepository, UserPersistenceError, UserRepository};
