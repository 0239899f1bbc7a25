//! PostgreSQL persistence adapter using Diesel.
//!
//! Concrete implementation of the user persistence gateway backed by
//! PostgreSQL via `diesel-async` with `bb8` pooling. Row structs and table
//! definitions are private to this module; the domain only ever sees
//! [`crate::domain::User`] and the port error type.

mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
