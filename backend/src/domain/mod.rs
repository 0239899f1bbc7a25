//! Domain types, ports, and services.
//!
//! Purpose: define the user entity, the validated request identifier, the
//! transport-agnostic error envelope, and the ports that separate inbound
//! adapters from persistence. Nothing in this module knows about HTTP or
//! the database.

pub mod error;
pub mod ports;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::user::{User, UserId, UserIdError};
pub use self::user_service::UserService;
