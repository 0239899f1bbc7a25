//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod state;
pub mod users;
pub mod users_dto;
pub(crate) mod validation;

pub use error::ApiResult;
pub use state::HttpState;
pub use users_dto::UserDto;

use actix_web::web;

/// Mount every endpoint of the service onto an application.
///
/// Expects [`HttpState`] and [`health::HealthState`] to be registered as
/// application data by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .service(users::add_user)
            .service(users::fetch_user_by_id),
    )
    .service(health::ready)
    .service(health::live);
}
