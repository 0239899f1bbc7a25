//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct that generates the OpenAPI specification
//! for the REST API: the user endpoints, the health probes, and the shared
//! schemas. Swagger UI serves the result in debug builds.

use utoipa::OpenApi;

use crate::domain::error::{Error, ErrorCode};
use crate::inbound::http::users_dto::UserDto;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Userinfo API",
        description = "Create and fetch user records over HTTP."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::add_user,
        crate::inbound::http::users::fetch_user_by_id,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserDto, Error, ErrorCode)),
    tags(
        (name = "users", description = "Operations on user records"),
        (name = "health", description = "Probes for orchestration")
    )
)]
pub struct ApiDoc;
