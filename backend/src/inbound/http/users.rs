//! User endpoints.
//!
//! ```text
//! POST /user/addUser {"userName":"Test User","userPassword":"password123",...}
//! GET  /user/fetchUserById/42
//! ```
//!
//! Both handlers are pass-throughs: validate the request shape, convert
//! between the transfer object and the entity, and let the use-case port do
//! the rest. Neither holds state across requests.

use actix_web::{HttpResponse, get, post, web};

use crate::domain::{Error, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users_dto::UserDto;
use crate::inbound::http::validation::{FieldName, parse_user_id, require_text};

/// Reject the payload unless every required field is present and non-blank
/// after trimming. The first failing field wins; nothing is persisted.
fn validate_new_user(dto: &UserDto) -> ApiResult<()> {
    require_text(dto.user_name.as_deref(), FieldName::new("userName"))?;
    require_text(dto.user_password.as_deref(), FieldName::new("userPassword"))?;
    require_text(dto.address.as_deref(), FieldName::new("address"))?;
    require_text(dto.city.as_deref(), FieldName::new("city"))?;
    Ok(())
}

/// Create a user record.
///
/// The gateway assigns the identifier; any client-supplied `userId` is
/// discarded. On success the created record, identifier included, is
/// echoed back.
#[utoipa::path(
    post,
    path = "/user/addUser",
    request_body = UserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Required field blank or absent", body = Error),
        (status = 503, description = "User store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "addUser"
)]
#[post("/addUser")]
pub async fn add_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserDto>,
) -> ApiResult<HttpResponse> {
    let dto = payload.into_inner();
    validate_new_user(&dto)?;

    let mut user = User::from(dto);
    user.id = None;
    let created = state.users.add_user(user).await?;
    Ok(HttpResponse::Created().json(UserDto::from(created)))
}

/// Fetch a user record by identifier.
///
/// The path segment is parsed by hand so that non-numeric and non-positive
/// identifiers surface as a 400 with field details rather than a bare
/// routing failure. A well-formed identifier with no matching record is not
/// an error: it yields a 404 with an empty body.
#[utoipa::path(
    get,
    path = "/user/fetchUserById/{userId}",
    params(
        ("userId" = i32, Path, description = "Positive user identifier")
    ),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 400, description = "Identifier non-numeric or not positive", body = Error),
        (status = 404, description = "No user with this identifier"),
        (status = 503, description = "User store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "fetchUserById"
)]
#[get("/fetchUserById/{userId}")]
pub async fn fetch_user_by_id(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path.into_inner())?;

    match state.users.fetch_user_by_id(id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(UserDto::from(user))),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}
