//! Transfer object for user records and its mapping to the entity.
//!
//! The wire names are fixed by the consumers of this API: `userId`,
//! `userName`, `userPassword`, `address`, `city`. The mapping to and from
//! [`User`] is a field-for-field move in both directions; it never fails,
//! never defaults an absent field, and never touches a present one, so
//! `UserDto -> User -> UserDto` round-trips exactly.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::User;

/// User record as exposed at the HTTP boundary.
///
/// Field-isomorphic with [`User`]. Absent fields are omitted from
/// serialised output rather than emitted as `null`.
///
/// `userPassword` travels and is echoed back in clear text; that mirrors
/// the system being replaced and is a known weakness, not an invitation.
///
/// # Examples
/// ```
/// use userinfo::domain::User;
/// use userinfo::inbound::http::UserDto;
///
/// let dto = UserDto {
///     user_name: Some("Ada".into()),
///     ..UserDto::default()
/// };
/// let round_tripped = UserDto::from(User::from(dto.clone()));
/// assert_eq!(round_tripped, dto);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    /// Gateway-assigned identifier. Ignored on create requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub user_id: Option<i32>,
    /// Display name of the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Test User")]
    pub user_name: Option<String>,
    /// Clear-text password (see the type-level warning).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "password123")]
    pub user_password: Option<String>,
    /// Street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "123 Test St")]
    pub address: Option<String>,
    /// City of residence.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Test City")]
    pub city: Option<String>,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        let UserDto {
            user_id,
            user_name,
            user_password,
            address,
            city,
        } = dto;
        Self {
            id: user_id,
            name: user_name,
            password: user_password,
            address,
            city,
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            password,
            address,
            city,
        } = user;
        Self {
            user_id: id,
            user_name: name,
            user_password: password,
            address,
            city,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn full_dto() -> UserDto {
        UserDto {
            user_id: Some(1),
            user_name: Some("John Doe".into()),
            user_password: Some("password123".into()),
            address: Some("123 Main St".into()),
            city: Some("New York".into()),
        }
    }

    #[rstest]
    #[case::all_present(full_dto())]
    #[case::all_absent(UserDto::default())]
    #[case::identifier_only(UserDto { user_id: Some(2), ..UserDto::default() })]
    #[case::name_only(UserDto { user_name: Some("Jane Smith".into()), ..UserDto::default() })]
    fn mapping_round_trips_exactly(#[case] dto: UserDto) {
        assert_eq!(UserDto::from(User::from(dto.clone())), dto);
    }

    #[test]
    fn entity_mapping_copies_every_field() {
        let user = User::from(full_dto());

        assert_eq!(user.id, Some(1));
        assert_eq!(user.name.as_deref(), Some("John Doe"));
        assert_eq!(user.password.as_deref(), Some("password123"));
        assert_eq!(user.address.as_deref(), Some("123 Main St"));
        assert_eq!(user.city.as_deref(), Some("New York"));
    }

    #[test]
    fn absent_fields_stay_absent_through_the_mapping() {
        let dto = UserDto {
            user_id: Some(1),
            user_name: Some("John Doe".into()),
            ..UserDto::default()
        };

        let user = User::from(dto);

        assert_eq!(user.password, None);
        assert_eq!(user.address, None);
        assert_eq!(user.city, None);
    }

    #[test]
    fn serialised_output_uses_the_wire_names() {
        let value = serde_json::to_value(full_dto()).expect("serialise dto");

        assert_eq!(
            value,
            json!({
                "userId": 1,
                "userName": "John Doe",
                "userPassword": "password123",
                "address": "123 Main St",
                "city": "New York",
            })
        );
    }

    #[test]
    fn serialised_output_omits_absent_fields() {
        let value = serde_json::to_value(UserDto::default()).expect("serialise dto");
        assert_eq!(value, json!({}));
    }

    #[test]
    fn deserialisation_accepts_a_partial_payload() {
        let dto: UserDto =
            serde_json::from_value(json!({ "userName": "Jane Smith" })).expect("parse dto");

        assert_eq!(dto.user_name.as_deref(), Some("Jane Smith"));
        assert_eq!(dto.user_id, None);
        assert_eq!(dto.city, None);
    }
}
