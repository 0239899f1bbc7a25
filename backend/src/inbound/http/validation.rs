//! Request validation helpers for the inbound HTTP adapter.
//!
//! Every rejection carries a `details` object naming the offending field
//! and a stable code, so clients can react without parsing messages.

use serde_json::json;

use crate::domain::{Error, UserId};

/// Wire-level name of a request field, as clients see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn rejection(field: FieldName, message: String, code: &'static str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code,
    }))
}

/// Require a text field to be present and non-blank after trimming.
pub(crate) fn require_text(value: Option<&str>, field: FieldName) -> Result<(), Error> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(()),
        _ => {
            let name = field.as_str();
            Err(rejection(
                field,
                format!("{name} must be present and non-blank"),
                "blank_field",
            ))
        }
    }
}

/// Parse the `userId` path segment into a validated identifier.
///
/// Non-numeric input and values outside `i32` are rejected as malformed;
/// zero and negative values are rejected as non-positive. Both are client
/// errors, distinguished only by the detail code.
pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    let field = FieldName::new("userId");
    let value: i32 = raw.parse().map_err(|_| {
        rejection(
            field,
            "userId must be a positive integer".into(),
            "invalid_user_id",
        )
    })?;

    UserId::new(value).map_err(|_| {
        rejection(
            field,
            format!("userId must be a positive integer, got {value}"),
            "non_positive_user_id",
        )
    })
}
