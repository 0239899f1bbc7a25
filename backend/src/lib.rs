//! User-record service: create a user, fetch a user by identifier.
//!
//! The crate follows a hexagonal layout: `domain` holds the entity, the
//! error envelope, and the ports; `inbound::http` adapts actix-web onto the
//! driving port; `outbound::persistence` implements the gateway against
//! PostgreSQL. `main` wires the three together.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
