//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the deployed schema exactly; Diesel uses
//! them for compile-time query validation. `diesel print-schema` can
//! regenerate them from a live database after a schema change.

diesel::table! {
    /// User records table.
    ///
    /// `user_id` is a `SERIAL` primary key; the database assigns it on
    /// insert. The text columns are nullable to match the record shape at
    /// the boundary, although the create endpoint only ever inserts fully
    /// populated rows.
    users (user_id) {
        /// Primary key, assigned by the database.
        user_id -> Int4,
        /// Display name of the user.
        user_name -> Nullable<Varchar>,
        /// Clear-text password column (known weakness, kept as-is).
        user_password -> Nullable<Varchar>,
        /// Street address.
        address -> Nullable<Varchar>,
        /// City of residence.
        city -> Nullable<Varchar>,
        /// Record creation timestamp, defaulted by the database.
        created_at -> Timestamptz,
    }
}
