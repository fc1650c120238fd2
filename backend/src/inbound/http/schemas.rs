//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and register under the domain
//! type's path.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// No record matches the identifier or search term.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Recipe not found.")]
    message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Offending field, entry index and validation code, when known.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Recipe`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Recipe)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RecipeSchema {
    #[schema(example = 1)]
    id: u64,
    #[schema(example = "Sinigang")]
    name: String,
    ingredients: Vec<String>,
    /// Ordered steps, conventionally numbered.
    steps: Vec<String>,
    /// Tag labels such as "Lunch".
    tag: Vec<String>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    #[schema(example = 1)]
    id: u64,
    #[schema(example = "Juan Dela Cruz")]
    name: String,
    #[schema(example = "juan@example.com")]
    email: String,
    /// Returned exactly as stored.
    password: String,
}

/// OpenAPI schema for [`crate::domain::FieldChange`].
#[derive(ToSchema)]
#[schema(as = crate::domain::FieldChange)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FieldChangeSchema {
    /// Value before the update.
    old: serde_json::Value,
    /// Value after the update.
    new: serde_json::Value,
}
