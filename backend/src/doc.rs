//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers from [`crate::inbound::http::schemas`], keeping
//! domain types free of utoipa derives.
//!
//! The generated document is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::health::ReadinessReport;
use crate::inbound::http::recipes::{
    CreateRecipeRequest, RecipeDeletedResponse, RecipeUpdatedResponse, UpdateRecipeRequest,
};
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, FieldChangeSchema, RecipeSchema, UserSchema,
};
use crate::inbound::http::users::{
    CreateUserRequest, UpdateUserRequest, UserDeletedResponse, UserUpdatedResponse,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipe API",
        description = "In-memory recipe and user records with fuzzy name and tag search."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::root::welcome,
        crate::inbound::http::recipes::list_recipes,
        crate::inbound::http::recipes::search_recipes_by_name,
        crate::inbound::http::recipes::search_recipes_by_tag,
        crate::inbound::http::recipes::get_recipe,
        crate::inbound::http::recipes::create_recipe,
        crate::inbound::http::recipes::update_recipe,
        crate::inbound::http::recipes::delete_recipe,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RecipeSchema,
        UserSchema,
        FieldChangeSchema,
        ErrorSchema,
        ErrorCodeSchema,
        CreateRecipeRequest,
        UpdateRecipeRequest,
        RecipeUpdatedResponse,
        RecipeDeletedResponse,
        CreateUserRequest,
        UpdateUserRequest,
        UserUpdatedResponse,
        UserDeletedResponse,
        ReadinessReport,
    )),
    tags(
        (name = "root", description = "API greeting"),
        (name = "recipes", description = "Recipe records and search"),
        (name = "users", description = "User records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
