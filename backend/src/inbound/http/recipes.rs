//! Recipe HTTP handlers.
//!
//! ```text
//! GET    /api/recipes
//! GET    /api/recipes/name/{fragment}
//! GET    /api/recipes/tag/{fragment}
//! GET    /api/recipes/{id}
//! POST   /api/recipes
//! PUT    /api/recipes/{id}
//! DELETE /api/recipes/{id}
//! ```
//!
//! The `name` and `tag` search routes must be registered before the `{id}`
//! routes so their static segments win.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ChangeLog, Error, NewRecipe, Recipe, RecipePatch, RecordId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, RecipeSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, missing_field_error, parse_record_id, recipe_validation_error,
};

const ID: FieldName = FieldName::new("id");

/// Request payload for creating a recipe.
///
/// Example JSON:
/// `{"name":"Tinola","ingredients":["Chicken"],"steps":["1. Simmer."],"tag":["Dinner"]}`
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateRecipeRequest {
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub steps: Option<Vec<String>>,
    /// Defaults to no tags.
    pub tag: Option<Vec<String>>,
}

/// Request payload for a partial recipe update.
///
/// Any subset of fields may be supplied. `id` is accepted for compatibility
/// with clients that echo the full record, and ignored.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateRecipeRequest {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub steps: Option<Vec<String>>,
    pub tag: Option<Vec<String>>,
}

/// Response payload for a successful update.
#[derive(Debug, Serialize, ToSchema)]
pub struct RecipeUpdatedResponse {
    #[schema(example = "The recipe has been updated.")]
    pub message: String,
    #[schema(value_type = RecipeSchema)]
    pub recipe: Recipe,
    /// Map from changed field name to `{old, new}`.
    #[schema(value_type = Object)]
    pub changes: ChangeLog,
}

/// Response payload for a successful delete.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDeletedResponse {
    #[schema(example = "A recipe with ID 3 has been deleted.")]
    pub message: String,
    #[schema(value_type = RecipeSchema)]
    pub deleted_recipe: Recipe,
}

/// Confirmation message for an update.
pub const RECIPE_UPDATED: &str = "The recipe has been updated.";

fn deleted_message(id: RecordId) -> String {
    format!("A recipe with ID {id} has been deleted.")
}

fn parse_create_request(payload: CreateRecipeRequest) -> Result<NewRecipe, Error> {
    let name = payload
        .name
        .ok_or_else(|| missing_field_error(FieldName::new("name")))?;
    let ingredients = payload
        .ingredients
        .ok_or_else(|| missing_field_error(FieldName::new("ingredients")))?;
    let steps = payload
        .steps
        .ok_or_else(|| missing_field_error(FieldName::new("steps")))?;
    NewRecipe::try_new(name, ingredients, steps, payload.tag.unwrap_or_default())
        .map_err(recipe_validation_error)
}

fn parse_update_request(payload: UpdateRecipeRequest) -> Result<RecipePatch, Error> {
    let UpdateRecipeRequest {
        id: _,
        name,
        ingredients,
        steps,
        tag,
    } = payload;
    RecipePatch::try_new(name, ingredients, steps, tag).map_err(recipe_validation_error)
}

/// List every recipe in collection order.
#[utoipa::path(
    get,
    path = "/api/recipes",
    responses(
        (status = 200, description = "All recipes", body = [RecipeSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "listRecipes"
)]
#[get("/recipes")]
pub async fn list_recipes(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Recipe>>> {
    Ok(web::Json(state.recipes_query.list_recipes().await?))
}

/// Find recipes whose name contains the fragment, ignoring case and spacing.
#[utoipa::path(
    get,
    path = "/api/recipes/name/{fragment}",
    params(("fragment" = String, Path, description = "Name fragment; whitespace is ignored")),
    responses(
        (status = 200, description = "Matching recipes", body = [RecipeSchema]),
        (status = 400, description = "Blank fragment", body = ErrorSchema),
        (status = 404, description = "No matches", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "searchRecipesByName"
)]
#[get("/recipes/name/{fragment}")]
pub async fn search_recipes_by_name(
    state: web::Data<HttpState>,
    fragment: web::Path<String>,
) -> ApiResult<web::Json<Vec<Recipe>>> {
    let recipes = state
        .recipes_query
        .search_by_name(&fragment.into_inner())
        .await?;
    Ok(web::Json(recipes))
}

/// Find recipes carrying a tag label equal to the fragment, ignoring case
/// and spacing.
#[utoipa::path(
    get,
    path = "/api/recipes/tag/{fragment}",
    params(("fragment" = String, Path, description = "Tag label; whitespace is ignored")),
    responses(
        (status = 200, description = "Matching recipes", body = [RecipeSchema]),
        (status = 400, description = "Blank fragment", body = ErrorSchema),
        (status = 404, description = "No matches", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "searchRecipesByTag"
)]
#[get("/recipes/tag/{fragment}")]
pub async fn search_recipes_by_tag(
    state: web::Data<HttpState>,
    fragment: web::Path<String>,
) -> ApiResult<web::Json<Vec<Recipe>>> {
    let recipes = state
        .recipes_query
        .search_by_tag(&fragment.into_inner())
        .await?;
    Ok(web::Json(recipes))
}

/// Fetch one recipe.
#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    params(("id" = u64, Path, description = "Recipe identifier")),
    responses(
        (status = 200, description = "The recipe", body = RecipeSchema),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Recipe not found", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "getRecipe"
)]
#[get("/recipes/{id}")]
pub async fn get_recipe(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<Recipe>> {
    let id = parse_record_id(&id, ID)?;
    Ok(web::Json(state.recipes_query.get_recipe(id).await?))
}

/// Create a recipe.
#[utoipa::path(
    post,
    path = "/api/recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Created recipe", body = RecipeSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "createRecipe"
)]
#[post("/recipes")]
pub async fn create_recipe(
    state: web::Data<HttpState>,
    payload: web::Json<CreateRecipeRequest>,
) -> ApiResult<HttpResponse> {
    let draft = parse_create_request(payload.into_inner())?;
    let created = state.recipes.create_recipe(draft).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Overwrite the supplied fields of a recipe.
///
/// An unknown identifier is reported before any problem with the body.
#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    params(("id" = u64, Path, description = "Recipe identifier")),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Updated recipe and change log", body = RecipeUpdatedResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Recipe not found", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "updateRecipe"
)]
#[put("/recipes/{id}")]
pub async fn update_recipe(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    payload: Result<web::Json<UpdateRecipeRequest>, actix_web::Error>,
) -> ApiResult<web::Json<RecipeUpdatedResponse>> {
    let id = parse_record_id(&id, ID)?;
    state.recipes_query.get_recipe(id).await?;
    let patch = parse_update_request(payload?.into_inner())?;
    let update = state.recipes.update_recipe(id, patch).await?;
    Ok(web::Json(RecipeUpdatedResponse {
        message: RECIPE_UPDATED.to_owned(),
        recipe: update.recipe,
        changes: update.changes,
    }))
}

/// Delete a recipe. Remaining identifiers are not renumbered.
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    params(("id" = u64, Path, description = "Recipe identifier")),
    responses(
        (status = 200, description = "Deleted recipe", body = RecipeDeletedResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Recipe not found", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "deleteRecipe"
)]
#[delete("/recipes/{id}")]
pub async fn delete_recipe(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<RecipeDeletedResponse>> {
    let id = parse_record_id(&id, ID)?;
    let deleted = state.recipes.delete_recipe(id).await?;
    Ok(web::Json(RecipeDeletedResponse {
        message: deleted_message(id),
        deleted_recipe: deleted,
    }))
}

/// Register every recipe route, search routes first.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_recipes)
        .service(create_recipe)
        .service(search_recipes_by_name)
        .service(search_recipes_by_tag)
        .service(get_recipe)
        .service(update_recipe)
        .service(delete_recipe);
}

#[cfg(test)]
#[path = "recipes_tests.rs"]
mod tests;
