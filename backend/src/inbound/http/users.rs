//! User HTTP handlers.
//!
//! ```text
//! GET    /api/users
//! POST   /api/users {"name":"Maria Clara","email":"maria@example.com","password":"..."}
//! PUT    /api/users/{id} {"name":"..."}
//! DELETE /api/users/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ChangeLog, Error, NewUser, RecordId, User, UserPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, missing_field_error, parse_record_id, user_validation_error,
};

const ID: FieldName = FieldName::new("id");

/// Confirmation message for an update.
pub const USER_UPDATED: &str = "User has been updated.";

/// Request payload for creating a user.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request payload for a partial user update.
///
/// Email and identifier are immutable, so sending either is rejected as an
/// unknown field.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Response payload for a successful update.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserUpdatedResponse {
    #[schema(example = "User has been updated.")]
    pub message: String,
    #[schema(value_type = UserSchema)]
    pub user: User,
    /// Map from changed field name to `{old, new}`.
    #[schema(value_type = Object)]
    pub changes: ChangeLog,
}

/// Response payload for a successful delete.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDeletedResponse {
    #[schema(example = "User with ID 2 has been deleted.")]
    pub message: String,
    #[schema(value_type = UserSchema)]
    pub deleted_user: User,
}

fn deleted_message(id: RecordId) -> String {
    format!("User with ID {id} has been deleted.")
}

fn parse_create_request(payload: CreateUserRequest) -> Result<NewUser, Error> {
    let name = payload
        .name
        .ok_or_else(|| missing_field_error(FieldName::new("name")))?;
    let email = payload
        .email
        .ok_or_else(|| missing_field_error(FieldName::new("email")))?;
    let password = payload
        .password
        .ok_or_else(|| missing_field_error(FieldName::new("password")))?;
    NewUser::try_new(name, email, password).map_err(user_validation_error)
}

/// List every user in collection order.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = [UserSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    Ok(web::Json(state.users_query.list_users().await?))
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Created user", body = UserSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let new_user = parse_create_request(payload.into_inner())?;
    let created = state.users.create_user(new_user).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Overwrite the supplied name and/or password of a user.
///
/// An unknown identifier is reported before any problem with the body.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user and change log", body = UserUpdatedResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    payload: Result<web::Json<UpdateUserRequest>, actix_web::Error>,
) -> ApiResult<web::Json<UserUpdatedResponse>> {
    let id = parse_record_id(&id, ID)?;
    state.users_query.get_user(id).await?;
    let UpdateUserRequest { name, password } = payload?.into_inner();
    let patch = UserPatch::try_new(name, password).map_err(user_validation_error)?;
    let update = state.users.update_user(id, patch).await?;
    Ok(web::Json(UserUpdatedResponse {
        message: USER_UPDATED.to_owned(),
        user: update.user,
        changes: update.changes,
    }))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Deleted user", body = UserDeletedResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<UserDeletedResponse>> {
    let id = parse_record_id(&id, ID)?;
    let deleted = state.users.delete_user(id).await?;
    Ok(web::Json(UserDeletedResponse {
        message: deleted_message(id),
        deleted_user: deleted,
    }))
}

/// Register every user route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_users)
        .service(create_user)
        .service(update_user)
        .service(delete_user);
}
