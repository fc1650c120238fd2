//! Root greeting and fallback for unmatched routes.

use actix_web::{HttpRequest, HttpResponse, get};

use crate::domain::Error;

/// Plain-text greeting served at `/`.
pub const WELCOME_MESSAGE: &str = "Welcome to the root route of the API.";

/// Greet callers of the bare API root.
#[utoipa::path(
    get,
    path = "/",
    tags = ["root"],
    responses((status = 200, description = "Welcome text", body = String, content_type = "text/plain"))
)]
#[get("/")]
pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(WELCOME_MESSAGE)
}

/// Default service answering unmatched routes with a not-found envelope.
pub async fn route_not_found(req: HttpRequest) -> Result<HttpResponse, Error> {
    Err(Error::not_found(format!(
        "No route for {} {}.",
        req.method(),
        req.path()
    )))
}
