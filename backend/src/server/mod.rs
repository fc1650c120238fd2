//! Server construction and middleware wiring.

mod settings;
mod state_builders;

pub use settings::ServerSettings;
pub use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use recipe_api::Trace;
#[cfg(debug_assertions)]
use recipe_api::doc::ApiDoc;
use recipe_api::inbound::http::health::{HealthState, live, ready};
use recipe_api::inbound::http::root::{route_not_found, welcome};
use recipe_api::inbound::http::state::HttpState;
use recipe_api::inbound::http::{json_config, recipes, users};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .configure(recipes::configure)
        .configure(users::configure);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Trace)
        .service(welcome)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::to(route_not_found))
}

/// Construct an Actix HTTP server bound to the configured address.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    settings: &ServerSettings,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind((settings.host(), settings.port()))?
        .run();

    health_state.mark_serving();
    Ok(server)
}
