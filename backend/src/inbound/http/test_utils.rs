//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::{RecipeService, UserService};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{json_config, recipes, users};
use crate::outbound::memory::{
    InMemoryRecipeRepository, InMemoryUserRepository, seed_recipes, seed_users,
};

/// Handler state backed by fresh in-memory stores holding the bundled seed.
pub(crate) fn seeded_state() -> web::Data<HttpState> {
    let recipes = InMemoryRecipeRepository::new(seed_recipes().expect("bundled recipes"));
    let users = InMemoryUserRepository::new(seed_users().expect("bundled users"));
    web::Data::new(HttpState::from_services(
        Arc::new(RecipeService::new(Arc::new(recipes))),
        Arc::new(UserService::new(Arc::new(users))),
    ))
}

/// App with the `/api` routes, JSON error handling and trace middleware.
pub(crate) fn api_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .app_data(json_config())
        .wrap(Trace)
        .service(
            web::scope("/api")
                .configure(recipes::configure)
                .configure(users::configure),
        )
}
