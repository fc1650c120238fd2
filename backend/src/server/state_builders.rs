//! Builders wiring seeded in-memory repositories into HTTP state.

use std::sync::Arc;

use actix_web::web;

use recipe_api::domain::{RecipeService, UserService};
use recipe_api::inbound::http::state::HttpState;
use recipe_api::outbound::memory::{
    InMemoryRecipeRepository, InMemoryUserRepository, SeedError, load_recipes, load_users,
};

use super::ServerSettings;

/// Load seed records and build the handler state around them.
///
/// # Errors
/// Returns [`SeedError`] when a configured seed file is unreadable or invalid.
pub fn build_http_state(settings: &ServerSettings) -> Result<web::Data<HttpState>, SeedError> {
    let recipes = load_recipes(settings.recipe_seed_path())?;
    let users = load_users(settings.user_seed_path())?;

    let recipe_service = RecipeService::new(Arc::new(InMemoryRecipeRepository::new(recipes)));
    let user_service = UserService::new(Arc::new(InMemoryUserRepository::new(users)));
    Ok(web::Data::new(HttpState::from_services(
        Arc::new(recipe_service),
        Arc::new(user_service),
    )))
}
