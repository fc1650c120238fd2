//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{RecipesCommand, RecipesQuery, UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub recipes: Arc<dyn RecipesCommand>,
    pub recipes_query: Arc<dyn RecipesQuery>,
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
}

impl HttpState {
    /// Build state from one service per aggregate, each serving both its
    /// command and query port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use recipe_api::domain::{RecipeService, UserService};
    /// use recipe_api::inbound::http::state::HttpState;
    /// use recipe_api::outbound::memory::{InMemoryRecipeRepository, InMemoryUserRepository};
    ///
    /// let state = HttpState::from_services(
    ///     Arc::new(RecipeService::new(Arc::new(InMemoryRecipeRepository::default()))),
    ///     Arc::new(UserService::new(Arc::new(InMemoryUserRepository::default()))),
    /// );
    /// let _recipes = state.recipes_query.clone();
    /// ```
    pub fn from_services<R, U>(recipes: Arc<R>, users: Arc<U>) -> Self
    where
        R: RecipesCommand + RecipesQuery + 'static,
        U: UsersCommand + UsersQuery + 'static,
    {
        Self {
            recipes: recipes.clone(),
            recipes_query: recipes,
            users: users.clone(),
            users_query: users,
        }
    }
}
