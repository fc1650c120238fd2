//! Driven port for recipe storage.

use async_trait::async_trait;

use crate::domain::{NewRecipe, Recipe, RecipePatch, RecipeUpdate, RecordId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by recipe repository adapters.
    pub enum RecipeRepositoryError {
        /// The backing store could not serve the request.
        Unavailable { message: String } => "recipe store unavailable: {message}",
    }
}

/// Storage contract for recipes.
///
/// Implementations keep insertion order and allocate identifiers that are
/// never reused, even after deletions. Each mutating call is atomic.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Every stored recipe in insertion order.
    async fn list(&self) -> Result<Vec<Recipe>, RecipeRepositoryError>;

    /// The recipe with `id`, if stored.
    async fn find_by_id(&self, id: RecordId) -> Result<Option<Recipe>, RecipeRepositoryError>;

    /// Store a recipe under a freshly allocated identifier.
    async fn insert(&self, recipe: NewRecipe) -> Result<Recipe, RecipeRepositoryError>;

    /// Apply `patch` to the recipe with `id`. `None` when no such recipe.
    async fn update(
        &self,
        id: RecordId,
        patch: RecipePatch,
    ) -> Result<Option<RecipeUpdate>, RecipeRepositoryError>;

    /// Remove and return the recipe with `id`. `None` when no such recipe.
    async fn remove(&self, id: RecordId) -> Result<Option<Recipe>, RecipeRepositoryError>;
}
