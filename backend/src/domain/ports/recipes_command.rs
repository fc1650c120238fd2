//! Driving port for recipe mutations.

use async_trait::async_trait;

use crate::domain::{Error, NewRecipe, Recipe, RecipePatch, RecipeUpdate, RecordId};

/// Write-side recipe use-cases.
#[async_trait]
pub trait RecipesCommand: Send + Sync {
    /// Store a new recipe and return it with its assigned identifier.
    async fn create_recipe(&self, recipe: NewRecipe) -> Result<Recipe, Error>;

    /// Overwrite the supplied fields of an existing recipe.
    async fn update_recipe(&self, id: RecordId, patch: RecipePatch) -> Result<RecipeUpdate, Error>;

    /// Remove a recipe and return it.
    async fn delete_recipe(&self, id: RecordId) -> Result<Recipe, Error>;
}
