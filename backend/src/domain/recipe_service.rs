//! Recipe domain service.
//!
//! Implements the recipe driving ports on top of a [`RecipeRepository`],
//! translating missing records into not-found errors and running the fuzzy
//! name and tag searches.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{RecipeRepository, RecipeRepositoryError, RecipesCommand, RecipesQuery};
use crate::domain::{
    Error, FragmentError, InterleavedPattern, MatchScope, NewRecipe, Recipe, RecipePatch,
    RecipeUpdate, RecordId,
};

/// Message returned when an identifier matches no recipe.
pub const RECIPE_NOT_FOUND: &str = "Recipe not found.";
/// Message returned when a name search matches nothing.
pub const NO_RECIPES_WITH_NAME: &str = "No recipes found with the given name.";
/// Message returned when a tag search matches nothing.
pub const NO_RECIPES_WITH_TAG: &str = "No recipes found with the given tag.";

/// Recipe service implementing [`RecipesQuery`] and [`RecipesCommand`].
#[derive(Clone)]
pub struct RecipeService<R> {
    repository: Arc<R>,
}

impl<R> RecipeService<R> {
    /// Create a service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> RecipeService<R>
where
    R: RecipeRepository,
{
    fn map_repository_error(error: RecipeRepositoryError) -> Error {
        match error {
            RecipeRepositoryError::Unavailable { message } => {
                Error::internal(format!("recipe repository unavailable: {message}"))
            }
        }
    }

    fn map_fragment_error(error: FragmentError) -> Error {
        let code = match error {
            FragmentError::Empty => "empty_fragment",
            FragmentError::TooComplex { .. } => "fragment_too_complex",
        };
        Error::invalid_request(error.to_string()).with_details(json!({
            "field": "fragment",
            "code": code,
        }))
    }

    fn recipe_not_found(id: RecordId) -> Error {
        Error::not_found(RECIPE_NOT_FOUND).with_details(json!({ "id": id }))
    }

    async fn search<F>(&self, fragment: &str, scope: MatchScope, keep: F) -> Result<Vec<Recipe>, Error>
    where
        F: Fn(&InterleavedPattern, &Recipe) -> bool,
    {
        let pattern = InterleavedPattern::new(fragment, scope).map_err(Self::map_fragment_error)?;
        let recipes = self
            .repository
            .list()
            .await
            .map_err(Self::map_repository_error)?;
        Ok(recipes
            .into_iter()
            .filter(|recipe| keep(&pattern, recipe))
            .collect())
    }
}

#[async_trait]
impl<R> RecipesQuery for RecipeService<R>
where
    R: RecipeRepository,
{
    async fn list_recipes(&self) -> Result<Vec<Recipe>, Error> {
        self.repository
            .list()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn get_recipe(&self, id: RecordId) -> Result<Recipe, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Self::recipe_not_found(id))
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Recipe>, Error> {
        let matches = self
            .search(fragment, MatchScope::Substring, |pattern, recipe| {
                pattern.is_match(recipe.name())
            })
            .await?;
        debug!(fragment, count = matches.len(), "recipe name search");
        if matches.is_empty() {
            return Err(Error::not_found(NO_RECIPES_WITH_NAME));
        }
        Ok(matches)
    }

    async fn search_by_tag(&self, fragment: &str) -> Result<Vec<Recipe>, Error> {
        let matches = self
            .search(fragment, MatchScope::Whole, |pattern, recipe| {
                pattern.matches_any(recipe.tags().iter().map(String::as_str))
            })
            .await?;
        debug!(fragment, count = matches.len(), "recipe tag search");
        if matches.is_empty() {
            return Err(Error::not_found(NO_RECIPES_WITH_TAG));
        }
        Ok(matches)
    }
}

#[async_trait]
impl<R> RecipesCommand for RecipeService<R>
where
    R: RecipeRepository,
{
    async fn create_recipe(&self, recipe: NewRecipe) -> Result<Recipe, Error> {
        let created = self
            .repository
            .insert(recipe)
            .await
            .map_err(Self::map_repository_error)?;
        info!(recipe_id = %created.id(), "recipe created");
        Ok(created)
    }

    async fn update_recipe(&self, id: RecordId, patch: RecipePatch) -> Result<RecipeUpdate, Error> {
        let update = self
            .repository
            .update(id, patch)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Self::recipe_not_found(id))?;
        info!(recipe_id = %id, changed = update.changes.len(), "recipe updated");
        Ok(update)
    }

    async fn delete_recipe(&self, id: RecordId) -> Result<Recipe, Error> {
        let removed = self
            .repository
            .remove(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Self::recipe_not_found(id))?;
        info!(recipe_id = %id, "recipe deleted");
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "recipe_service_tests.rs"]
mod tests;
