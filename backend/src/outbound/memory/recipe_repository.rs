//! In-memory adapter for [`RecipeRepository`].

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{RecipeRepository, RecipeRepositoryError};
use crate::domain::{NewRecipe, Recipe, RecipePatch, RecipeUpdate, RecordId};

use super::collection::RecordCollection;

/// Recipe store held in process memory.
///
/// # Examples
/// ```
/// use recipe_api::outbound::memory::{InMemoryRecipeRepository, seed_recipes};
///
/// let repository = InMemoryRecipeRepository::new(seed_recipes().expect("bundled seed"));
/// # let _ = repository;
/// ```
#[derive(Debug)]
pub struct InMemoryRecipeRepository {
    collection: RwLock<RecordCollection<Recipe>>,
}

impl InMemoryRecipeRepository {
    /// Create a repository holding `recipes` in their given order.
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            collection: RwLock::new(RecordCollection::new(recipes)),
        }
    }
}

impl Default for InMemoryRecipeRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn list(&self) -> Result<Vec<Recipe>, RecipeRepositoryError> {
        Ok(self.collection.read().await.records().to_vec())
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<Recipe>, RecipeRepositoryError> {
        Ok(self.collection.read().await.get(id).cloned())
    }

    async fn insert(&self, recipe: NewRecipe) -> Result<Recipe, RecipeRepositoryError> {
        let mut collection = self.collection.write().await;
        Ok(collection.push_with(|id| recipe.with_id(id)))
    }

    async fn update(
        &self,
        id: RecordId,
        patch: RecipePatch,
    ) -> Result<Option<RecipeUpdate>, RecipeRepositoryError> {
        let mut collection = self.collection.write().await;
        Ok(collection.get_mut(id).map(|recipe| {
            let changes = recipe.apply(patch);
            RecipeUpdate {
                recipe: recipe.clone(),
                changes,
            }
        }))
    }

    async fn remove(&self, id: RecordId) -> Result<Option<Recipe>, RecipeRepositoryError> {
        Ok(self.collection.write().await.remove(id))
    }
}
