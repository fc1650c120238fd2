//! Driving port for read-only recipe use-cases.
//!
//! HTTP handlers depend on this trait rather than on storage, so tests can
//! swap in any implementation.

use async_trait::async_trait;

use crate::domain::{Error, Recipe, RecordId};

/// Read-side recipe use-cases.
#[async_trait]
pub trait RecipesQuery: Send + Sync {
    /// Every recipe in collection order.
    async fn list_recipes(&self) -> Result<Vec<Recipe>, Error>;

    /// One recipe by identifier, or a not-found error.
    async fn get_recipe(&self, id: RecordId) -> Result<Recipe, Error>;

    /// Recipes whose name matches `fragment` anywhere, ignoring case and
    /// whitespace. Not-found when nothing matches.
    async fn search_by_name(&self, fragment: &str) -> Result<Vec<Recipe>, Error>;

    /// Recipes with at least one tag label wholly matching `fragment`,
    /// ignoring case and whitespace. Not-found when nothing matches.
    async fn search_by_tag(&self, fragment: &str) -> Result<Vec<Recipe>, Error>;
}
