//! In-memory storage adapters.
//!
//! Each repository owns an ordered collection behind a Tokio `RwLock`.
//! Mutations take the write lock once, so id allocation, lookup and the
//! change itself are atomic to callers. Nothing survives a restart.

mod collection;
mod recipe_repository;
mod seed;
mod user_repository;

pub use recipe_repository::InMemoryRecipeRepository;
pub use seed::{SeedError, load_recipes, load_users, seed_recipes, seed_users};
pub use user_repository::InMemoryUserRepository;
