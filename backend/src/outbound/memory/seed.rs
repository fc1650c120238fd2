//! Seed data for the in-memory repositories.
//!
//! Seeds are JSON arrays of stored records. The bundled fixtures are compiled
//! into the binary; a path supplied through settings replaces them.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::domain::{Recipe, RecordId, User};

use super::collection::Keyed;

const BUNDLED_RECIPES: &str = include_str!("../../../fixtures/seed/recipes.json");
const BUNDLED_USERS: &str = include_str!("../../../fixtures/seed/users.json");

/// Errors raised while loading seed records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file at '{path}': {message}")]
    Read {
        /// Path to the seed file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The seed JSON is malformed or a record fails validation.
    #[error("invalid {kind} seed: {message}")]
    Parse {
        /// Which collection the seed was for.
        kind: &'static str,
        /// Description of the parse error.
        message: String,
    },

    /// A seed identifier is zero or leaves no room for the next allocation.
    #[error("{kind} id {id} in seed is out of range")]
    IdOutOfRange {
        /// Which collection the seed was for.
        kind: &'static str,
        /// The rejected identifier.
        id: RecordId,
    },

    /// Two seed records share an identifier.
    #[error("duplicate {kind} id {id} in seed")]
    DuplicateId {
        /// Which collection the seed was for.
        kind: &'static str,
        /// The repeated identifier.
        id: RecordId,
    },
}

fn parse<T>(kind: &'static str, json: &str) -> Result<Vec<T>, SeedError>
where
    T: DeserializeOwned + Keyed,
{
    let records: Vec<T> = serde_json::from_str(json).map_err(|e| SeedError::Parse {
        kind,
        message: e.to_string(),
    })?;
    // Ids are positive and the counter saturates, so a seed at u64::MAX
    // would see its id allocated again.
    if let Some(id) = records
        .iter()
        .map(Keyed::key)
        .find(|id| id.get() == 0 || id.get() == u64::MAX)
    {
        return Err(SeedError::IdOutOfRange { kind, id });
    }
    let mut seen = HashSet::new();
    if let Some(id) = records.iter().map(Keyed::key).find(|id| !seen.insert(*id)) {
        return Err(SeedError::DuplicateId { kind, id });
    }
    Ok(records)
}

fn load<T>(kind: &'static str, bundled: &str, path: Option<&Path>) -> Result<Vec<T>, SeedError>
where
    T: DeserializeOwned + Keyed,
{
    let records = match path {
        Some(path) => {
            let contents = fs::read_to_string(path).map_err(|e| SeedError::Read {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            parse(kind, &contents)?
        }
        None => parse(kind, bundled)?,
    };
    info!(
        kind,
        count = records.len(),
        source = path.map_or("bundled".to_owned(), |p| p.display().to_string()),
        "seed loaded"
    );
    Ok(records)
}

/// The bundled recipe seed.
///
/// # Errors
/// Returns [`SeedError::Parse`] if the bundled fixture is invalid.
pub fn seed_recipes() -> Result<Vec<Recipe>, SeedError> {
    parse("recipe", BUNDLED_RECIPES)
}

/// The bundled user seed.
///
/// # Errors
/// Returns [`SeedError::Parse`] if the bundled fixture is invalid.
pub fn seed_users() -> Result<Vec<User>, SeedError> {
    parse("user", BUNDLED_USERS)
}

/// Recipes from `path`, or the bundled seed when `path` is `None`.
///
/// # Errors
/// Returns [`SeedError`] when the file cannot be read, is not a JSON array of
/// valid recipes, or repeats an identifier.
pub fn load_recipes(path: Option<&Path>) -> Result<Vec<Recipe>, SeedError> {
    load("recipe", BUNDLED_RECIPES, path)
}

/// Users from `path`, or the bundled seed when `path` is `None`.
///
/// # Errors
/// Returns [`SeedError`] when the file cannot be read, is not a JSON array of
/// valid users, or repeats an identifier.
pub fn load_users(path: Option<&Path>) -> Result<Vec<User>, SeedError> {
    load("user", BUNDLED_USERS, path)
}
