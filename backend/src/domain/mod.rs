//! Domain primitives, aggregates and services.
//!
//! Purpose: define the recipe and user records served by the API, the
//! fuzzy search rules, and the services that implement the driving ports on
//! top of the storage ports. Nothing here knows about HTTP.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Recipe / User: stored records with their creation and patch inputs.
//! - RecipeService / UserService: port implementations.

pub mod change_log;
pub mod error;
pub mod fuzzy_match;
pub mod ports;
pub mod recipe;
pub mod recipe_service;
pub mod record_id;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::change_log::{ChangeLog, FieldChange};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::fuzzy_match::{FragmentError, InterleavedPattern, MatchScope};
pub use self::recipe::{NewRecipe, Recipe, RecipePatch, RecipeUpdate, RecipeValidationError};
pub use self::recipe_service::{
    NO_RECIPES_WITH_NAME, NO_RECIPES_WITH_TAG, RECIPE_NOT_FOUND, RecipeService,
};
pub use self::record_id::RecordId;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{EmailAddress, NewUser, User, UserPatch, UserUpdate, UserValidationError};
pub use self::user_service::{USER_NOT_FOUND, UserService};
