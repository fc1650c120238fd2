//! Domain ports defining the edges of the hexagon.
//!
//! Driving ports (`*Query`, `*Command`) are what inbound adapters call.
//! Driven ports (`*Repository`) are what the domain services call and what
//! outbound adapters implement. Repository errors are typed enums so
//! adapters map their failures into predictable variants.

mod macros;
mod recipe_repository;
mod recipes_command;
mod recipes_query;
mod user_repository;
mod users_command;
mod users_query;

pub(crate) use macros::define_port_error;

#[cfg(test)]
pub use recipe_repository::MockRecipeRepository;
pub use recipe_repository::{RecipeRepository, RecipeRepositoryError};
pub use recipes_command::RecipesCommand;
pub use recipes_query::RecipesQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
pub use users_command::UsersCommand;
pub use users_query::UsersQuery;
