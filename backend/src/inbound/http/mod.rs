//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod recipes;
pub mod root;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod users;
pub mod validation;

pub use error::{ApiResult, json_config};
