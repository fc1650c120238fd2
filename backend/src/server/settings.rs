//! Server settings loaded via OrthoConfig.

use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Settings controlling the listener and seed data.
///
/// Values come from CLI flags, `RECIPES_*` environment variables and an
/// optional configuration file, in that order of precedence.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RECIPES")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// JSON file replacing the bundled recipe seed.
    pub recipe_seed_path: Option<PathBuf>,
    /// JSON file replacing the bundled user seed.
    pub user_seed_path: Option<PathBuf>,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Return the recipe seed override, if any.
    pub fn recipe_seed_path(&self) -> Option<&Path> {
        self.recipe_seed_path.as_deref()
    }

    /// Return the user seed override, if any.
    pub fn user_seed_path(&self) -> Option<&Path> {
        self.user_seed_path.as_deref()
    }
}
