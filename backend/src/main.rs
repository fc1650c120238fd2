//! Recipe API entry-point: loads settings, seeds the stores and serves HTTP.

mod server;

use color_eyre::eyre::WrapErr;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use recipe_api::inbound::http::health::HealthState;
use server::{ServerSettings, build_http_state, create_server};

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();

    let settings = ServerSettings::load().wrap_err("failed to load server settings")?;
    let http_state = build_http_state(&settings).wrap_err("failed to load seed data")?;
    let health_state = actix_web::web::Data::new(HealthState::new());

    let server = create_server(health_state.clone(), http_state, &settings)
        .wrap_err_with(|| format!("failed to bind {}:{}", settings.host(), settings.port()))?;
    info!(host = settings.host(), port = settings.port(), "recipe api listening");

    server.await?;
    health_state.mark_draining();
    Ok(())
}
