//! Readiness and liveness probes.
//!
//! The process moves through three phases: `Starting` until the listener is
//! bound, `Serving` while it accepts traffic and `Draining` once shutdown has
//! begun. Readiness also asks both stores for their records, so a probe only
//! passes when the seeded collections answer.

use std::sync::atomic::{AtomicU8, Ordering};

use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{HttpResponse, HttpResponseBuilder, get, web};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::inbound::http::state::HttpState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum Phase {
    Starting = 0,
    Serving = 1,
    Draining = 2,
}

impl Phase {
    const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Starting,
            1 => Self::Serving,
            _ => Self::Draining,
        }
    }
}

/// Lifecycle phase shared between the server bootstrap and the probes.
#[derive(Debug)]
pub struct HealthState {
    phase: AtomicU8,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            phase: AtomicU8::new(Phase::Starting as u8),
        }
    }
}

impl HealthState {
    /// Start in the `Starting` phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// The listener is bound and the stores are seeded.
    pub fn mark_serving(&self) {
        self.phase.store(Phase::Serving as u8, Ordering::Release);
    }

    /// Shutdown has begun. Liveness fails from here on.
    pub fn mark_draining(&self) {
        self.phase.store(Phase::Draining as u8, Ordering::Release);
    }

    fn phase(&self) -> Phase {
        Phase::from_u8(self.phase.load(Ordering::Acquire))
    }

    /// Whether the server accepts traffic.
    pub fn is_serving(&self) -> bool {
        self.phase() == Phase::Serving
    }

    /// Whether the process has not started draining.
    pub fn is_alive(&self) -> bool {
        self.phase() != Phase::Draining
    }
}

/// Record counts reported by a passing readiness probe.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadinessReport {
    /// Recipes currently stored.
    #[schema(example = 5)]
    pub recipes: usize,
    /// Users currently stored.
    #[schema(example = 2)]
    pub users: usize,
}

fn uncached(mut builder: HttpResponseBuilder) -> HttpResponseBuilder {
    builder.insert_header(CacheControl(vec![CacheDirective::NoStore]));
    builder
}

/// Readiness probe.
///
/// 200 with store counts while serving; 503 while starting, while draining,
/// or when a store cannot be read.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Serving with seeded stores", body = ReadinessReport),
        (status = 503, description = "Not serving or a store is unavailable")
    )
)]
#[get("/health/ready")]
pub async fn ready(health: web::Data<HealthState>, state: web::Data<HttpState>) -> HttpResponse {
    if !health.is_serving() {
        return uncached(HttpResponse::ServiceUnavailable()).finish();
    }
    let counts = tokio::try_join!(
        state.recipes_query.list_recipes(),
        state.users_query.list_users()
    );
    match counts {
        Ok((recipes, users)) => uncached(HttpResponse::Ok()).json(ReadinessReport {
            recipes: recipes.len(),
            users: users.len(),
        }),
        Err(err) => {
            warn!(error = %err, "readiness store check failed");
            uncached(HttpResponse::ServiceUnavailable()).finish()
        }
    }
}

/// Liveness probe. 200 until shutdown begins.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Process is alive"),
        (status = 503, description = "Process is draining")
    )
)]
#[get("/health/live")]
pub async fn live(health: web::Data<HealthState>) -> HttpResponse {
    let builder = if health.is_alive() {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    uncached(builder).finish()
}
