//! Server harness and shared world for HTTP behaviour tests.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. The `WorldFixture` ensures the server
//! is stopped even if a test panics.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::http::Method;
use actix_web::{App, HttpServer, web};
use awc::Client;
use recipe_api::Trace;
use recipe_api::domain::{RecipeService, TRACE_ID_HEADER, UserService};
use recipe_api::inbound::http::root::{route_not_found, welcome};
use recipe_api::inbound::http::state::HttpState;
use recipe_api::inbound::http::{json_config, recipes, users};
use recipe_api::outbound::memory::{
    InMemoryRecipeRepository, InMemoryUserRepository, seed_recipes, seed_users,
};
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

pub(crate) struct AdapterWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) base_url: String,
    pub(crate) server: ServerHandle,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_body: Option<Value>,
    pub(crate) last_text: Option<String>,
    pub(crate) last_trace_id: Option<String>,
}

pub(crate) type SharedWorld = Rc<RefCell<AdapterWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        shutdown(self.world.clone());
    }
}

pub(crate) fn shutdown(world: SharedWorld) {
    // `LocalSet` must be driven on the thread that owns it, so we hold the
    // world borrow while calling `block_on`. The future must not borrow it.
    let ctx = world.borrow();
    let server = ctx.server.clone();
    ctx.local.block_on(&ctx.runtime, async move {
        server.stop(true).await;
    });
}

pub(crate) fn with_world_async<R, F>(world: &SharedWorld, operation: impl FnOnce(String) -> F) -> R
where
    F: std::future::Future<Output = R>,
{
    let ctx = world.borrow();
    let base_url = ctx.base_url.clone();
    ctx.local.block_on(&ctx.runtime, operation(base_url))
}

fn seeded_state() -> HttpState {
    let recipes = InMemoryRecipeRepository::new(seed_recipes().expect("bundled recipes"));
    let users = InMemoryUserRepository::new(seed_users().expect("bundled users"));
    HttpState::from_services(
        Arc::new(RecipeService::new(Arc::new(recipes))),
        Arc::new(UserService::new(Arc::new(users))),
    )
}

async fn spawn_server(http_state: HttpState) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;
    let http_data = web::Data::new(http_state);

    let server = HttpServer::new(move || {
        let api = web::scope("/api")
            .configure(recipes::configure)
            .configure(users::configure);

        App::new()
            .app_data(http_data.clone())
            .app_data(json_config())
            .wrap(Trace)
            .service(welcome)
            .service(api)
            .default_service(web::to(route_not_found))
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

fn create_runtime_and_local() -> (Runtime, LocalSet) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();

    (runtime, local)
}

pub(crate) fn world() -> WorldFixture {
    let (runtime, local) = create_runtime_and_local();
    let (base_url, server) = local
        .block_on(&runtime, spawn_server(seeded_state()))
        .expect("spawn server");

    WorldFixture {
        world: Rc::new(RefCell::new(AdapterWorld {
            runtime,
            local,
            base_url,
            server,
            last_status: None,
            last_body: None,
            last_text: None,
            last_trace_id: None,
        })),
    }
}

/// Send a request and record status, trace id and body on the world.
///
/// JSON bodies land in `last_body`; anything else lands in `last_text`.
pub(crate) fn perform_request(
    world: &SharedWorld,
    method: Method,
    path: &str,
    payload: Option<Value>,
) {
    let (status, trace_id, bytes) = with_world_async(world, |base_url| async move {
        let request = Client::default().request(method, format!("{base_url}{path}"));
        let mut response = match payload {
            Some(payload) => request.send_json(&payload).await.expect("request"),
            None => request.send().await.expect("request"),
        };
        let status = response.status().as_u16();
        let trace_id = response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_owned());
        let bytes = response.body().await.expect("response body");
        (status, trace_id, bytes)
    });

    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(status);
    ctx.last_trace_id = trace_id;
    ctx.last_body = serde_json::from_slice(&bytes).ok();
    ctx.last_text = String::from_utf8(bytes.to_vec()).ok();
}

/// Status and JSON body of the last response.
pub(crate) fn last_response(world: &SharedWorld) -> (u16, Value) {
    let ctx = world.borrow();
    (
        ctx.last_status.expect("response status"),
        ctx.last_body.clone().expect("JSON body"),
    )
}
