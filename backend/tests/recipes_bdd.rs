//! Behaviour tests for the recipe routes against a live server.
//!
//! Each scenario gets a fresh server seeded with the bundled catalogue, so
//! identifiers start at 1..=5 and the next created recipe is 6.
#![allow(non_snake_case)]

#[allow(dead_code)]
#[path = "support/harness.rs"]
mod harness;

use actix_web::http::Method;
use harness::{SharedWorld, WorldFixture, last_response, perform_request};
use recipe_api::inbound::http::root::WELCOME_MESSAGE;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};

#[fixture]
fn world() -> WorldFixture {
    harness::world()
}

fn names(body: &Value) -> Vec<&str> {
    body.as_array()
        .expect("array body")
        .iter()
        .filter_map(|recipe| recipe["name"].as_str())
        .collect()
}

fn create_pancit(world: &SharedWorld) {
    perform_request(
        world,
        Method::POST,
        "/api/recipes",
        Some(json!({
            "name": "Pancit",
            "ingredients": ["Noodles", "Soy sauce"],
            "steps": ["1. Stir-fry."]
        })),
    );
}

fn assert_created_id(world: &SharedWorld, id: u64) {
    let (status, body) = last_response(world);
    assert_eq!(status, 201);
    assert_eq!(body["id"], id);
}

#[given("a running recipe server")]
fn a_running_recipe_server(world: &WorldFixture) {
    let _ = world.world();
}

#[when("the client requests the root path")]
fn the_client_requests_the_root_path(world: &WorldFixture) {
    perform_request(&world.world(), Method::GET, "/", None);
}

#[when("the client lists all recipes")]
fn the_client_lists_all_recipes(world: &WorldFixture) {
    perform_request(&world.world(), Method::GET, "/api/recipes", None);
}

#[when("the client searches recipe names for lechonkawali")]
fn the_client_searches_recipe_names_for_lechonkawali(world: &WorldFixture) {
    perform_request(
        &world.world(),
        Method::GET,
        "/api/recipes/name/lechonkawali",
        None,
    );
}

#[when("the client searches recipe tags for breakfast")]
fn the_client_searches_recipe_tags_for_breakfast(world: &WorldFixture) {
    perform_request(
        &world.world(),
        Method::GET,
        "/api/recipes/tag/breakfast",
        None,
    );
}

#[when("the client creates a recipe without a name")]
fn the_client_creates_a_recipe_without_a_name(world: &WorldFixture) {
    perform_request(
        &world.world(),
        Method::POST,
        "/api/recipes",
        Some(json!({"ingredients": ["Rice"], "steps": ["1. Boil."]})),
    );
}

#[when("the client renames recipe 2 to Pork Adobo")]
fn the_client_renames_recipe_2_to_pork_adobo(world: &WorldFixture) {
    perform_request(
        &world.world(),
        Method::PUT,
        "/api/recipes/2",
        Some(json!({"name": "Pork Adobo"})),
    );
}

#[when("the client creates a recipe")]
fn the_client_creates_a_recipe(world: &WorldFixture) {
    create_pancit(&world.world());
}

#[when("the client deletes recipe 3")]
fn the_client_deletes_recipe_3(world: &WorldFixture) {
    perform_request(&world.world(), Method::DELETE, "/api/recipes/3", None);
}

#[when("the client fetches recipe 3")]
fn the_client_fetches_recipe_3(world: &WorldFixture) {
    perform_request(&world.world(), Method::GET, "/api/recipes/3", None);
}

#[when("the client updates recipe 99 with an unknown field")]
fn the_client_updates_recipe_99_with_an_unknown_field(world: &WorldFixture) {
    perform_request(
        &world.world(),
        Method::PUT,
        "/api/recipes/99",
        Some(json!({"servings": 4})),
    );
}

#[when("the client requests an unknown path")]
fn the_client_requests_an_unknown_path(world: &WorldFixture) {
    perform_request(&world.world(), Method::GET, "/api/ingredients", None);
}

#[then("the response is the welcome message")]
fn the_response_is_the_welcome_message(world: &WorldFixture) {
    let shared = world.world();
    let ctx = shared.borrow();
    assert_eq!(ctx.last_status, Some(200));
    assert_eq!(ctx.last_text.as_deref(), Some(WELCOME_MESSAGE));
}

#[then("the response lists the five seeded recipes in order")]
fn the_response_lists_the_five_seeded_recipes_in_order(world: &WorldFixture) {
    let (status, body) = last_response(&world.world());
    assert_eq!(status, 200);
    assert_eq!(
        names(&body),
        vec!["Sinigang", "Adobo", "Burger", "Kare-Kare", "Lechon Kawali"]
    );
}

#[then("the response lists only Lechon Kawali")]
fn the_response_lists_only_lechon_kawali(world: &WorldFixture) {
    let (status, body) = last_response(&world.world());
    assert_eq!(status, 200);
    assert_eq!(names(&body), vec!["Lechon Kawali"]);
}

#[then("the response says no recipes carry the tag")]
fn the_response_says_no_recipes_carry_the_tag(world: &WorldFixture) {
    let (status, body) = last_response(&world.world());
    assert_eq!(status, 404);
    assert_eq!(body["message"], "No recipes found with the given tag.");
}

#[then("the response is a bad request naming the name field")]
fn the_response_is_a_bad_request_naming_the_name_field(world: &WorldFixture) {
    let (status, body) = last_response(&world.world());
    assert_eq!(status, 400);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], "name");
    assert_eq!(body["details"]["code"], "missing_field");
}

#[then("the response reports the name change")]
fn the_response_reports_the_name_change(world: &WorldFixture) {
    let (status, body) = last_response(&world.world());
    assert_eq!(status, 200);
    assert_eq!(body["recipe"]["id"], 2);
    assert_eq!(
        body["changes"],
        json!({"name": {"old": "Adobo", "new": "Pork Adobo"}})
    );
}

#[then("the created recipe has id 6")]
fn the_created_recipe_has_id_6(world: &WorldFixture) {
    assert_created_id(&world.world(), 6);
}

#[then("the created recipe has id 7")]
fn the_created_recipe_has_id_7(world: &WorldFixture) {
    assert_created_id(&world.world(), 7);
}

#[then("the response confirms recipe 3 was deleted")]
fn the_response_confirms_recipe_3_was_deleted(world: &WorldFixture) {
    let (status, body) = last_response(&world.world());
    assert_eq!(status, 200);
    assert_eq!(body["message"], "A recipe with ID 3 has been deleted.");
    assert_eq!(body["deletedRecipe"]["id"], 3);
}

#[then("the response is not found with a trace id")]
fn the_response_is_not_found_with_a_trace_id(world: &WorldFixture) {
    let shared = world.world();
    let (status, body) = last_response(&shared);
    assert_eq!(status, 404);
    assert_eq!(body["code"], "not_found");
    let header = shared.borrow().last_trace_id.clone().expect("trace-id header");
    assert_eq!(body["traceId"], Value::from(header));
}

#[scenario(path = "tests/features/recipes.feature", name = "Welcome message at the root path")]
fn welcome_message_at_the_root_path(world: WorldFixture) {
    drop(world);
}

#[scenario(path = "tests/features/recipes.feature", name = "Listing returns the seeded recipes in order")]
fn listing_returns_the_seeded_recipes_in_order(world: WorldFixture) {
    drop(world);
}

#[scenario(path = "tests/features/recipes.feature", name = "Name search ignores case and spacing")]
fn name_search_ignores_case_and_spacing(world: WorldFixture) {
    drop(world);
}

#[scenario(path = "tests/features/recipes.feature", name = "Tag search without matches is not found")]
fn tag_search_without_matches_is_not_found(world: WorldFixture) {
    drop(world);
}

#[scenario(path = "tests/features/recipes.feature", name = "Creating a recipe without a name is rejected")]
fn creating_a_recipe_without_a_name_is_rejected(world: WorldFixture) {
    drop(world);
}

#[scenario(path = "tests/features/recipes.feature", name = "Updating a recipe reports the changed fields")]
fn updating_a_recipe_reports_the_changed_fields(world: WorldFixture) {
    drop(world);
}

#[scenario(path = "tests/features/recipes.feature", name = "Deleted identifiers are never reused")]
fn deleted_identifiers_are_never_reused(world: WorldFixture) {
    drop(world);
}

#[scenario(path = "tests/features/recipes.feature", name = "Unknown routes are not found")]
fn unknown_routes_are_not_found(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/recipes.feature",
    name = "Updating a missing recipe is not found before the body is checked"
)]
fn updating_a_missing_recipe_is_not_found_before_the_body_is_checked(world: WorldFixture) {
    drop(world);
}
