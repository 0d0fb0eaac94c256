#![allow(dead_code)]

pub mod memory;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use cookbook::modules::ingredient::application::IngredientService;
use cookbook::modules::recipe::application::RecipeService;
use cookbook::server::{routes::create_router, AppState};

use self::memory::{MemoryIngredientRepository, MemoryRecipeRepository, MemoryStore};

/// Services wired onto a fresh in-memory store.
pub fn build_services() -> (Arc<IngredientService>, Arc<RecipeService>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let ingredient_service = Arc::new(IngredientService::new(Arc::new(
        MemoryIngredientRepository::new(Arc::clone(&store)),
    )));
    let recipe_service = Arc::new(RecipeService::new(Arc::new(MemoryRecipeRepository::new(
        Arc::clone(&store),
    ))));
    (ingredient_service, recipe_service, store)
}

/// The full router wired onto a fresh in-memory store.
pub fn build_test_app() -> (Router, Arc<MemoryStore>) {
    let (ingredient_service, recipe_service, store) = build_services();
    let app = create_router(AppState::new(ingredient_service, recipe_service));
    (app, store)
}

/// Drive one request through the router and collect the response.
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

pub async fn request_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = request(app, method, uri, body).await;
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
