//! Axum router configuration for the recipe API.

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::modules::{ingredient, recipe};
use crate::server::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for now
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Ingredient collection
        .route(
            "/api/ingredients",
            get(ingredient::http::list_ingredients).post(ingredient::http::create_ingredient),
        )
        // Recipe collection + aggregate operations
        .route(
            "/api/recipes",
            get(recipe::http::list_recipes).post(recipe::http::create_recipe),
        )
        .route(
            "/api/recipes/:id",
            get(recipe::http::get_recipe)
                .patch(recipe::http::update_recipe)
                .delete(recipe::http::delete_recipe),
        )
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
