pub mod infrastructure;
pub mod modules;
mod schema;
pub mod server;
pub mod shared;

use std::sync::Arc;

use infrastructure::database::Database;
use modules::ingredient::{
    application::IngredientService, infrastructure::IngredientRepositoryImpl,
};
use modules::recipe::{application::RecipeService, infrastructure::RecipeRepositoryImpl};
use server::{config::ServerConfig, routes::create_router, AppState};
use shared::errors::{AppError, AppResult};
use shared::utils::logger;

/// Wire the services onto a database handle.
pub fn build_state(db: Arc<Database>) -> AppState {
    let ingredient_repo = Arc::new(IngredientRepositoryImpl::new(Arc::clone(&db)));
    let recipe_repo = Arc::new(RecipeRepositoryImpl::new(db));

    AppState::new(
        Arc::new(IngredientService::new(ingredient_repo)),
        Arc::new(RecipeService::new(recipe_repo)),
    )
}

pub async fn run() -> AppResult<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    logger::init_logger();

    let config = ServerConfig::from_env();

    let db = Arc::new(Database::new()?);
    db.run_migrations()?;

    let app = create_router(build_state(db));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| AppError::ConfigError(format!("Failed to bind {}: {}", config.bind_addr, e)))?;
    log_info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}
