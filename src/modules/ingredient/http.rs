use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::modules::ingredient::domain::entities::Ingredient;
use crate::server::AppState;
use crate::shared::errors::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateIngredientRequest {
    pub name: String,
}

/// GET /api/ingredients
pub async fn list_ingredients(
    State(state): State<AppState>,
) -> Result<Json<Vec<Ingredient>>, AppError> {
    let ingredients = state.ingredient_service.list_ingredients().await?;
    Ok(Json(ingredients))
}

/// POST /api/ingredients
pub async fn create_ingredient(
    State(state): State<AppState>,
    Json(request): Json<CreateIngredientRequest>,
) -> Result<impl IntoResponse, AppError> {
    let ingredient = state
        .ingredient_service
        .create_ingredient(request.name)
        .await?;

    Ok((StatusCode::CREATED, Json(ingredient)))
}
