use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::modules::recipe::domain::{entities::Recipe, repositories::RecipeChanges};
use crate::server::AppState;
use crate::shared::errors::AppError;

/// One inbound `{name}` ingredient object. A missing name deserializes to
/// `None` and is skipped by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientPayload {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecipeRequest {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<IngredientPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRecipeRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// `Some` (even empty) triggers the replace-all path; absent leaves the
    /// ingredient set untouched.
    #[serde(default)]
    pub ingredients: Option<Vec<IngredientPayload>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListRecipesQuery {
    pub name: Option<String>,
    /// Comma-separated ingredient ids.
    pub ingredients: Option<String>,
}

fn payload_names(payloads: Vec<IngredientPayload>) -> Vec<Option<String>> {
    payloads.into_iter().map(|p| p.name).collect()
}

/// GET /api/recipes
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(query): Query<ListRecipesQuery>,
) -> Result<Json<Vec<Recipe>>, AppError> {
    let recipes = state
        .recipe_service
        .list_recipes(query.name, query.ingredients)
        .await?;
    Ok(Json(recipes))
}

/// GET /api/recipes/:id
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Recipe>, AppError> {
    let recipe = state.recipe_service.get_recipe(id).await?;
    Ok(Json(recipe))
}

/// POST /api/recipes
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(request): Json<CreateRecipeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let recipe = state
        .recipe_service
        .create_recipe(
            request.name,
            request.description,
            payload_names(request.ingredients),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// PATCH /api/recipes/:id
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateRecipeRequest>,
) -> Result<Json<Recipe>, AppError> {
    let changes = RecipeChanges {
        name: request.name,
        description: request.description,
    };
    let ingredient_names = request.ingredients.map(payload_names);

    let recipe = state
        .recipe_service
        .update_recipe(id, changes, ingredient_names)
        .await?;
    Ok(Json(recipe))
}

/// DELETE /api/recipes/:id
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.recipe_service.delete_recipe(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
