pub mod config;
pub mod routes;

use std::sync::Arc;

use crate::modules::ingredient::application::IngredientService;
use crate::modules::recipe::application::RecipeService;

/// Shared handler state: the services behind the HTTP boundary.
#[derive(Clone)]
pub struct AppState {
    pub ingredient_service: Arc<IngredientService>,
    pub recipe_service: Arc<RecipeService>,
}

impl AppState {
    pub fn new(
        ingredient_service: Arc<IngredientService>,
        recipe_service: Arc<RecipeService>,
    ) -> Self {
        Self {
            ingredient_service,
            recipe_service,
        }
    }
}
