use crate::log_debug;
use crate::modules::ingredient::domain::{entities::Ingredient, repositories::IngredientRepository};
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;
use std::sync::Arc;

pub struct IngredientService {
    ingredient_repo: Arc<dyn IngredientRepository>,
}

impl IngredientService {
    pub fn new(ingredient_repo: Arc<dyn IngredientRepository>) -> Self {
        Self { ingredient_repo }
    }

    /// All ingredients, ordered by id descending.
    pub async fn list_ingredients(&self) -> AppResult<Vec<Ingredient>> {
        self.ingredient_repo.get_all().await
    }

    pub async fn create_ingredient(&self, name: String) -> AppResult<Ingredient> {
        Validator::validate_ingredient_name(&name)?;

        let saved = self.ingredient_repo.insert(&name).await?;
        log_debug!("Created ingredient {} ({})", saved.id, saved.name);

        Ok(saved)
    }
}
