use crate::modules::ingredient::domain::entities::Ingredient;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait IngredientRepository: Send + Sync {
    /// All ingredients, newest first (id descending), deduplicated.
    async fn get_all(&self) -> AppResult<Vec<Ingredient>>;

    /// Insert a standalone ingredient (not owned by any recipe).
    async fn insert(&self, name: &str) -> AppResult<Ingredient>;
}
