use crate::modules::recipe::domain::entities::Recipe;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Optional, independently composable list predicates (AND semantics).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    /// Case-insensitive substring match on the recipe name.
    pub name: Option<String>,
    /// Recipes owning at least one ingredient with any of these ids.
    pub ingredient_ids: Option<Vec<i32>>,
}

/// Partial column update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl RecipeChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Matching recipes, newest first (id descending), ingredients attached.
    async fn list(&self, filter: &RecipeFilter) -> AppResult<Vec<Recipe>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Recipe>>;

    /// Insert the recipe row alone; the returned aggregate has no
    /// ingredients yet.
    async fn insert(&self, name: &str, description: &str) -> AppResult<Recipe>;

    async fn update_fields(&self, id: i32, changes: &RecipeChanges) -> AppResult<()>;

    /// Delete the recipe row. Owned ingredient rows are removed by the
    /// storage layer's referential cascade.
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// Create one ingredient row owned by the given recipe.
    async fn add_ingredient(&self, recipe_id: i32, name: &str) -> AppResult<()>;

    /// Hard-delete every ingredient row owned by the given recipe,
    /// returning the number of rows removed.
    async fn clear_ingredients(&self, recipe_id: i32) -> AppResult<usize>;
}
