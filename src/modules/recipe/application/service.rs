use crate::log_debug;
use crate::modules::recipe::domain::{
    entities::Recipe,
    repositories::{RecipeChanges, RecipeFilter, RecipeRepository},
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use std::sync::Arc;

pub struct RecipeService {
    recipe_repo: Arc<dyn RecipeRepository>,
}

impl RecipeService {
    pub fn new(recipe_repo: Arc<dyn RecipeRepository>) -> Self {
        Self { recipe_repo }
    }

    /// Matching recipes, newest first. `ingredients` is the raw
    /// comma-separated id list from the query string; junk ids are a client
    /// error, never silently dropped.
    pub async fn list_recipes(
        &self,
        name: Option<String>,
        ingredients: Option<String>,
    ) -> AppResult<Vec<Recipe>> {
        let filter = RecipeFilter {
            name,
            ingredient_ids: match ingredients {
                Some(raw) => Some(parse_ingredient_ids(&raw)?),
                None => None,
            },
        };

        self.recipe_repo.list(&filter).await
    }

    pub async fn get_recipe(&self, id: i32) -> AppResult<Recipe> {
        self.recipe_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Recipe with ID {} not found", id)))
    }

    /// Persist the recipe row first (so it has an identifier), then one
    /// ingredient row per usable name, in input order, one write at a time.
    /// Entries without a usable name are skipped silently. There is no
    /// rollback of the recipe row if an ingredient write fails mid-loop;
    /// only storage-native transaction semantics bound the damage.
    pub async fn create_recipe(
        &self,
        name: String,
        description: String,
        ingredient_names: Vec<Option<String>>,
    ) -> AppResult<Recipe> {
        Validator::validate_recipe_name(&name)?;

        let recipe = self.recipe_repo.insert(&name, &description).await?;

        for ingredient_name in ingredient_names.into_iter().filter_map(usable_name) {
            self.recipe_repo
                .add_ingredient(recipe.id, &ingredient_name)
                .await?;
        }

        self.reload(recipe.id).await
    }

    /// Partial update. Fields present in `changes` are applied; when
    /// `ingredient_names` is `Some`, the whole ingredient set is replaced:
    /// every currently-owned row is hard-deleted and the new set created
    /// from scratch. Rows are never reused, even for names that reappear.
    /// Concurrent replacements of the same recipe are not serialized here;
    /// isolation is left to the storage layer.
    pub async fn update_recipe(
        &self,
        id: i32,
        changes: RecipeChanges,
        ingredient_names: Option<Vec<Option<String>>>,
    ) -> AppResult<Recipe> {
        if self.recipe_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Recipe with ID {} not found",
                id
            )));
        }

        if let Some(names) = ingredient_names {
            let removed = self.recipe_repo.clear_ingredients(id).await?;
            log_debug!("Replacing ingredient set of recipe {} ({} rows removed)", id, removed);

            for ingredient_name in names.into_iter().filter_map(usable_name) {
                self.recipe_repo.add_ingredient(id, &ingredient_name).await?;
            }
        }

        if let Some(new_name) = &changes.name {
            Validator::validate_recipe_name(new_name)?;
        }
        if !changes.is_empty() {
            self.recipe_repo.update_fields(id, &changes).await?;
        }

        self.reload(id).await
    }

    pub async fn delete_recipe(&self, id: i32) -> AppResult<()> {
        if self.recipe_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Recipe with ID {} not found",
                id
            )));
        }

        self.recipe_repo.delete(id).await
    }

    async fn reload(&self, id: i32) -> AppResult<Recipe> {
        self.recipe_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::InternalError("Failed to reload saved recipe".into()))
    }
}

/// A usable ingredient entry has a non-empty name; everything else maps to
/// `None` and is skipped by the callers above.
fn usable_name(name: Option<String>) -> Option<String> {
    name.filter(|n| !n.is_empty())
}

fn parse_ingredient_ids(raw: &str) -> AppResult<Vec<i32>> {
    raw.split(',')
        .map(|part| {
            part.trim().parse::<i32>().map_err(|_| {
                AppError::InvalidInput(format!("Invalid ingredient id: '{}'", part.trim()))
            })
        })
        .collect()
}
