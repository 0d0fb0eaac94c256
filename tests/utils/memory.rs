/// In-memory stand-in for the storage layer.
///
/// Honors the external collaborator contract the real database provides:
/// unique monotonically assigned identifiers (never reused), and referential
/// cascade from a recipe to its owned ingredient rows on delete.
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use cookbook::modules::ingredient::domain::{
    entities::Ingredient, repositories::IngredientRepository,
};
use cookbook::modules::recipe::domain::{
    entities::{Recipe, RecipeIngredient},
    repositories::{RecipeChanges, RecipeFilter, RecipeRepository},
};
use cookbook::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct RecipeRow {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct IngredientRow {
    pub id: i32,
    pub name: String,
    pub recipe_id: Option<i32>,
}

#[derive(Default)]
struct Tables {
    recipes: Vec<RecipeRow>,
    ingredients: Vec<IngredientRow>,
    next_recipe_id: i32,
    next_ingredient_id: i32,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Tables>,
}

impl MemoryStore {
    pub fn insert_recipe(&self, name: &str, description: &str) -> RecipeRow {
        let mut tables = self.inner.lock().unwrap();
        tables.next_recipe_id += 1;
        let row = RecipeRow {
            id: tables.next_recipe_id,
            name: name.to_string(),
            description: description.to_string(),
        };
        tables.recipes.push(row.clone());
        row
    }

    pub fn insert_ingredient(&self, name: &str, recipe_id: Option<i32>) -> IngredientRow {
        let mut tables = self.inner.lock().unwrap();
        tables.next_ingredient_id += 1;
        let row = IngredientRow {
            id: tables.next_ingredient_id,
            name: name.to_string(),
            recipe_id,
        };
        tables.ingredients.push(row.clone());
        row
    }

    /// Delete a recipe row and cascade to its owned ingredient rows.
    pub fn delete_recipe(&self, id: i32) -> usize {
        let mut tables = self.inner.lock().unwrap();
        let before = tables.recipes.len();
        tables.recipes.retain(|r| r.id != id);
        let removed = before - tables.recipes.len();
        if removed > 0 {
            tables.ingredients.retain(|i| i.recipe_id != Some(id));
        }
        removed
    }

    pub fn delete_ingredients_of(&self, recipe_id: i32) -> usize {
        let mut tables = self.inner.lock().unwrap();
        let before = tables.ingredients.len();
        tables.ingredients.retain(|i| i.recipe_id != Some(recipe_id));
        before - tables.ingredients.len()
    }

    pub fn update_recipe(&self, id: i32, changes: &RecipeChanges) -> usize {
        let mut tables = self.inner.lock().unwrap();
        match tables.recipes.iter_mut().find(|r| r.id == id) {
            Some(row) => {
                if let Some(name) = &changes.name {
                    row.name = name.clone();
                }
                if let Some(description) = &changes.description {
                    row.description = description.clone();
                }
                1
            }
            None => 0,
        }
    }

    pub fn recipes(&self) -> Vec<RecipeRow> {
        self.inner.lock().unwrap().recipes.clone()
    }

    pub fn ingredients(&self) -> Vec<IngredientRow> {
        self.inner.lock().unwrap().ingredients.clone()
    }

    fn ingredients_of(&self, recipe_id: i32) -> Vec<IngredientRow> {
        let tables = self.inner.lock().unwrap();
        let mut rows: Vec<IngredientRow> = tables
            .ingredients
            .iter()
            .filter(|i| i.recipe_id == Some(recipe_id))
            .cloned()
            .collect();
        rows.sort_by_key(|i| i.id);
        rows
    }

    fn to_aggregate(&self, row: RecipeRow) -> Recipe {
        let ingredients = self
            .ingredients_of(row.id)
            .into_iter()
            .map(|i| RecipeIngredient { name: i.name })
            .collect();
        Recipe {
            id: row.id,
            name: row.name,
            description: row.description,
            ingredients,
        }
    }
}

pub struct MemoryIngredientRepository {
    store: Arc<MemoryStore>,
}

impl MemoryIngredientRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl IngredientRepository for MemoryIngredientRepository {
    async fn get_all(&self) -> AppResult<Vec<Ingredient>> {
        let mut rows = self.store.ingredients();
        rows.sort_by_key(|i| std::cmp::Reverse(i.id));
        Ok(rows
            .into_iter()
            .map(|i| Ingredient {
                id: i.id,
                name: i.name,
            })
            .collect())
    }

    async fn insert(&self, name: &str) -> AppResult<Ingredient> {
        let row = self.store.insert_ingredient(name, None);
        Ok(Ingredient {
            id: row.id,
            name: row.name,
        })
    }
}

pub struct MemoryRecipeRepository {
    store: Arc<MemoryStore>,
}

impl MemoryRecipeRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RecipeRepository for MemoryRecipeRepository {
    async fn list(&self, filter: &RecipeFilter) -> AppResult<Vec<Recipe>> {
        let mut rows = self.store.recipes();
        rows.sort_by_key(|r| std::cmp::Reverse(r.id));

        if let Some(needle) = &filter.name {
            let needle = needle.to_lowercase();
            rows.retain(|r| r.name.to_lowercase().contains(&needle));
        }

        if let Some(ids) = &filter.ingredient_ids {
            let owners: Vec<i32> = self
                .store
                .ingredients()
                .into_iter()
                .filter(|i| ids.contains(&i.id))
                .filter_map(|i| i.recipe_id)
                .collect();
            rows.retain(|r| owners.contains(&r.id));
        }

        Ok(rows
            .into_iter()
            .map(|r| self.store.to_aggregate(r))
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Recipe>> {
        Ok(self
            .store
            .recipes()
            .into_iter()
            .find(|r| r.id == id)
            .map(|r| self.store.to_aggregate(r)))
    }

    async fn insert(&self, name: &str, description: &str) -> AppResult<Recipe> {
        let row = self.store.insert_recipe(name, description);
        Ok(Recipe {
            id: row.id,
            name: row.name,
            description: row.description,
            ingredients: Vec::new(),
        })
    }

    async fn update_fields(&self, id: i32, changes: &RecipeChanges) -> AppResult<()> {
        if self.store.update_recipe(id, changes) == 0 {
            return Err(AppError::NotFound(format!(
                "Recipe with ID {} not found",
                id
            )));
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        if self.store.delete_recipe(id) == 0 {
            return Err(AppError::NotFound(format!(
                "Recipe with ID {} not found",
                id
            )));
        }
        Ok(())
    }

    async fn add_ingredient(&self, recipe_id: i32, name: &str) -> AppResult<()> {
        self.store.insert_ingredient(name, Some(recipe_id));
        Ok(())
    }

    async fn clear_ingredients(&self, recipe_id: i32) -> AppResult<usize> {
        Ok(self.store.delete_ingredients_of(recipe_id))
    }
}
