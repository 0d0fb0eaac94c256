use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::PgTextExpressionMethods;
use tokio::task;

use crate::infrastructure::database::{Database, DbConnection};
use crate::modules::ingredient::infrastructure::models::{IngredientModel, NewIngredient};
use crate::modules::recipe::domain::{
    entities::{Recipe, RecipeIngredient},
    repositories::{RecipeChanges, RecipeFilter, RecipeRepository},
};
use crate::modules::recipe::infrastructure::models::{NewRecipe, RecipeChangeset, RecipeModel};
use crate::schema::{ingredients, recipes};
use crate::shared::errors::{AppError, AppResult};

pub struct RecipeRepositoryImpl {
    db: Arc<Database>,
}

impl RecipeRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Attach owned ingredient rows to their recipes, batched in one query.
    /// Rows are grouped in id order, which is creation (input) order.
    fn attach_ingredients(
        conn: &mut DbConnection,
        models: Vec<RecipeModel>,
    ) -> AppResult<Vec<Recipe>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let owner_ids: Vec<Option<i32>> = models.iter().map(|m| Some(m.id)).collect();
        let rows = ingredients::table
            .filter(ingredients::recipe_id.eq_any(owner_ids))
            .order(ingredients::id.asc())
            .load::<IngredientModel>(conn)?;

        let mut by_recipe: HashMap<i32, Vec<RecipeIngredient>> =
            HashMap::with_capacity(models.len());
        for row in rows {
            if let Some(recipe_id) = row.recipe_id {
                by_recipe
                    .entry(recipe_id)
                    .or_default()
                    .push(RecipeIngredient { name: row.name });
            }
        }

        let out = models
            .into_iter()
            .map(|m| Recipe {
                ingredients: by_recipe.remove(&m.id).unwrap_or_default(),
                id: m.id,
                name: m.name,
                description: m.description,
            })
            .collect();

        Ok(out)
    }
}

#[async_trait]
impl RecipeRepository for RecipeRepositoryImpl {
    async fn list(&self, filter: &RecipeFilter) -> AppResult<Vec<Recipe>> {
        let db = Arc::clone(&self.db);
        let filter = filter.clone();

        task::spawn_blocking(move || -> AppResult<Vec<Recipe>> {
            let mut conn = db.get_connection()?;

            let mut query = recipes::table.order(recipes::id.desc()).into_boxed();

            if let Some(needle) = &filter.name {
                query = query.filter(recipes::name.ilike(format!("%{}%", needle)));
            }

            if let Some(ids) = &filter.ingredient_ids {
                // OR across the given ids: any owned ingredient matches.
                let owners = ingredients::table
                    .filter(ingredients::id.eq_any(ids))
                    .select(ingredients::recipe_id)
                    .load::<Option<i32>>(&mut conn)?;
                let owners: Vec<i32> = owners.into_iter().flatten().collect();
                query = query.filter(recipes::id.eq_any(owners));
            }

            let models = query.load::<RecipeModel>(&mut conn)?;
            Self::attach_ingredients(&mut conn, models)
        })
        .await?
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Recipe>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<Recipe>> {
            let mut conn = db.get_connection()?;

            let model = recipes::table
                .filter(recipes::id.eq(id))
                .first::<RecipeModel>(&mut conn)
                .optional()?;

            match model {
                Some(m) => {
                    let out = Self::attach_ingredients(&mut conn, vec![m])?;
                    Ok(out.into_iter().next())
                }
                None => Ok(None),
            }
        })
        .await?
    }

    async fn insert(&self, name: &str, description: &str) -> AppResult<Recipe> {
        let db = Arc::clone(&self.db);
        let new_row = NewRecipe {
            name: name.to_string(),
            description: description.to_string(),
        };

        let saved = task::spawn_blocking(move || -> AppResult<RecipeModel> {
            let mut conn = db.get_connection()?;
            let row = diesel::insert_into(recipes::table)
                .values(&new_row)
                .get_result::<RecipeModel>(&mut conn)?;
            Ok(row)
        })
        .await??;

        Ok(Recipe {
            id: saved.id,
            name: saved.name,
            description: saved.description,
            ingredients: Vec::new(),
        })
    }

    async fn update_fields(&self, id: i32, changes: &RecipeChanges) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let changeset = RecipeChangeset {
            name: changes.name.clone(),
            description: changes.description.clone(),
        };

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let n = diesel::update(recipes::table.filter(recipes::id.eq(id)))
                .set(&changeset)
                .execute(&mut conn)?;
            if n == 0 {
                return Err(AppError::NotFound(format!(
                    "Recipe with ID {} not found",
                    id
                )));
            }
            Ok(())
        })
        .await?
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            // Owned ingredient rows go with the recipe (ON DELETE CASCADE).
            let n = diesel::delete(recipes::table.filter(recipes::id.eq(id)))
                .execute(&mut conn)?;
            if n == 0 {
                return Err(AppError::NotFound(format!(
                    "Recipe with ID {} not found",
                    id
                )));
            }
            Ok(())
        })
        .await?
    }

    async fn add_ingredient(&self, recipe_id: i32, name: &str) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let new_row = NewIngredient {
            name: name.to_string(),
            recipe_id: Some(recipe_id),
        };

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::insert_into(ingredients::table)
                .values(&new_row)
                .execute(&mut conn)?;
            Ok(())
        })
        .await?
    }

    async fn clear_ingredients(&self, recipe_id: i32) -> AppResult<usize> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;
            let n = diesel::delete(
                ingredients::table.filter(ingredients::recipe_id.eq(Some(recipe_id))),
            )
            .execute(&mut conn)?;
            Ok(n)
        })
        .await?
    }
}
