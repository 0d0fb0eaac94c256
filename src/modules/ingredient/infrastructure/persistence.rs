use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::infrastructure::database::Database;
use crate::modules::ingredient::domain::{entities::Ingredient, repositories::IngredientRepository};
use crate::modules::ingredient::infrastructure::models::{IngredientModel, NewIngredient};
use crate::schema::ingredients;
use crate::shared::errors::AppResult;

pub struct IngredientRepositoryImpl {
    db: Arc<Database>,
}

impl IngredientRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn model_to_entity(model: IngredientModel) -> Ingredient {
        Ingredient {
            id: model.id,
            name: model.name,
        }
    }
}

#[async_trait]
impl IngredientRepository for IngredientRepositoryImpl {
    async fn get_all(&self) -> AppResult<Vec<Ingredient>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<IngredientModel>> {
            let mut conn = db.get_connection()?;
            // Listing is DISTINCT; repeated rows are never returned.
            let rows = ingredients::table
                .order(ingredients::id.desc())
                .distinct()
                .load::<IngredientModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models.into_iter().map(Self::model_to_entity).collect())
    }

    async fn insert(&self, name: &str) -> AppResult<Ingredient> {
        let db = Arc::clone(&self.db);
        let new_row = NewIngredient {
            name: name.to_string(),
            recipe_id: None,
        };

        let saved = task::spawn_blocking(move || -> AppResult<IngredientModel> {
            let mut conn = db.get_connection()?;
            let row = diesel::insert_into(ingredients::table)
                .values(&new_row)
                .get_result::<IngredientModel>(&mut conn)?;
            Ok(row)
        })
        .await??;

        Ok(Self::model_to_entity(saved))
    }
}
