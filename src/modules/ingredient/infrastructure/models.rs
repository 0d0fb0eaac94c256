use crate::schema::ingredients;
use diesel::prelude::*;

// For reading from database
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = ingredients)]
pub struct IngredientModel {
    pub id: i32,
    pub name: String,
    pub recipe_id: Option<i32>,
}

// For inserting new ingredients; recipe_id is None for standalone rows
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = ingredients)]
pub struct NewIngredient {
    pub name: String,
    pub recipe_id: Option<i32>,
}
