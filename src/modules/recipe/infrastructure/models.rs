use crate::schema::recipes;
use diesel::prelude::*;

// For reading from database
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = recipes)]
pub struct RecipeModel {
    pub id: i32,
    pub name: String,
    pub description: String,
}

// For inserting new recipes (id is storage-assigned)
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = recipes)]
pub struct NewRecipe {
    pub name: String,
    pub description: String,
}

// For partial updates; None fields are left untouched
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = recipes)]
pub struct RecipeChangeset {
    pub name: Option<String>,
    pub description: Option<String>,
}
