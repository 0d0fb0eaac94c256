use serde::{Deserialize, Serialize};
use std::fmt;

/// A recipe together with its owned ingredient collection, treated as one
/// consistency unit by the service layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<RecipeIngredient>,
}

/// Nested representation of an owned ingredient. The identifier is omitted
/// on purpose: owned ingredients are not addressable entities for clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
