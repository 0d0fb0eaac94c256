pub mod recipe;

pub use recipe::{Recipe, RecipeIngredient};
