pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::{Recipe, RecipeIngredient};
pub use repositories::{RecipeChanges, RecipeFilter, RecipeRepository};
