pub mod application;
pub mod domain;
pub mod http;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::RecipeService;
pub use domain::{Recipe, RecipeChanges, RecipeFilter, RecipeIngredient, RecipeRepository};
