pub mod application;
pub mod domain;
pub mod http;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::IngredientService;
pub use domain::{Ingredient, IngredientRepository};
