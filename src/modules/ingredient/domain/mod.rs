pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::Ingredient;
pub use repositories::IngredientRepository;
