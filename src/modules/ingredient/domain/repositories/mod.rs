pub mod ingredient_repository;

pub use ingredient_repository::IngredientRepository;
