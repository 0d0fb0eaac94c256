pub mod ingredient;

pub use ingredient::Ingredient;
