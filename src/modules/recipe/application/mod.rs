pub mod service;

pub use service::RecipeService;
