use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_ingredient_name(name: &str) -> Result<(), AppError> {
        if name.is_empty() {
            return Err(AppError::ValidationError(
                "Ingredient name cannot be empty".to_string(),
            ));
        }
        if name.len() > 255 {
            return Err(AppError::ValidationError(
                "Ingredient name too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_recipe_name(name: &str) -> Result<(), AppError> {
        if name.len() > 255 {
            return Err(AppError::ValidationError(
                "Recipe name too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }
}
