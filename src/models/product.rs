use sqlx::FromRow;

use crate::error::AppError;

pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 200;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub qty: i64,
}

/// The four writable fields of a product, validated but not yet stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub qty: i64,
}

impl NewProduct {
    /// Name uniqueness is left to the database.
    pub fn construct(
        name: String,
        description: String,
        price: f64,
        qty: i64,
    ) -> Result<Self, AppError> {
        if name.chars().count() > NAME_MAX_LEN {
            return Err(AppError::validation(format!(
                "name must be at most {NAME_MAX_LEN} characters"
            )));
        }
        if description.chars().count() > DESCRIPTION_MAX_LEN {
            return Err(AppError::validation(format!(
                "description must be at most {DESCRIPTION_MAX_LEN} characters"
            )));
        }
        if !price.is_finite() {
            return Err(AppError::validation("price must be a finite number"));
        }

        Ok(Self { name, description, price, qty })
    }
}
