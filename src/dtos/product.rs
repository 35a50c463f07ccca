// src/dtos/product.rs
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::AppError;
use crate::models::product::{NewProduct, Product};

/// Writable fields in the order they are checked for presence.
const WRITABLE_FIELDS: [&str; 4] = ["name", "description", "price", "qty"];

/// Raw request body fields, extracted but not yet validated by the record mapper.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub qty: i64,
}

impl ProductRequest {
    /// Pulls exactly the writable fields out of a JSON object. Other keys are ignored.
    pub fn from_json(body: Value) -> Result<Self, AppError> {
        let Value::Object(map) = body else {
            return Err(AppError::BadRequest("request body must be a JSON object".into()));
        };

        if let Some(missing) = WRITABLE_FIELDS.iter().find(|key| !map.contains_key(**key)) {
            return Err(AppError::MissingField(*missing));
        }

        Ok(Self {
            name: string_field(&map, "name")?,
            description: string_field(&map, "description")?,
            price: map["price"]
                .as_f64()
                .ok_or_else(|| AppError::validation("price must be a number"))?,
            qty: map["qty"]
                .as_i64()
                .ok_or_else(|| AppError::validation("qty must be an integer"))?,
        })
    }

    pub fn into_new_product(self) -> Result<NewProduct, AppError> {
        NewProduct::construct(self.name, self.description, self.price, self.qty)
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> Result<String, AppError> {
    map[key]
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| AppError::validation(format!("{key} must be a string")))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub qty: i64,
}

// Convert from Model to Response DTO
impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            qty: product.qty,
        }
    }
}

pub fn serialize_many(products: Vec<Product>) -> Vec<ProductResponse> {
    products.into_iter().map(ProductResponse::from).collect()
}
