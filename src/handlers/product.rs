// src/handlers/product.rs
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::dtos::product::{serialize_many, ProductRequest, ProductResponse};
use crate::error::{map_unique_violation, AppError};
use crate::extract::AppJson;
use crate::repository::product as products;
use crate::state::AppState;

const NOT_FOUND: &str = "Product not found";
const DUPLICATE_NAME: &str = "Product name already exists";

/// Ids that do not parse as integers can never match a row.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>().map_err(|_| AppError::not_found(NOT_FOUND))
}

// POST /product - Create new product
#[instrument(skip(state, body))]
pub async fn create_product(
    State(state): State<AppState>,
    AppJson(body): AppJson<Value>,
) -> Result<Json<ProductResponse>, AppError> {
    let new_product = ProductRequest::from_json(body)?.into_new_product()?;

    let mut tx = state.db_pool.begin().await?;
    let product = products::insert(&mut *tx, &new_product)
        .await
        .map_err(|e| map_unique_violation(e, DUPLICATE_NAME))?;
    tx.commit().await?;

    debug!(id = product.id, "Product created");
    Ok(Json(ProductResponse::from(product)))
}

// GET /product - List all products
#[instrument(skip(state))]
pub async fn get_products(State(state): State<AppState>) -> Result<Json<Vec<ProductResponse>>, AppError> {
    match products::get_all(&state.db_pool).await {
        Ok(all) => Ok(Json(serialize_many(all))),
        Err(e) => {
            error!(?e, "Failed to fetch products");
            Err(e.into())
        }
    }
}

// GET /product/{id} - Get single product
#[instrument(skip(state))]
pub async fn get_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let id = parse_id(&id)?;
    let product = products::get_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

    Ok(Json(ProductResponse::from(product)))
}

// PUT /product/{id} - Replace all writable fields
#[instrument(skip(state, body))]
pub async fn update_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
    AppJson(body): AppJson<Value>,
) -> Result<Json<ProductResponse>, AppError> {
    let id = parse_id(&id)?;
    let replacement = ProductRequest::from_json(body)?.into_new_product()?;

    // No read precedes the UPDATE, so the transaction never has to upgrade a read lock.
    let mut tx = state.db_pool.begin().await?;
    let product = products::update(&mut *tx, id, &replacement)
        .await
        .map_err(|e| map_unique_violation(e, DUPLICATE_NAME))?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;
    tx.commit().await?;

    debug!(id, "Product updated");
    Ok(Json(ProductResponse::from(product)))
}

// DELETE /product/{id} - Delete product, echoing its last values
#[instrument(skip(state))]
pub async fn delete_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let id = parse_id(&id)?;

    let mut tx = state.db_pool.begin().await?;
    let product = products::delete(&mut *tx, id)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;
    tx.commit().await?;

    debug!(id, "Product deleted");
    Ok(Json(ProductResponse::from(product)))
}
