//! SQL access for the `products` table.
//!
//! Functions take any SQLite executor so that handlers can run them either
//! directly on the pool or inside a transaction.
use sqlx::SqliteExecutor;

use crate::models::product::{NewProduct, Product};

pub async fn insert(executor: impl SqliteExecutor<'_>, product: &NewProduct) -> Result<Product, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "INSERT INTO products (name, description, price, qty)
         VALUES (?, ?, ?, ?)
         RETURNING id, name, description, price, qty",
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(product.qty)
    .fetch_one(executor)
    .await
}

pub async fn get_by_id(executor: impl SqliteExecutor<'_>, id: i64) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, qty FROM products WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn get_all(executor: impl SqliteExecutor<'_>) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, qty FROM products ORDER BY id",
    )
    .fetch_all(executor)
    .await
}

/// Overwrites all writable fields. Returns `None` when no row has this id.
pub async fn update(
    executor: impl SqliteExecutor<'_>,
    id: i64,
    product: &NewProduct,
) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "UPDATE products SET name = ?, description = ?, price = ?, qty = ?
         WHERE id = ?
         RETURNING id, name, description, price, qty",
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(product.qty)
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Removes the row and returns its last values, or `None` when no row has this id.
pub async fn delete(executor: impl SqliteExecutor<'_>, id: i64) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "DELETE FROM products WHERE id = ?
         RETURNING id, name, description, price, qty",
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}
