// src/database.rs
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::schema::{TableSchema, PRODUCTS};

/// Opens the pool, creating the database file if it does not exist yet.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Creates every table this service owns if absent. There is no migration step.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    create_table(pool, &PRODUCTS).await
}

async fn create_table(pool: &SqlitePool, table: &TableSchema) -> Result<(), sqlx::Error> {
    sqlx::query(&table.create_table_sql()).execute(pool).await?;
    info!(table = table.name, "Table ready");
    Ok(())
}
