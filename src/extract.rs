// src/extract.rs
use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejection is reported through `AppError` as a 400.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
