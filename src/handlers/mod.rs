// src/handlers/mod.rs

use axum::extract::{Query, rejection::QueryRejection};

use crate::utils::pagination::PageParams;

pub mod category;
pub mod question;
pub mod quiz;

/// Page requested through `?page=`, falling back to the first page when the
/// query string cannot be parsed.
fn requested_page(params: Result<Query<PageParams>, QueryRejection>) -> i64 {
    params
        .map(|Query(params)| params)
        .unwrap_or_default()
        .number()
}
