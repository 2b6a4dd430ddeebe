// src/handlers/category.rs

use axum::{
    Json,
    extract::{Path, Query, State, rejection::PathRejection, rejection::QueryRejection},
    response::IntoResponse,
};
use serde_json::json;

use super::requested_page;
use crate::{
    error::AppError,
    models::category::category_map,
    state::SharedStore,
    utils::pagination::{PageParams, paginate},
};

/// Lists every category as an `{id: type}` mapping.
pub async fn list_categories(
    State(store): State<SharedStore>,
) -> Result<impl IntoResponse, AppError> {
    let categories = store.list_categories().await?;

    if categories.is_empty() {
        return Err(AppError::NotFound("No categories exist".to_string()));
    }

    Ok(Json(json!({
        "success": true,
        "categories": category_map(categories),
    })))
}

/// Lists one page of the questions in a category.
///
/// * 404 when the category does not exist.
/// * 500 when filtering the questions fails.
pub async fn questions_by_category(
    State(store): State<SharedStore>,
    path: Result<Path<i64>, PathRejection>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path.map_err(|e| AppError::NotFound(e.body_text()))?;

    let category = store
        .find_category(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;

    let questions = store
        .questions_in_category(category.id)
        .await
        .map_err(|e| {
            AppError::InternalServerError(format!(
                "Failed to filter questions by category {}: {}",
                id, e
            ))
        })?;

    let current_questions = paginate(requested_page(params), &questions);

    Ok(Json(json!({
        "success": true,
        "questions": current_questions,
        "current_category": category.category_type,
        "total_questions": questions.len(),
    })))
}
