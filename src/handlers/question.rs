// src/handlers/question.rs

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::IntoResponse,
};
use serde_json::{Value, json};

use super::requested_page;
use crate::{
    error::AppError,
    models::{
        category::category_map,
        question::{NewQuestion, QuestionsPayload},
    },
    state::SharedStore,
    store::StoreError,
    utils::pagination::{PageParams, paginate},
};

/// Lists one page of all questions, ordered by id, with every category.
///
/// An empty page (no questions at all, or a page past the end) is a 404.
pub async fn list_questions(
    State(store): State<SharedStore>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let page = requested_page(params);

    let questions = store.list_questions().await?;
    let categories = store.list_categories().await?;

    let current_questions = paginate(page, &questions);
    if current_questions.is_empty() {
        return Err(AppError::NotFound(format!("Page {} has no questions", page)));
    }

    Ok(Json(json!({
        "success": true,
        "questions": current_questions,
        "total_questions": questions.len(),
        "current_category": "",
        "categories": category_map(categories),
    })))
}

/// Deletes a question by ID and returns the requested page of what is left.
///
/// Every failure, including a missing question, is reported as 422.
pub async fn delete_question(
    State(store): State<SharedStore>,
    path: Result<Path<i64>, PathRejection>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path.map_err(|e| AppError::NotFound(e.body_text()))?;
    let page = requested_page(params);

    store
        .find_question(id)
        .await
        .map_err(|e| unprocessable("look up question", e))?
        .ok_or_else(|| AppError::Unprocessable(format!("Question {} not found", id)))?;

    store.delete_question(id).await.map_err(|e| match e {
        StoreError::NotFound => {
            AppError::Unprocessable(format!("Question {} was deleted concurrently", id))
        }
        e => unprocessable("delete question", e),
    })?;

    let remaining = store
        .list_questions()
        .await
        .map_err(|e| unprocessable("list questions", e))?;

    tracing::info!("Deleted question {}", id);

    Ok(Json(json!({
        "success": true,
        "deleted": id,
        "books": paginate(page, &remaining),
        "total_books": remaining.len(),
    })))
}

/// `POST /questions`: searches when the body carries a `searchTerm`,
/// otherwise creates a question from the body.
///
/// * A body that is not JSON at all is a 400.
/// * Field type errors and storage failures while creating are 422.
/// * Storage failures while searching are 404.
pub async fn create_or_search_questions(
    State(store): State<SharedStore>,
    params: Result<Query<PageParams>, QueryRejection>,
    payload: Result<Json<QuestionsPayload>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(payload) = payload.map_err(|rejection| match rejection {
        JsonRejection::JsonDataError(e) => AppError::Unprocessable(e.body_text()),
        other => AppError::BadRequest(other.body_text()),
    })?;

    match payload.search_term {
        Some(term) => search_questions(&store, &term).await,
        None => create_question(&store, requested_page(params), &payload.new_question).await,
    }
}

/// Search results are returned in full, not paginated.
async fn search_questions(store: &SharedStore, term: &str) -> Result<Json<Value>, AppError> {
    let matches = store.search_questions(term).await.map_err(|e| {
        tracing::error!("Failed to search questions for {:?}: {:?}", term, e);
        AppError::NotFound(e.to_string())
    })?;

    Ok(Json(json!({
        "success": true,
        "total_questions": matches.len(),
        "questions": matches,
    })))
}

async fn create_question(
    store: &SharedStore,
    page: i64,
    new_question: &NewQuestion,
) -> Result<Json<Value>, AppError> {
    let id = store
        .insert_question(new_question)
        .await
        .map_err(|e| unprocessable("insert question", e))?;

    let questions = store
        .list_questions()
        .await
        .map_err(|e| unprocessable("list questions", e))?;

    tracing::info!("Created question {}", id);

    Ok(Json(json!({
        "success": true,
        "created": id,
        "question": paginate(page, &questions),
        "total_question": questions.len(),
    })))
}

/// Logged once, by the error responder.
fn unprocessable(action: &str, err: StoreError) -> AppError {
    AppError::Unprocessable(format!("Failed to {}: {}", action, err))
}
