// src/handlers/quiz.rs

use std::collections::HashSet;

use axum::{Json, extract::State, extract::rejection::JsonRejection, response::IntoResponse};
use rand::{Rng, seq::IndexedRandom};
use serde_json::json;

use crate::{
    error::AppError,
    models::{
        question::Question,
        quiz::{ALL_CATEGORIES, QuizRequest},
    },
    state::SharedStore,
};

/// Picks the next quiz question.
///
/// Draws uniformly from the questions of `quiz_category` (or of every
/// category when its id is 0) that are not in `previous_questions`.
/// Any failure, including an exhausted pool, is reported as 404.
pub async fn next_question(
    State(store): State<SharedStore>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload.map_err(|e| AppError::NotFound(e.body_text()))?;

    let category = request
        .quiz_category
        .ok_or_else(|| AppError::NotFound("quiz_category is required".to_string()))?;

    let candidates = if category.id == ALL_CATEGORIES {
        store.list_questions().await
    } else {
        store.questions_in_category(category.id).await
    }
    .map_err(|e| {
        tracing::error!("Failed to load quiz candidates: {:?}", e);
        AppError::NotFound(e.to_string())
    })?;

    let question = choose_question(candidates, &request.previous_questions, &mut rand::rng())
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No unseen questions left in category {}",
                category.id
            ))
        })?;

    Ok(Json(json!({
        "success": true,
        "question": question,
    })))
}

/// Uniformly picks one of `candidates` whose id is not in `previous`.
/// Returns `None` when every candidate has already been asked.
pub fn choose_question<R>(
    candidates: Vec<Question>,
    previous: &[i64],
    rng: &mut R,
) -> Option<Question>
where
    R: Rng + ?Sized,
{
    let asked: HashSet<i64> = previous.iter().copied().collect();
    let pool: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !asked.contains(&q.id))
        .collect();

    pool.choose(rng).cloned()
}
