// src/models/quiz.rs

use serde::Deserialize;

use crate::utils::lenient::int;

/// Category id that selects questions from every category.
pub const ALL_CATEGORIES: i64 = 0;

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    pub quiz_category: Option<QuizCategory>,
}

/// Only the id is used; the `type` label clients send along is ignored.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "int")]
    pub id: i64,
}
