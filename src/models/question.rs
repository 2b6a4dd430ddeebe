// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

use crate::utils::lenient::optional_int;

/// Represents the 'questions' table in the database.
///
/// The serialized form is the formatted representation returned by every
/// endpoint that lists questions.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text shown to the player.
    pub question: String,

    pub answer: String,

    /// Difficulty score, a small positive integer.
    pub difficulty: i64,

    /// Foreign key to `categories.id`.
    pub category: i64,
}

/// Fields for inserting a new question.
///
/// Every field is optional: missing values are passed to the store as NULL
/// and rejected there by the NOT NULL constraints.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "optional_int")]
    pub difficulty: Option<i64>,
    #[serde(default, deserialize_with = "optional_int")]
    pub category: Option<i64>,
}

/// Body of `POST /questions`.
///
/// A non-null `searchTerm` selects search mode, otherwise the remaining
/// fields describe a question to create.
#[derive(Debug, Deserialize)]
pub struct QuestionsPayload {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    #[serde(flatten)]
    pub new_question: NewQuestion,
}
