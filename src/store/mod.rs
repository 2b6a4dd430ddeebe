// src/store/mod.rs

//! Storage gateway for questions and categories.
//!
//! Handlers only see the [`TriviaStore`] trait; [`SqlStore`] is the
//! production implementation.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

pub mod schema;
pub mod sql;

pub use schema::Dialect;
pub use sql::SqlStore;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The targeted row does not exist (or no longer exists).
    #[error("row not found")]
    NotFound,

    /// The URL scheme names a database this store cannot talk to.
    #[error("unsupported database url: {0}")]
    UnsupportedUrl(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories, in storage order.
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    async fn find_category(&self, id: i64) -> StoreResult<Option<Category>>;

    /// All questions ordered by id ascending.
    async fn list_questions(&self) -> StoreResult<Vec<Question>>;

    async fn find_question(&self, id: i64) -> StoreResult<Option<Question>>;

    /// Questions whose category equals `category_id`, ordered by id.
    async fn questions_in_category(&self, category_id: i64) -> StoreResult<Vec<Question>>;

    /// Questions whose text contains `term`, ignoring case, ordered by id.
    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    /// Inserts a question and returns its storage-assigned id.
    async fn insert_question(&self, new_question: &NewQuestion) -> StoreResult<i64>;

    /// Deletes a question. Returns [`StoreError::NotFound`] when no row matched,
    /// which is how a lost race against a concurrent delete is observed.
    async fn delete_question(&self, id: i64) -> StoreResult<()>;
}
