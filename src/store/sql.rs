// src/store/sql.rs

use std::time::Duration;

use async_trait::async_trait;
use sqlx::{AnyPool, any::AnyPoolOptions};

use super::{Dialect, StoreError, StoreResult, TriviaStore, schema::DEFAULT_CATEGORIES};
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

const QUESTION_COLUMNS: &str = "id, question, answer, difficulty, category";

/// [`TriviaStore`] backed by a `sqlx` Any pool, so the same queries run
/// against PostgreSQL in production and SQLite in tests.
#[derive(Debug, Clone)]
pub struct SqlStore {
    pool: AnyPool,
    dialect: Dialect,
}

impl SqlStore {
    /// Opens a pool for `database_url` (`postgres://…` or `sqlite:…`).
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let dialect = Dialect::from_url(database_url)?;
        sqlx::any::install_default_drivers();

        let pool = AnyPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await?;

        Ok(Self { pool, dialect })
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Creates the `categories` and `questions` tables if they are missing.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        for statement in self.dialect.schema() {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Inserts the default categories when the table is empty.
    /// Returns the number of rows inserted.
    pub async fn seed_categories(&self) -> StoreResult<usize> {
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;
        if existing > 0 {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        for (id, label) in DEFAULT_CATEGORIES {
            sqlx::query("INSERT INTO categories (id, type) VALUES ($1, $2)")
                .bind(id)
                .bind(label)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        Ok(DEFAULT_CATEGORIES.len())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl TriviaStore for SqlStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>("SELECT id, type FROM categories")
            .fetch_all(&self.pool)
            .await?;
        Ok(categories)
    }

    async fn find_category(&self, id: i64) -> StoreResult<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(category)
    }

    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id");
        let questions = sqlx::query_as::<_, Question>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(questions)
    }

    async fn find_question(&self, id: i64) -> StoreResult<Option<Question>> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = $1");
        let question = sqlx::query_as::<_, Question>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(question)
    }

    async fn questions_in_category(&self, category_id: i64) -> StoreResult<Vec<Question>> {
        let sql =
            format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE category = $1 ORDER BY id");
        let questions = sqlx::query_as::<_, Question>(&sql)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(questions)
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        match self.dialect {
            Dialect::Postgres => {
                let pattern = format!("%{}%", escape_like(term));
                let sql = format!(
                    r"SELECT {QUESTION_COLUMNS} FROM questions WHERE question ILIKE $1 ESCAPE '\' ORDER BY id"
                );
                let questions = sqlx::query_as::<_, Question>(&sql)
                    .bind(pattern)
                    .fetch_all(&self.pool)
                    .await?;
                Ok(questions)
            }
            // SQLite's LOWER() and LIKE only fold ASCII, so match in Rust instead.
            Dialect::Sqlite => {
                let needle = term.to_lowercase();
                let questions = self
                    .list_questions()
                    .await?
                    .into_iter()
                    .filter(|q| q.question.to_lowercase().contains(&needle))
                    .collect();
                Ok(questions)
            }
        }
    }

    async fn insert_question(&self, new_question: &NewQuestion) -> StoreResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO questions (question, answer, difficulty, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(new_question.question.clone())
        .bind(new_question.answer.clone())
        .bind(new_question.difficulty)
        .bind(new_question.category)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn delete_question(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

/// Escapes `LIKE` metacharacters so `term` only ever matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
