// src/store/schema.rs

use super::StoreError;

/// SQL dialect of the configured database, derived from the URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
    Sqlite,
}

impl Dialect {
    pub fn from_url(url: &str) -> Result<Self, StoreError> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(Dialect::Postgres)
        } else if url.starts_with("sqlite:") {
            Ok(Dialect::Sqlite)
        } else {
            let scheme = url.split(':').next().unwrap_or_default();
            Err(StoreError::UnsupportedUrl(scheme.to_string()))
        }
    }

    /// Table definitions, applied in order with `CREATE TABLE IF NOT EXISTS`.
    pub fn schema(self) -> &'static [&'static str] {
        match self {
            Dialect::Postgres => &[
                r#"
                CREATE TABLE IF NOT EXISTS categories (
                    id BIGSERIAL PRIMARY KEY,
                    type TEXT NOT NULL
                )
                "#,
                r#"
                CREATE TABLE IF NOT EXISTS questions (
                    id BIGSERIAL PRIMARY KEY,
                    question TEXT NOT NULL,
                    answer TEXT NOT NULL,
                    difficulty BIGINT NOT NULL,
                    category BIGINT NOT NULL REFERENCES categories (id) ON DELETE CASCADE
                )
                "#,
            ],
            Dialect::Sqlite => &[
                r#"
                CREATE TABLE IF NOT EXISTS categories (
                    id INTEGER PRIMARY KEY,
                    type TEXT NOT NULL
                )
                "#,
                r#"
                CREATE TABLE IF NOT EXISTS questions (
                    id INTEGER PRIMARY KEY,
                    question TEXT NOT NULL,
                    answer TEXT NOT NULL,
                    difficulty INTEGER NOT NULL,
                    category INTEGER NOT NULL REFERENCES categories (id) ON DELETE CASCADE
                )
                "#,
            ],
        }
    }
}

/// The six categories the trivia front-end ships icons for.
pub const DEFAULT_CATEGORIES: [(i64, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];
