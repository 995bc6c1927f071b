// src/db/store.rs

use sqlx::AnyPool;

use crate::db::{Result, StoreError};
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
    quiz::QuizScope,
};

/// Handle to the trivia database. Cheap to clone; clones share the pool.
#[derive(Debug, Clone)]
pub struct TriviaStore {
    pool: AnyPool,
}

impl TriviaStore {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// All categories, ordered by id.
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(
            sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    /// All questions, ordered by id.
    pub async fn list_questions(&self) -> Result<Vec<Question>> {
        Ok(sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    pub async fn find_question(&self, id: i64) -> Result<Question> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("question {}", id)))
    }

    pub async fn delete_question(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("question {}", id)));
        }

        Ok(())
    }

    /// Inserts a question and returns its generated id.
    /// Every column is required; an absent one fails without touching the database.
    pub async fn insert_question(&self, new: NewQuestion) -> Result<i64> {
        let question = new.question.ok_or(StoreError::MissingField("question"))?;
        let answer = new.answer.ok_or(StoreError::MissingField("answer"))?;
        let category = new.category.ok_or(StoreError::MissingField("category"))?;
        let difficulty = new.difficulty.ok_or(StoreError::MissingField("difficulty"))?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(question)
        .bind(answer)
        .bind(category)
        .bind(difficulty)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Created question {}", id);
        Ok(id)
    }

    /// Questions whose text contains `term`, ignoring case. The term is matched literally.
    ///
    /// Case folding happens here rather than in SQL: SQLite's `LOWER` only folds ASCII.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let needle = term.to_lowercase();

        Ok(self
            .list_questions()
            .await?
            .into_iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .collect())
    }

    pub async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>> {
        Ok(sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Questions in `scope` whose id is not in `exclude`.
    pub async fn quiz_candidates(&self, scope: QuizScope, exclude: &[i64]) -> Result<Vec<Question>> {
        let mut sql = String::from(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE 1 = 1",
        );
        let mut binds: Vec<i64> = Vec::with_capacity(exclude.len() + 1);

        if let QuizScope::Category(category) = scope {
            binds.push(category);
            sql.push_str(&format!(" AND category = ${}", binds.len()));
        }

        // Numbered placeholders are understood by both the postgres and sqlite drivers.
        if !exclude.is_empty() {
            let placeholders: Vec<String> = exclude
                .iter()
                .map(|id| {
                    binds.push(*id);
                    format!("${}", binds.len())
                })
                .collect();
            sql.push_str(&format!(" AND id NOT IN ({})", placeholders.join(", ")));
        }
        sql.push_str(" ORDER BY id");

        let mut query = sqlx::query_as::<_, Question>(&sql);
        for value in binds {
            query = query.bind(value);
        }

        Ok(query.fetch_all(&self.pool).await?)
    }
}
