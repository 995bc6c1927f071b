// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

use crate::models::category::CategoryRef;

/// Represents the 'questions' table in the database.
/// Serializes to the `{id, question, answer, difficulty, category}` shape used in every listing.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text of the question.
    pub question: String,

    pub answer: String,

    /// Id of the category the question belongs to. Not checked against `categories`.
    pub category: i64,

    pub difficulty: i64,
}

/// Insert payload for the data access layer.
/// Fields stay optional here; the store decides which ones are required.
#[derive(Debug, Clone, Default)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

/// DTO for creating a new question.
/// Only values that are present get validated.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 1000))]
    pub question: Option<String>,
    #[validate(length(min = 1, max = 1000))]
    pub answer: Option<String>,
    pub category: Option<CategoryRef>,
    #[validate(range(min = 1, max = 5))]
    pub difficulty: Option<i64>,
}

impl CreateQuestionRequest {
    pub fn is_empty(&self) -> bool {
        self.question.is_none()
            && self.answer.is_none()
            && self.category.is_none()
            && self.difficulty.is_none()
    }
}

/// DTO for searching questions by substring.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(alias = "searchTerm")]
    pub search_term: Option<String>,
}
