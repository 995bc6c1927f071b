// src/models/quiz.rs

use serde::Deserialize;

use crate::models::category::CategoryRef;

/// Category id the quiz front-end sends for "ALL".
pub const ALL_CATEGORIES: i64 = 0;

/// DTO for requesting the next quiz question.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: Option<QuizCategory>,
    #[serde(default)]
    pub previous_questions: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: CategoryRef,
    #[serde(rename = "type")]
    pub category_type: Option<String>,
}

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i64),
}

impl QuizCategory {
    /// Returns `None` when the id is not a number.
    pub fn scope(&self) -> Option<QuizScope> {
        match self.id.to_id()? {
            ALL_CATEGORIES => Some(QuizScope::All),
            id => Some(QuizScope::Category(id)),
        }
    }
}
