// src/handlers/quiz.rs

use axum::{Json, extract::State, response::IntoResponse};
use rand::Rng;

use crate::{
    db::TriviaStore,
    error::AppError,
    models::{question::Question, quiz::QuizRequest},
    utils::body::OptionalJson,
};

/// Serves the next quiz question.
///
/// Picks uniformly at random among the questions of `quiz_category` that are not in
/// `previous_questions`. When none are left the response carries `"question": null`.
pub async fn next_question(
    State(store): State<TriviaStore>,
    OptionalJson(body): OptionalJson<QuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let request = body
        .ok_or_else(|| AppError::Unprocessable("Missing quiz body".to_string()))?;

    let category = request
        .quiz_category
        .ok_or_else(|| AppError::Unprocessable("Missing quiz_category".to_string()))?;

    let scope = category
        .scope()
        .ok_or_else(|| AppError::Unprocessable(format!("Invalid quiz category {:?}", category.id)))?;

    let candidates = store
        .quiz_candidates(scope, &request.previous_questions)
        .await?;

    let question = pick_random(candidates);
    if question.is_none() {
        tracing::debug!("Quiz exhausted for {:?}", scope);
    }

    Ok(Json(serde_json::json!({
        "success": true,
        "question": question,
    })))
}

fn pick_random(mut candidates: Vec<Question>) -> Option<Question> {
    if candidates.is_empty() {
        return None;
    }

    let index = rand::rng().random_range(0..candidates.len());
    Some(candidates.swap_remove(index))
}
