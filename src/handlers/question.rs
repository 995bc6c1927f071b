// src/handlers/question.rs

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    db::TriviaStore,
    error::AppError,
    models::{
        category::category_map,
        question::{CreateQuestionRequest, NewQuestion, SearchRequest},
    },
    utils::{
        body::OptionalJson,
        pagination::{PageParams, paginate},
    },
};

/// Lists one page of questions (ordered by id) together with all categories.
pub async fn list_questions(
    State(store): State<TriviaStore>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let questions = store.list_questions().await?;
    let categories = store.list_categories().await?;

    let current = paginate(&questions, params.page());
    if current.is_empty() {
        return Err(AppError::NotFound(format!("Page {} is empty", params.page())));
    }

    Ok(Json(serde_json::json!({
        "success": true,
        "questions": current,
        "total_questions": questions.len(),
        "categories": category_map(&categories),
        "current_category": null,
    })))
}

/// Deletes a question by ID and returns the first page of what remains.
pub async fn delete_question(
    State(store): State<TriviaStore>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(raw_id) = raw_id?;
    let id: i64 = raw_id
        .parse()
        .map_err(|_| AppError::NotFound(format!("No question '{}'", raw_id)))?;

    // Look up first so a missing row is a 404 rather than a failed delete.
    let question = store.find_question(id).await?;
    store.delete_question(question.id).await?;
    tracing::info!("Deleted question {}", id);

    let remaining = store.list_questions().await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "deleted": format!("question id = {} deleted", id),
        "questions": paginate(&remaining, 1),
        "total_questions": remaining.len(),
    })))
}

/// Creates a new question.
///
/// * No body at all is a 404.
/// * Present values are validated (422); absent ones are left for the store to reject.
pub async fn create_question(
    State(store): State<TriviaStore>,
    OptionalJson(body): OptionalJson<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let payload = body
        .filter(|p: &CreateQuestionRequest| !p.is_empty())
        .ok_or_else(|| AppError::NotFound("Missing question body".to_string()))?;

    payload.validate()?;

    let category = payload
        .category
        .as_ref()
        .map(|c| {
            c.to_id()
                .ok_or_else(|| AppError::Unprocessable(format!("Invalid category {:?}", c)))
        })
        .transpose()?;

    let id = store
        .insert_question(NewQuestion {
            question: payload.question,
            answer: payload.answer,
            category,
            difficulty: payload.difficulty,
        })
        .await?;

    let questions = store.list_questions().await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "created": id,
        "questions": paginate(&questions, 1),
        "total_questions": questions.len(),
    })))
}

/// Case-insensitive substring search over question text, paginated by `?page=N`.
pub async fn search_questions(
    State(store): State<TriviaStore>,
    params: Result<Query<PageParams>, QueryRejection>,
    OptionalJson(body): OptionalJson<SearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let request = body
        .ok_or_else(|| AppError::NotFound("Missing search body".to_string()))?;

    let term = request
        .search_term
        .ok_or_else(|| AppError::Unprocessable("Missing search_term".to_string()))?;

    let matches = store.search_questions(&term).await?;
    let current = paginate(&matches, params.page());

    if current.is_empty() {
        return Err(AppError::NotFound(format!("No questions match '{}'", term)));
    }

    Ok(Json(serde_json::json!({
        "success": true,
        "questions": current,
        "total_questions": matches.len(),
    })))
}
