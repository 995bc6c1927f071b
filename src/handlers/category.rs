// src/handlers/category.rs

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    response::IntoResponse,
};

use crate::{
    db::TriviaStore,
    error::AppError,
    models::category::category_map,
    utils::pagination::{PageParams, paginate},
};

/// Lists every category as an `{id: type}` map.
pub async fn list_categories(State(store): State<TriviaStore>) -> Result<impl IntoResponse, AppError> {
    let categories = store.list_categories().await?;

    if categories.is_empty() {
        return Err(AppError::NotFound("No categories".to_string()));
    }

    Ok(Json(serde_json::json!({
        "success": true,
        "categories": category_map(&categories),
        "total_categories": categories.len(),
    })))
}

/// Lists one page of the questions in a category.
///
/// * A category id that is not an integer is unprocessable.
/// * An unknown category simply has no questions, which is a 404.
pub async fn questions_by_category(
    State(store): State<TriviaStore>,
    raw_id: Result<Path<String>, PathRejection>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(raw_id) = raw_id?;
    let Query(params) = params?;
    let category_id: i64 = raw_id
        .parse()
        .map_err(|_| AppError::Unprocessable(format!("Invalid category id '{}'", raw_id)))?;

    let questions = store.questions_in_category(category_id).await?;
    let current = paginate(&questions, params.page());

    if current.is_empty() {
        return Err(AppError::NotFound(format!(
            "No questions in category {} on page {}",
            category_id,
            params.page()
        )));
    }

    Ok(Json(serde_json::json!({
        "success": true,
        "questions": current,
        "total_questions": questions.len(),
        "current_category": category_id,
    })))
}
