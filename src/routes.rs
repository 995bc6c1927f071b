// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    routing::{delete, get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{self, category, question, quiz},
    state::AppState,
};

/// Assembles the application router.
///
/// * Unknown paths and unsupported verbs answer with the JSON error envelope.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (store handle).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/categories", get(category::list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(category::questions_by_category),
        )
        .route(
            "/questions",
            get(question::list_questions).post(question::create_question),
        )
        .route("/questions/search", post(question::search_questions))
        .route("/questions/{id}", delete(question::delete_question))
        .route("/quizzes", post(quiz::next_question))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
