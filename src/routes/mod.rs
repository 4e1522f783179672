pub mod categories;
pub mod docs;
pub mod health;
pub mod questions;
pub mod quizzes;

use axum::{
    extract::{rejection::PathRejection, Path},
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    error::{Error, Result},
    middleware::cors::api_cors,
    AppState,
};

/// The complete HTTP surface, ready to serve.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/openapi.json", get(docs::openapi_json))
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/:id/questions",
            get(categories::questions_by_category),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::search_or_create),
        )
        .route("/questions/add", post(questions::create_question))
        .route("/questions/:id", delete(questions::delete_question))
        .route("/quizzes", post(quizzes::play_quiz))
        .fallback(unknown_route)
        .with_state(state)
        .layer(api_cors())
        .layer(TraceLayer::new_for_http())
}

async fn unknown_route() -> Error {
    Error::NotFound("no such route".to_string())
}

/// Integer path ids; anything else does not name a resource.
pub(crate) fn path_id(path: std::result::Result<Path<i32>, PathRejection>) -> Result<i32> {
    path.map(|Path(id)| id)
        .map_err(|e| Error::NotFound(e.body_text()))
}
