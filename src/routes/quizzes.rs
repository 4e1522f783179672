use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::trivia_dto::{QuizPayload, QuizResponse},
    error::{Error, Result},
    services::quiz_service::{QuizCategory, QuizOutcome},
    AppState,
};

#[utoipa::path(
    post,
    path = "/quizzes",
    tag = "trivia",
    request_body = QuizPayload,
    responses(
        (status = 200, description = "The next unseen question, or the end marker", body = QuizResponse),
        (status = 400, description = "Missing or malformed quiz payload")
    )
)]
#[axum::debug_handler]
pub async fn play_quiz(
    State(state): State<AppState>,
    payload: std::result::Result<Json<QuizPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload.map_err(|e| Error::BadRequest(e.body_text()))?;
    let category = QuizCategory::from(payload.quiz_category.id);

    let body = match state
        .quiz_service
        .next_question(&payload.previous_questions, category)
        .await?
    {
        QuizOutcome::Next(question) => QuizResponse::Next {
            success: true,
            question,
        },
        QuizOutcome::Finished => QuizResponse::End { end: true },
    };
    Ok(Json(body))
}
