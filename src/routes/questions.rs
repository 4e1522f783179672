use std::num::IntErrorKind;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    response::{IntoResponse, Json, Response},
};
use serde_json::Value as JsonValue;

use crate::{
    dto::trivia_dto::{
        CreateQuestionPayload, PageQuery, QuestionCreatedResponse, QuestionDeletedResponse,
        QuestionListResponse, SearchPayload, SearchResponse,
    },
    error::{Error, Result},
    AppState,
};

/// Any integer names a question, even one no row could hold; only
/// non-numeric ids fail to name one.
fn question_id(raw: &str) -> Result<i32> {
    raw.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            Error::Unprocessable(format!("question {} does not exist", raw))
        }
        _ => Error::NotFound(format!("{} is not a question id", raw)),
    })
}

#[utoipa::path(
    get,
    path = "/questions",
    tag = "trivia",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of all questions", body = QuestionListResponse),
        (status = 404, description = "The page holds no questions")
    )
)]
#[axum::debug_handler]
pub async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let listing = state.question_service.list(query.page()).await?;
    let categories = state.category_service.category_map().await?;
    Ok(Json(QuestionListResponse::new(listing, categories)))
}

/// Searches when the body carries a non-empty `searchTerm`, otherwise treats
/// the body as a new question.
#[utoipa::path(
    post,
    path = "/questions",
    tag = "trivia",
    params(PageQuery),
    request_body = SearchPayload,
    responses(
        (status = 200, description = "Matching questions, possibly none", body = SearchResponse),
        (status = 422, description = "The search or creation failed")
    )
)]
#[axum::debug_handler]
pub async fn search_or_create(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    body: std::result::Result<Json<JsonValue>, JsonRejection>,
) -> Result<Response> {
    let Json(body) = body.map_err(|e| Error::Unprocessable(e.body_text()))?;
    let search: SearchPayload =
        serde_json::from_value(body.clone()).map_err(|e| Error::from(e).into_unprocessable())?;

    if let Some(term) = search.term() {
        let listing = state.question_service.search(term, query.page()).await?;
        return Ok(Json(SearchResponse::from(listing)).into_response());
    }

    let payload: CreateQuestionPayload =
        serde_json::from_value(body).map_err(|e| Error::from(e).into_unprocessable())?;
    let (created, listing) = state.question_service.create(payload, query.page()).await?;
    Ok(Json(QuestionCreatedResponse::new(created.id, listing)).into_response())
}

#[utoipa::path(
    post,
    path = "/questions/add",
    tag = "trivia",
    params(PageQuery),
    request_body = CreateQuestionPayload,
    responses(
        (status = 200, description = "Question created", body = QuestionCreatedResponse),
        (status = 422, description = "Invalid question or insert failure")
    )
)]
#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    payload: std::result::Result<Json<CreateQuestionPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload.map_err(|e| Error::Unprocessable(e.body_text()))?;
    let (created, listing) = state.question_service.create(payload, query.page()).await?;
    Ok(Json(QuestionCreatedResponse::new(created.id, listing)))
}

#[utoipa::path(
    delete,
    path = "/questions/{id}",
    tag = "trivia",
    params(
        ("id" = i32, Path, description = "Question ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Question deleted", body = QuestionDeletedResponse),
        (status = 404, description = "The id is not an integer"),
        (status = 422, description = "Missing question or delete failure")
    )
)]
#[axum::debug_handler]
pub async fn delete_question(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let id = question_id(&raw_id)?;
    let (deleted, listing) = state.question_service.delete(id, query.page()).await?;
    Ok(Json(QuestionDeletedResponse::new(deleted, listing)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn question_ids_outside_i32_are_unprocessable() {
        assert_eq!(question_id("42").unwrap(), 42);
        assert_eq!(
            question_id("3000000000").unwrap_err().status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            question_id("-3000000000").unwrap_err().status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            question_id("five").unwrap_err().status_code(),
            StatusCode::NOT_FOUND
        );
    }
}
