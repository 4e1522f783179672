use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::trivia_dto::{CategoriesResponse, CategoryQuestionsResponse, PageQuery},
    error::Result,
    routes::path_id,
    AppState,
};

#[utoipa::path(
    get,
    path = "/categories",
    tag = "trivia",
    responses(
        (status = 200, description = "Every category keyed by id", body = CategoriesResponse),
        (status = 404, description = "Categories could not be read")
    )
)]
#[axum::debug_handler]
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let categories = state.category_service.list().await?;
    Ok(Json(CategoriesResponse::new(categories)))
}

#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    tag = "trivia",
    params(
        ("id" = i32, Path, description = "Category ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "One page of the category's questions", body = CategoryQuestionsResponse),
        (status = 404, description = "No questions on that page of the category")
    )
)]
#[axum::debug_handler]
pub async fn questions_by_category(
    State(state): State<AppState>,
    path: std::result::Result<Path<i32>, PathRejection>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let category = path_id(path)?;
    let listing = state
        .question_service
        .in_category(category, query.page())
        .await?;
    Ok(Json(CategoryQuestionsResponse::new(listing, category)))
}
