use axum::Json;
use utoipa::OpenApi;

use crate::dto::trivia_dto::{
    CategoriesResponse, CategoryQuestionsResponse, CreateQuestionPayload, QuestionCreatedResponse,
    QuestionDeletedResponse, QuestionListResponse, QuizCategoryPayload, QuizPayload, QuizResponse,
    SearchPayload, SearchResponse,
};
use crate::models::{category::Category, question::Question};
use crate::routes::{categories, health, questions, quizzes};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        categories::list_categories,
        categories::questions_by_category,
        questions::list_questions,
        questions::search_or_create,
        questions::create_question,
        questions::delete_question,
        quizzes::play_quiz,
    ),
    components(schemas(
        Question,
        Category,
        CategoriesResponse,
        CategoryQuestionsResponse,
        CreateQuestionPayload,
        QuestionCreatedResponse,
        QuestionDeletedResponse,
        QuestionListResponse,
        QuizCategoryPayload,
        QuizPayload,
        QuizResponse,
        SearchPayload,
        SearchResponse,
    )),
    tags(
        (name = "trivia", description = "Questions, categories and quizzes"),
        (name = "system", description = "Service health")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
