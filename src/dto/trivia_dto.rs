use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::dto::deserializers::lenient_i32;
use crate::models::question::Question;
use crate::services::question_service::QuestionPage;
use crate::utils::pagination::parse_page;

/// Category id to display label.
pub type CategoryMap = BTreeMap<i32, String>;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number; non-integers fall back to 1.
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        parse_page(self.page.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionPayload {
    #[validate(length(min = 1))]
    pub question: String,
    #[validate(length(min = 1))]
    pub answer: String,
    #[serde(deserialize_with = "lenient_i32")]
    #[validate(range(min = 1))]
    pub category: i32,
    #[serde(deserialize_with = "lenient_i32")]
    #[validate(range(min = 1, max = 5))]
    pub difficulty: i32,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SearchPayload {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

impl SearchPayload {
    /// The term to search for, if the body asks for a search at all.
    pub fn term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|term| !term.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizCategoryPayload {
    /// 0 selects every category.
    #[serde(deserialize_with = "lenient_i32")]
    pub id: i32,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizPayload {
    pub previous_questions: Vec<i32>,
    pub quiz_category: QuizCategoryPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i32, String>,
}

impl CategoriesResponse {
    pub fn new(categories: CategoryMap) -> Self {
        Self {
            success: true,
            categories,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: BTreeMap<i32, String>,
}

impl QuestionListResponse {
    pub fn new(page: QuestionPage, categories: CategoryMap) -> Self {
        Self {
            success: true,
            questions: page.questions,
            total_questions: page.total_questions,
            categories,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

impl From<QuestionPage> for SearchResponse {
    fn from(page: QuestionPage) -> Self {
        Self {
            success: true,
            questions: page.questions,
            total_questions: page.total_questions,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: i32,
}

impl CategoryQuestionsResponse {
    pub fn new(page: QuestionPage, current_category: i32) -> Self {
        Self {
            success: true,
            questions: page.questions,
            total_questions: page.total_questions,
            current_category,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionCreatedResponse {
    pub success: bool,
    pub created: i32,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

impl QuestionCreatedResponse {
    pub fn new(created: i32, page: QuestionPage) -> Self {
        Self {
            success: true,
            created,
            questions: page.questions,
            total_questions: page.total_questions,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionDeletedResponse {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

impl QuestionDeletedResponse {
    pub fn new(deleted: i32, page: QuestionPage) -> Self {
        Self {
            success: true,
            deleted,
            questions: page.questions,
            total_questions: page.total_questions,
        }
    }
}

/// Either the next question of a running quiz or the end marker.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum QuizResponse {
    Next { success: bool, question: Question },
    End { end: bool },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quiz_end_serializes_without_question() {
        let body = serde_json::to_value(QuizResponse::End { end: true }).unwrap();
        assert_eq!(body, json!({ "end": true }));
    }

    #[test]
    fn quiz_payload_accepts_string_category_id() {
        let payload: QuizPayload = serde_json::from_value(json!({
            "previous_questions": [],
            "quiz_category": { "type": "Science", "id": "1" }
        }))
        .unwrap();
        assert_eq!(payload.quiz_category.id, 1);
        assert!(payload.previous_questions.is_empty());
    }

    #[test]
    fn quiz_payload_requires_both_fields() {
        assert!(serde_json::from_value::<QuizPayload>(json!({ "previous_questions": [] })).is_err());
        assert!(
            serde_json::from_value::<QuizPayload>(json!({ "quiz_category": { "id": 0 } })).is_err()
        );
    }

    #[test]
    fn empty_search_term_is_not_a_search() {
        let payload: SearchPayload = serde_json::from_value(json!({ "searchTerm": "" })).unwrap();
        assert_eq!(payload.term(), None);
        let payload: SearchPayload = serde_json::from_value(json!({ "searchTerm": "What" })).unwrap();
        assert_eq!(payload.term(), Some("What"));
    }

    #[test]
    fn create_payload_validates_ranges() {
        let payload: CreateQuestionPayload = serde_json::from_value(json!({
            "question": "is the earth round?",
            "answer": "yes",
            "category": "1",
            "difficulty": 9
        }))
        .unwrap();
        assert_eq!(payload.category, 1);
        assert!(payload.validate().is_err());
    }

    #[test]
    fn categories_serialize_with_string_keys() {
        let mut categories = CategoryMap::new();
        categories.insert(1, "Science".into());
        let body = serde_json::to_value(CategoriesResponse::new(categories)).unwrap();
        assert_eq!(body, json!({ "success": true, "categories": { "1": "Science" } }));
    }
}
