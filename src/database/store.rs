use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

/// Read/write access to the question and category tables.
///
/// Every listing is ordered by ascending id. Implementations report raw
/// failures; the services decide which error kind a caller sees.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn list_questions(&self) -> Result<Vec<Question>>;

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>>;

    /// Questions whose text contains `term`, ignoring case.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>>;

    async fn find_question(&self, id: i32) -> Result<Option<Question>>;

    async fn insert_question(&self, question: NewQuestion) -> Result<Question>;

    /// Returns the number of rows removed.
    async fn delete_question(&self, id: i32) -> Result<u64>;
}
