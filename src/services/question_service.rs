use std::sync::Arc;

use crate::database::store::TriviaStore;
use crate::dto::trivia_dto::CreateQuestionPayload;
use crate::error::{Error, Result};
use crate::models::question::{NewQuestion, Question};
use crate::utils::pagination::paginate;
use crate::utils::validation::{non_blank, validate_payload};

#[derive(Clone)]
pub struct QuestionService {
    store: Arc<dyn TriviaStore>,
}

/// One page of an ordered question set plus the size of the whole set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

impl QuestionPage {
    pub fn of(questions: Vec<Question>, page: i64) -> Self {
        let total_questions = questions.len() as i64;
        Self {
            questions: paginate(questions, page),
            total_questions,
        }
    }
}

impl QuestionService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// All questions by id. A page with nothing on it is not found, even for
    /// page 2 of a one-page set.
    pub async fn list(&self, page: i64) -> Result<QuestionPage> {
        let questions = self.store.list_questions().await?;
        let listing = QuestionPage::of(questions, page);
        if listing.questions.is_empty() {
            return Err(Error::NotFound(format!("page {} holds no questions", page)));
        }
        Ok(listing)
    }

    /// Case-insensitive substring search. No matches is a valid, empty result.
    pub async fn search(&self, term: &str, page: i64) -> Result<QuestionPage> {
        let matches = self.store.search_questions(term).await.map_err(|e| {
            tracing::warn!(error = %e, term, "question search failed");
            e.into_unprocessable()
        })?;
        Ok(QuestionPage::of(matches, page))
    }

    /// Questions of one category; an empty page is not found.
    pub async fn in_category(&self, category: i32, page: i64) -> Result<QuestionPage> {
        let questions = self.store.questions_in_category(category).await?;
        let listing = QuestionPage::of(questions, page);
        if listing.questions.is_empty() {
            return Err(Error::NotFound(format!(
                "category {} has no questions on page {}",
                category, page
            )));
        }
        Ok(listing)
    }

    pub async fn create(
        &self,
        payload: CreateQuestionPayload,
        page: i64,
    ) -> Result<(Question, QuestionPage)> {
        self.try_create(payload, page).await.map_err(|e| {
            tracing::warn!(error = %e, "failed to create question");
            e.into_unprocessable()
        })
    }

    async fn try_create(
        &self,
        payload: CreateQuestionPayload,
        page: i64,
    ) -> Result<(Question, QuestionPage)> {
        validate_payload(&payload)?;
        let question = NewQuestion {
            question: non_blank("question", payload.question)?,
            answer: non_blank("answer", payload.answer)?,
            category: payload.category,
            difficulty: payload.difficulty,
        };

        let created = self.store.insert_question(question).await?;
        tracing::info!(id = created.id, category = created.category, "question created");

        let questions = self.store.list_questions().await?;
        Ok((created, QuestionPage::of(questions, page)))
    }

    /// Removes a question. A missing id fails the same way as any other
    /// deletion error.
    pub async fn delete(&self, id: i32, page: i64) -> Result<(i32, QuestionPage)> {
        self.try_delete(id, page).await.map_err(|e| {
            tracing::warn!(error = %e, id, "failed to delete question");
            e.into_unprocessable()
        })
    }

    async fn try_delete(&self, id: i32, page: i64) -> Result<(i32, QuestionPage)> {
        let question = self
            .store
            .find_question(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("question {} does not exist", id)))?;

        if self.store.delete_question(question.id).await? == 0 {
            return Err(Error::NotFound(format!("question {} was already removed", id)));
        }
        tracing::info!(id, "question deleted");

        let questions = self.store.list_questions().await?;
        Ok((question.id, QuestionPage::of(questions, page)))
    }
}
