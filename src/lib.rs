pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;
pub mod utils;

use std::sync::Arc;

use crate::database::{PgTriviaStore, TriviaStore};
use crate::services::{
    category_service::CategoryService, question_service::QuestionService,
    quiz_service::QuizService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub category_service: CategoryService,
    pub question_service: QuestionService,
    pub quiz_service: QuizService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self::with_store(Arc::new(PgTriviaStore::new(pool)))
    }

    pub fn with_store(store: Arc<dyn TriviaStore>) -> Self {
        Self {
            category_service: CategoryService::new(store.clone()),
            question_service: QuestionService::new(store.clone()),
            quiz_service: QuizService::new(store),
        }
    }
}
