//! Shared harness for the HTTP tests: an in-memory store seeded with a small
//! trivia set, and a helper that drives the router without a socket.

// not every test binary uses every helper
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value as JsonValue;
use tower::ServiceExt;
use trivia_backend::{
    database::TriviaStore,
    error::{Error, Result},
    models::{
        category::Category,
        question::{NewQuestion, Question},
    },
    routes, AppState,
};

pub const CATEGORIES: [(i32, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// Category 6 (Sports) has no questions.
pub const QUESTIONS: [(&str, &str, i32, i32); 13] = [
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    ("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
];

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    questions: BTreeMap<i32, Question>,
    next_id: i32,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn seeded() -> Arc<Self> {
        let store = Self::default();
        {
            let mut tables = store.tables.lock().unwrap();
            tables.categories = CATEGORIES
                .iter()
                .map(|&(id, kind)| Category {
                    id,
                    kind: kind.to_string(),
                })
                .collect();
            for (idx, &(question, answer, category, difficulty)) in QUESTIONS.iter().enumerate() {
                let id = idx as i32 + 1;
                tables.questions.insert(
                    id,
                    Question {
                        id,
                        question: question.to_string(),
                        answer: answer.to_string(),
                        category,
                        difficulty,
                    },
                );
            }
            tables.next_id = QUESTIONS.len() as i32 + 1;
        }
        Arc::new(store)
    }

    /// Makes every subsequent store call fail like a lost connection.
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::Database(sqlx::Error::PoolClosed));
        }
        Ok(())
    }

    fn select(&self, keep: impl Fn(&Question) -> bool) -> Result<Vec<Question>> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.questions.values().filter(|q| keep(q)).cloned().collect())
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.check()?;
        Ok(self.tables.lock().unwrap().categories.clone())
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        self.select(|_| true)
    }

    async fn questions_in_category(&self, category: i32) -> Result<Vec<Question>> {
        self.select(|q| q.category == category)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let term = term.to_lowercase();
        self.select(|q| q.question.to_lowercase().contains(&term))
    }

    async fn find_question(&self, id: i32) -> Result<Option<Question>> {
        self.check()?;
        Ok(self.tables.lock().unwrap().questions.get(&id).cloned())
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        let id = tables.next_id;
        tables.next_id += 1;
        let created = Question {
            id,
            question: question.question,
            answer: question.answer,
            category: question.category,
            difficulty: question.difficulty,
        };
        tables.questions.insert(id, created.clone());
        Ok(created)
    }

    async fn delete_question(&self, id: i32) -> Result<u64> {
        self.check()?;
        let removed = self.tables.lock().unwrap().questions.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}

pub fn app_with(store: Arc<MemoryStore>) -> Router {
    routes::app(AppState::with_store(store))
}

pub fn seeded_app() -> Router {
    app_with(MemoryStore::seeded())
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn ids(body: &JsonValue) -> Vec<i64> {
    body["questions"]
        .as_array()
        .expect("questions array")
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}
