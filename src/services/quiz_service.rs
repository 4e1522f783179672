use std::collections::HashSet;
use std::sync::Arc;

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::database::store::TriviaStore;
use crate::error::Result;
use crate::models::question::Question;

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    All,
    Only(i32),
}

impl From<i32> for QuizCategory {
    fn from(id: i32) -> Self {
        if id == 0 {
            QuizCategory::All
        } else {
            QuizCategory::Only(id)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    Next(Question),
    Finished,
}

/// Picks the next question of a quiz.
///
/// The quiz is finished once the client has seen as many questions as the
/// pool holds, or when nothing in the pool is left unseen. Otherwise every
/// unseen question is equally likely.
pub fn select_question<R: Rng + ?Sized>(
    pool: Vec<Question>,
    previous: &[i32],
    rng: &mut R,
) -> QuizOutcome {
    if previous.len() == pool.len() {
        return QuizOutcome::Finished;
    }

    let seen: HashSet<i32> = previous.iter().copied().collect();
    pool.into_iter()
        .filter(|q| !seen.contains(&q.id))
        .choose(rng)
        .map_or(QuizOutcome::Finished, QuizOutcome::Next)
}

#[derive(Clone)]
pub struct QuizService {
    store: Arc<dyn TriviaStore>,
}

impl QuizService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    pub async fn next_question(
        &self,
        previous: &[i32],
        category: QuizCategory,
    ) -> Result<QuizOutcome> {
        let pool = match category {
            QuizCategory::All => self.store.list_questions().await,
            QuizCategory::Only(id) => self.store.questions_in_category(id).await,
        }
        .map_err(|e| {
            tracing::warn!(error = %e, ?category, "failed to load quiz questions");
            e.into_bad_request()
        })?;

        let outcome = select_question(pool, previous, &mut rand::thread_rng());
        if outcome == QuizOutcome::Finished {
            tracing::debug!(?category, seen = previous.len(), "quiz finished");
        }
        Ok(outcome)
    }
}
