use std::sync::Arc;

use crate::database::store::TriviaStore;
use crate::dto::trivia_dto::CategoryMap;
use crate::error::Result;

#[derive(Clone)]
pub struct CategoryService {
    store: Arc<dyn TriviaStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Every category keyed by id. Store failures pass through unchanged.
    pub async fn category_map(&self) -> Result<CategoryMap> {
        let categories = self.store.list_categories().await?;
        Ok(categories.into_iter().map(|c| (c.id, c.kind)).collect())
    }

    /// The category listing endpoint reports any read failure as not found.
    pub async fn list(&self) -> Result<CategoryMap> {
        self.category_map().await.map_err(|e| {
            tracing::warn!(error = %e, "failed to read categories");
            e.into_not_found()
        })
    }
}
