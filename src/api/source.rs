//! Abstraction over where trivia data comes from.

use super::schema::CategoryRecord;
use crate::error::TriviaError;
use async_trait::async_trait;

/// A source of trivia categories.
///
/// Implemented by [`HttpTriviaClient`](super::HttpTriviaClient) and by
/// in-memory fakes in tests.
#[async_trait]
pub trait TriviaSource: Send + Sync {
    /// Returns the identifier of one randomly chosen category.
    async fn random_category_id(&self) -> Result<u64, TriviaError>;

    /// Returns the full category record for `id`.
    async fn category(&self, id: u64) -> Result<CategoryRecord, TriviaError>;
}
