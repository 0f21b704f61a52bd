//! Loading categories from a [`TriviaSource`] into a [`Board`].

use crate::api::{CategoryRecord, TriviaSource};
use crate::error::TriviaError;
use crate::game::{Board, CLUES_PER_CATEGORY, Category, Clue, NUM_CATEGORIES};
use tracing::{debug, info, instrument};

/// Requests `count` random category ids, one request at a time.
///
/// Ids are not deduplicated. The first failing request aborts the load.
#[instrument(skip(source))]
pub async fn load_category_ids(
    source: &dyn TriviaSource,
    count: usize,
) -> Result<Vec<u64>, TriviaError> {
    let mut ids = Vec::with_capacity(count);
    for index in 0..count {
        let id = source.random_category_id().await?;
        debug!(index, category_id = id, "Loaded category id");
        ids.push(id);
    }
    Ok(ids)
}

/// Fetches one category and keeps its title and first five clues.
#[instrument(skip(source))]
pub async fn fetch_category(source: &dyn TriviaSource, id: u64) -> Result<Category, TriviaError> {
    let record = source.category(id).await?;
    category_from_record(id, record)
}

/// Converts an API record into a [`Category`] with hidden clues.
pub fn category_from_record(id: u64, record: CategoryRecord) -> Result<Category, TriviaError> {
    let available = record.clues.len();
    let clues: Vec<Clue> = record
        .clues
        .into_iter()
        .take(CLUES_PER_CATEGORY)
        .map(|clue| Clue::new(clue.question, clue.answer))
        .collect();

    let clues: [Clue; CLUES_PER_CATEGORY] = clues.try_into().map_err(|_| {
        TriviaError::malformed(format!(
            "category {} has {} clues, need {}",
            id, available, CLUES_PER_CATEGORY
        ))
    })?;

    Ok(Category::new(record.title, clues))
}

/// Loads a full board: six random ids, then each category in turn.
#[instrument(skip(source))]
pub async fn load_board(source: &dyn TriviaSource) -> Result<Board, TriviaError> {
    info!("Loading board");
    let ids = load_category_ids(source, NUM_CATEGORIES).await?;

    let mut categories = Vec::with_capacity(NUM_CATEGORIES);
    for id in ids {
        let category = fetch_category(source, id).await?;
        debug!(category_id = id, title = %category.title(), "Fetched category");
        categories.push(category);
    }

    let categories: [Category; NUM_CATEGORIES] = categories
        .try_into()
        .map_err(|_| TriviaError::malformed("wrong number of categories"))?;

    info!("Board loaded");
    Ok(Board::new(categories))
}
