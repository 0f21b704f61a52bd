//! Shared fixtures for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use strictly_trivia::{CategoryRecord, ClueRecord, TriviaError, TriviaSource};

/// Builds a category record with `clue_count` clues named `{prefix}-q{i}` / `{prefix}-a{i}`.
pub fn category_record(id: u64, title: &str, clue_count: usize) -> CategoryRecord {
    CategoryRecord {
        id: Some(id),
        title: title.to_string(),
        clues: (0..clue_count)
            .map(|i| ClueRecord {
                id: Some(id * 100 + i as u64),
                question: format!("{}-q{}", title, i),
                answer: format!("{}-a{}", title, i),
            })
            .collect(),
    }
}

/// The "math" category: first clue is `2+2` / `4`.
pub fn math_record(id: u64) -> CategoryRecord {
    let mut record = category_record(id, "math", 5);
    record.clues[0].question = "2+2".to_string();
    record.clues[0].answer = "4".to_string();
    record
}

/// In-memory trivia source.
///
/// Random ids cycle through the stored categories in order.
pub struct FakeSource {
    categories: Vec<CategoryRecord>,
    next: AtomicUsize,
    random_calls: AtomicUsize,
    category_calls: AtomicUsize,
    fail_random_after: Option<usize>,
}

impl FakeSource {
    /// Source whose random endpoint yields ids `0..categories.len()` in a cycle.
    pub fn new(categories: Vec<CategoryRecord>) -> Self {
        Self {
            categories,
            next: AtomicUsize::new(0),
            random_calls: AtomicUsize::new(0),
            category_calls: AtomicUsize::new(0),
            fail_random_after: None,
        }
    }

    /// Six categories, the first one being "math".
    pub fn standard() -> Self {
        let mut categories = vec![math_record(0)];
        categories.extend((1..6).map(|i| category_record(i, &format!("cat{}", i), 5)));
        Self::new(categories)
    }

    /// Makes the random endpoint fail once it has answered `n` times.
    pub fn failing_random_after(mut self, n: usize) -> Self {
        self.fail_random_after = Some(n);
        self
    }

    pub fn random_calls(&self) -> usize {
        self.random_calls.load(Ordering::SeqCst)
    }

    pub fn category_calls(&self) -> usize {
        self.category_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TriviaSource for FakeSource {
    async fn random_category_id(&self) -> Result<u64, TriviaError> {
        let call = self.random_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(limit) = self.fail_random_after
            && call >= limit
        {
            return Err(TriviaError::network("connection refused"));
        }
        let index = self.next.fetch_add(1, Ordering::SeqCst) % self.categories.len();
        Ok(index as u64)
    }

    async fn category(&self, id: u64) -> Result<CategoryRecord, TriviaError> {
        self.category_calls.fetch_add(1, Ordering::SeqCst);
        self.categories
            .get(id as usize)
            .cloned()
            .ok_or_else(|| TriviaError::network(format!("no category {}", id)))
    }
}
