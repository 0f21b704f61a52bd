//! Trivia API boundary: response schemas, the source trait, and the HTTP client.

mod client;
mod schema;
mod source;

pub use client::HttpTriviaClient;
pub use schema::{CategoryRecord, CategoryRef, ClueRecord, RandomClue};
pub use source::TriviaSource;
