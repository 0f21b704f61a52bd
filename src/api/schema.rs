//! Response shapes of the jservice-compatible trivia API.
//!
//! Only the fields the game reads are declared; everything else in the
//! payload is ignored by serde.

use serde::{Deserialize, Serialize};

/// Category reference embedded in a random clue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    /// Category identifier.
    pub id: u64,
    /// Category title, when the API includes it.
    #[serde(default)]
    pub title: Option<String>,
}

/// One element of the `GET /api/random` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomClue {
    /// Clue identifier.
    #[serde(default)]
    pub id: Option<u64>,
    /// Category the clue belongs to.
    pub category: CategoryRef,
}

/// One clue inside a `GET /api/category` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    /// Clue identifier.
    #[serde(default)]
    pub id: Option<u64>,
    /// Question text.
    pub question: String,
    /// Answer text.
    pub answer: String,
}

/// Body of `GET /api/category?id={id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Category identifier.
    #[serde(default)]
    pub id: Option<u64>,
    /// Category title.
    pub title: String,
    /// Clues in API order.
    pub clues: Vec<ClueRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_payload_ignores_extra_fields() {
        let body = r#"[{
            "id": 87,
            "answer": "Kepler",
            "question": "Laws of planetary motion",
            "value": 200,
            "category_id": 11,
            "category": {"id": 11, "title": "astronomy", "clues_count": 5}
        }]"#;
        let parsed: Vec<RandomClue> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed[0].category.id, 11);
        assert_eq!(parsed[0].category.title.as_deref(), Some("astronomy"));
    }

    #[test]
    fn test_category_payload_requires_question_and_answer() {
        let body = r#"{"id": 3, "title": "math", "clues": [{"id": 1, "question": "2+2"}]}"#;
        assert!(serde_json::from_str::<CategoryRecord>(body).is_err());
    }
}
