//! Strictly Trivia library - a type-safe trivia board game
//!
//! Six random categories are fetched from a jservice-compatible trivia API
//! and laid out as a 6×5 board. Activating a cell reveals its question, a
//! second activation reveals the answer.
//!
//! # Architecture
//!
//! - **API**: response schemas, the [`TriviaSource`] seam, and the HTTP client
//! - **Loader**: random category ids, then each category in turn
//! - **Grid**: render model with header cells and coordinate-tagged body cells
//! - **Reveal**: the per-clue `Hidden → ShowingQuestion → ShowingAnswer` machine
//! - **Session**: owns board, grid and view state; discards stale setups
//! - **TUI**: ratatui frontend driving a session
//!
//! # Example
//!
//! ```no_run
//! use strictly_trivia::{CellCoord, GameSession, HttpTriviaClient};
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = HttpTriviaClient::new("https://jservice.io", Duration::from_secs(10))?;
//! let mut session = GameSession::new();
//! session.setup(&client).await;
//!
//! if let Some(coord) = CellCoord::new(0, 0) {
//!     session.reveal(coord);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod config;
mod error;
mod game;
mod grid;
mod loader;
mod reveal;
mod session;
mod view;

pub mod tui;

// Crate-level exports - API boundary
pub use api::{CategoryRecord, CategoryRef, ClueRecord, HttpTriviaClient, RandomClue, TriviaSource};

// Crate-level exports - Configuration
pub use config::{API_URL_ENV, TriviaConfig};

// Crate-level exports - Errors
pub use error::{ConfigError, TriviaError, TriviaErrorKind};

// Crate-level exports - Game model
pub use game::{Board, CLUES_PER_CATEGORY, Category, CellCoord, Clue, NUM_CATEGORIES, RevealState};

// Crate-level exports - Loading
pub use loader::{category_from_record, fetch_category, load_board, load_category_ids};

// Crate-level exports - Rendering and reveal
pub use grid::{BodyCell, CellContent, CellStyle, Grid, HeaderCell, UNREVEALED_MARKER};
pub use reveal::{RevealOutcome, reveal};

// Crate-level exports - Session and view
pub use session::{GameSession, SetupCompletion, SetupTicket};
pub use view::{ButtonState, LOADING_LABEL, RESTART_LABEL, START_LABEL, ViewState};
