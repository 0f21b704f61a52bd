//! Game session: owns the board, its grid, and the view state.
//!
//! Setup is split into [`GameSession::begin_setup`] and
//! [`GameSession::complete_setup`] so the network work can run elsewhere.
//! Each setup gets a [`SetupTicket`]; only the ticket of the most recent
//! setup is accepted on completion, older ones are discarded.

use crate::api::TriviaSource;
use crate::error::TriviaError;
use crate::game::{Board, CellCoord};
use crate::grid::Grid;
use crate::loader;
use crate::reveal::{self, RevealOutcome};
use crate::view::ViewState;
use tracing::{info, instrument, warn};

/// Proof that a setup was started, tagged with its generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SetupTicket {
    generation: u64,
}

impl SetupTicket {
    /// Generation this ticket belongs to.
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// What happened to a setup result handed to [`GameSession::complete_setup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum SetupCompletion {
    /// New board installed.
    Applied,
    /// Setup failed; the view shows the error and allows a retry.
    Failed,
    /// A newer setup has started since; result dropped.
    Stale,
}

/// One player's game.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    board: Option<Board>,
    grid: Option<Grid>,
    view: ViewState,
    generation: u64,
}

impl GameSession {
    /// Creates a session with no board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new setup: clears the board and shows the loading view.
    ///
    /// Any setup still in flight becomes stale.
    #[instrument(skip(self), fields(previous = self.generation))]
    pub fn begin_setup(&mut self) -> SetupTicket {
        self.generation += 1;
        self.board = None;
        self.grid = None;
        self.view.show_loading();
        info!(generation = self.generation, "Setup started");
        SetupTicket {
            generation: self.generation,
        }
    }

    /// Hands the result of a setup back to the session.
    #[instrument(skip(self, result), fields(generation = ticket.generation, current = self.generation))]
    pub fn complete_setup(
        &mut self,
        ticket: SetupTicket,
        result: Result<Board, TriviaError>,
    ) -> SetupCompletion {
        if ticket.generation != self.generation {
            warn!("Discarding stale setup result");
            return SetupCompletion::Stale;
        }

        match result {
            Ok(board) => {
                self.grid = Some(Grid::build(&board));
                self.board = Some(board);
                self.view.hide_loading(None);
                info!("Board installed");
                SetupCompletion::Applied
            }
            Err(e) => {
                warn!(error = %e, "Setup failed");
                self.view.hide_loading(Some(e.summary()));
                SetupCompletion::Failed
            }
        }
    }

    /// Runs a whole setup against `source` in place.
    #[instrument(skip(self, source))]
    pub async fn setup(&mut self, source: &dyn TriviaSource) -> SetupCompletion {
        let ticket = self.begin_setup();
        let result = loader::load_board(source).await;
        self.complete_setup(ticket, result)
    }

    /// Activates the cell at `coord`. Ignored while loading or with no board.
    #[instrument(skip(self))]
    pub fn reveal(&mut self, coord: CellCoord) -> RevealOutcome {
        if self.view.is_loading() {
            return RevealOutcome::Ignored;
        }
        match (self.board.as_mut(), self.grid.as_mut()) {
            (Some(board), Some(grid)) => reveal::reveal(board, grid, coord),
            _ => RevealOutcome::Ignored,
        }
    }

    /// Advances every cell until its answer shows.
    pub fn reveal_all(&mut self) {
        for coord in CellCoord::all() {
            while self.reveal(coord) != RevealOutcome::Ignored {}
        }
    }

    /// Board currently in play.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Grid for the board currently in play.
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Loading indicator and button state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Generation of the most recent setup (0 before the first).
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
