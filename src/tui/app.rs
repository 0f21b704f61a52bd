//! Application state and event handling.

use std::sync::Arc;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::Backend};
use tokio::sync::mpsc;
use tokio::time::Duration;
use tracing::{Instrument, debug, info, info_span, instrument};

use super::input::move_cursor;
use super::ui::{self, ClickTarget, ScreenLayout};
use crate::api::TriviaSource;
use crate::error::TriviaError;
use crate::game::{Board, CellCoord};
use crate::loader;
use crate::reveal::RevealOutcome;
use crate::session::{GameSession, SetupCompletion, SetupTicket};

/// Result of a background setup task.
#[derive(Debug)]
struct SetupDone {
    ticket: SetupTicket,
    result: Result<Board, TriviaError>,
}

/// Main application state.
pub struct App {
    session: GameSession,
    source: Arc<dyn TriviaSource>,
    cursor: CellCoord,
    tick: usize,
    should_quit: bool,
    layout: Option<ScreenLayout>,
    setup_tx: mpsc::UnboundedSender<SetupDone>,
    setup_rx: mpsc::UnboundedReceiver<SetupDone>,
}

impl App {
    /// Creates a new application that loads boards from `source`.
    pub fn new(source: Arc<dyn TriviaSource>) -> Self {
        let (setup_tx, setup_rx) = mpsc::unbounded_channel();
        Self {
            session: GameSession::new(),
            source,
            cursor: CellCoord::ORIGIN,
            tick: 0,
            should_quit: false,
            layout: None,
            setup_tx,
            setup_rx,
        }
    }

    /// Gets the game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> CellCoord {
        self.cursor
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop.
    #[instrument(skip_all)]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting trivia event loop");

        loop {
            self.drain_setups();

            terminal.draw(|f| {
                self.layout = Some(ScreenLayout::new(f.area()));
                ui::draw(f, &self.session, self.cursor, self.tick);
            })?;

            if self.should_quit {
                info!("User quit");
                return Ok(());
            }

            // Poll for input with short timeout to keep the spinner moving.
            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            self.tick = self.tick.wrapping_add(1);
            tokio::task::yield_now().await;
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Skip key release events (crossterm fires both press and release).
        if key.kind == KeyEventKind::Release {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('s') | KeyCode::Char('r') => self.press_button(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.activate(self.cursor);
            }
            code @ (KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down) => {
                self.cursor = move_cursor(self.cursor, code);
            }
            _ => {}
        }
    }

    /// Handles a mouse event against the last drawn layout.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(layout) = &self.layout else {
            return;
        };

        match layout.hit_test(mouse.column, mouse.row) {
            Some(ClickTarget::Button) => self.press_button(),
            Some(ClickTarget::Cell(coord)) => {
                self.cursor = coord;
                self.activate(coord);
            }
            None => {}
        }
    }

    /// Records the layout used for mouse hit-testing.
    pub fn set_layout(&mut self, layout: ScreenLayout) {
        self.layout = Some(layout);
    }

    /// Waits for the next background setup to finish and applies it.
    pub async fn next_setup_result(&mut self) -> Option<SetupCompletion> {
        let done = self.setup_rx.recv().await?;
        Some(self.session.complete_setup(done.ticket, done.result))
    }

    fn press_button(&mut self) {
        if !self.session.view().button().enabled {
            debug!("Button disabled, ignoring");
            return;
        }
        self.start_setup();
    }

    fn activate(&mut self, coord: CellCoord) -> RevealOutcome {
        let outcome = self.session.reveal(coord);
        debug!(%coord, %outcome, "Cell activated");
        outcome
    }

    /// Starts loading a new board in the background.
    fn start_setup(&mut self) {
        let ticket = self.session.begin_setup();
        let source = Arc::clone(&self.source);
        let tx = self.setup_tx.clone();

        let task = async move {
            let result = loader::load_board(source.as_ref()).await;
            if tx.send(SetupDone { ticket, result }).is_err() {
                debug!("App closed before setup finished");
            }
        };
        tokio::spawn(task.instrument(info_span!("setup", generation = ticket.generation())));
    }

    fn drain_setups(&mut self) {
        while let Ok(done) = self.setup_rx.try_recv() {
            let completion = self.session.complete_setup(done.ticket, done.result);
            debug!(%completion, "Setup finished");
        }
    }
}
