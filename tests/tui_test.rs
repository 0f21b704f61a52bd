//! Tests for the terminal frontend: rendering and input handling.

mod common;

use common::FakeSource;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use std::sync::Arc;
use strictly_trivia::tui::{App, ScreenLayout, draw};
use strictly_trivia::{
    CellContent, CellCoord, GameSession, LOADING_LABEL, RESTART_LABEL, SetupCompletion, START_LABEL,
};

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

fn render(session: &GameSession) -> String {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal
        .draw(|f| draw(f, session, CellCoord::ORIGIN, 0))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_idle_screen_shows_start_button() {
    let screen = render(&GameSession::new());
    assert!(screen.contains(START_LABEL));
}

#[tokio::test]
async fn test_board_renders_titles_and_revealed_text() {
    let mut session = GameSession::new();
    session.setup(&FakeSource::standard()).await;

    let screen = render(&session);
    assert!(screen.contains("MATH"));
    assert!(screen.contains("CAT5"));
    assert!(screen.contains(RESTART_LABEL));
    assert!(!screen.contains("2+2"));

    session.reveal(CellCoord::ORIGIN);
    assert!(render(&session).contains("2+2"));
}

#[tokio::test]
async fn test_keyboard_start_and_reveal() {
    let mut app = App::new(Arc::new(FakeSource::standard()));

    app.handle_key(key(KeyCode::Char('s')));
    assert!(app.session().view().is_loading());
    assert_eq!(app.session().view().button().label, LOADING_LABEL);

    // Button is disabled while loading.
    app.handle_key(key(KeyCode::Char('r')));
    assert_eq!(app.session().generation(), 1);

    assert_eq!(app.next_setup_result().await, Some(SetupCompletion::Applied));

    app.handle_key(key(KeyCode::Enter));
    let grid = app.session().grid().unwrap();
    assert_eq!(grid.cell(CellCoord::ORIGIN).content, CellContent::Question("2+2".to_string()));

    app.handle_key(key(KeyCode::Right));
    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.cursor(), CellCoord::new(1, 1).unwrap());

    app.handle_key(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_mouse_click_reveals_cell() {
    let mut app = App::new(Arc::new(FakeSource::standard()));
    let layout = ScreenLayout::new(Rect::new(0, 0, WIDTH, HEIGHT));
    app.set_layout(layout.clone());

    let button = layout.button;
    app.handle_mouse(left_click(button.x + 1, button.y + 1));
    assert!(app.session().view().is_loading());
    assert_eq!(app.next_setup_result().await, Some(SetupCompletion::Applied));

    let target = CellCoord::new(2, 4).unwrap();
    let rect = layout.cells[2][4];
    let (x, y) = (rect.x + rect.width / 2, rect.y + rect.height / 2);

    app.handle_mouse(left_click(x, y));
    app.handle_mouse(left_click(x, y));
    app.handle_mouse(left_click(x, y));

    assert_eq!(app.cursor(), target);
    let content = &app.session().grid().unwrap().cell(target).content;
    assert_eq!(content, &CellContent::Answer("CAT4-A2".to_string()));
}

#[tokio::test]
async fn test_failed_setup_can_be_restarted() {
    let mut app = App::new(Arc::new(FakeSource::standard().failing_random_after(0)));

    app.handle_key(key(KeyCode::Char('s')));
    assert_eq!(app.next_setup_result().await, Some(SetupCompletion::Failed));
    assert!(app.session().view().button().enabled);
    assert!(app.session().view().error().is_some());

    app.handle_key(key(KeyCode::Char('r')));
    assert_eq!(app.session().generation(), 2);
    assert!(app.session().view().is_loading());
}
