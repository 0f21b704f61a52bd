//! Stateless UI rendering for the trivia board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::game::{CLUES_PER_CATEGORY, CellCoord, NUM_CATEGORIES};
use crate::grid::{BodyCell, CellStyle, Grid};
use crate::session::GameSession;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Screen regions, shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Start/restart button.
    pub button: Rect,
    /// Header cells, one per column.
    pub headers: Vec<Rect>,
    /// Whole body region below the headers.
    pub body: Rect,
    /// Body cells, `cells[row][column]`.
    pub cells: Vec<Vec<Rect>>,
    /// Status line.
    pub status: Rect,
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The start/restart button.
    Button,
    /// A body cell.
    Cell(CellCoord),
}

impl ScreenLayout {
    /// Splits `area` into the game's regions.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(3), // Button
                Constraint::Length(3), // Headers
                Constraint::Min(10),   // Body
                Constraint::Length(3), // Status
            ])
            .split(area);

        let headers = split_columns(chunks[2]);

        let body_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, CLUES_PER_CATEGORY as u32); CLUES_PER_CATEGORY])
            .split(chunks[3]);
        let cells = body_rows.iter().map(|row| split_columns(*row)).collect();

        let button = center_rect(chunks[1], 22, 3);

        Self {
            title: chunks[0],
            button,
            headers,
            body: chunks[3],
            cells,
            status: chunks[4],
        }
    }

    /// Finds what lies under the terminal position `(x, y)`.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickTarget> {
        if contains(self.button, x, y) {
            return Some(ClickTarget::Button);
        }
        for (row, cells) in self.cells.iter().enumerate() {
            for (column, rect) in cells.iter().enumerate() {
                if contains(*rect, x, y) {
                    return CellCoord::new(row, column).map(ClickTarget::Cell);
                }
            }
        }
        None
    }
}

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, session: &GameSession, cursor: CellCoord, tick: usize) {
    let layout = ScreenLayout::new(frame.area());

    let title = Paragraph::new("Strictly Trivia - Jeopardy")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    draw_button(frame, &layout, session, tick);

    match session.grid() {
        Some(grid) => draw_grid(frame, &layout, grid, cursor),
        None => draw_placeholder(frame, &layout, session, tick),
    }

    draw_status(frame, layout.status, session);
}

fn draw_button(frame: &mut Frame, layout: &ScreenLayout, session: &GameSession, tick: usize) {
    let view = session.view();
    let button = view.button();

    let label = if view.is_loading() {
        format!("{} {}", SPINNER[tick % SPINNER.len()], button.label)
    } else {
        button.label.clone()
    };

    let style = if button.enabled {
        Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let widget = Paragraph::new(Line::from(Span::styled(label, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, layout.button);
}

fn draw_grid(frame: &mut Frame, layout: &ScreenLayout, grid: &Grid, cursor: CellCoord) {
    for (header, area) in grid.headers().iter().zip(&layout.headers) {
        let widget = Paragraph::new(header.title.as_str())
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Blue)));
        frame.render_widget(widget, *area);
    }

    for cell in grid.body_cells() {
        let area = layout.cells[cell.coord.row()][cell.coord.column()];
        draw_cell(frame, area, cell, cell.coord == cursor);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &BodyCell, selected: bool) {
    let text_style = match cell.content.style() {
        CellStyle::Placeholder => Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
        CellStyle::Question => Style::default().fg(Color::White),
        CellStyle::Answer => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    };

    let border_style = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Blue)
    };

    let widget = Paragraph::new(cell.content.text())
        .style(text_style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(widget, area);
}

fn draw_placeholder(frame: &mut Frame, layout: &ScreenLayout, session: &GameSession, tick: usize) {
    let text = if session.view().is_loading() {
        format!("{} Fetching categories...", SPINNER[tick % SPINNER.len()])
    } else {
        "Press 's' or click the button to start a game".to_string()
    };

    let area = center_rect(layout.body, layout.body.width, 1);
    let widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn draw_status(frame: &mut Frame, area: Rect, session: &GameSession) {
    let (text, color) = match session.view().error() {
        Some(error) => (format!("Setup failed: {}", error), Color::Red),
        None => (
            "←↑↓→: Move  |  Enter/Space/click: Reveal  |  S/R: Start  |  Q: Quit".to_string(),
            Color::Yellow,
        ),
    };

    let widget = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn split_columns(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, NUM_CATEGORIES as u32); NUM_CATEGORIES])
        .split(area)
        .to_vec()
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_has_one_rect_per_cell() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.headers.len(), NUM_CATEGORIES);
        assert_eq!(layout.cells.len(), CLUES_PER_CATEGORY);
        assert!(layout.cells.iter().all(|row| row.len() == NUM_CATEGORIES));
    }

    #[test]
    fn test_hit_test_finds_cell_centres() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 120, 40));
        for coord in CellCoord::all() {
            let rect = layout.cells[coord.row()][coord.column()];
            let hit = layout.hit_test(rect.x + rect.width / 2, rect.y + rect.height / 2);
            assert_eq!(hit, Some(ClickTarget::Cell(coord)));
        }
    }

    #[test]
    fn test_hit_test_finds_button() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 120, 40));
        let b = layout.button;
        assert_eq!(layout.hit_test(b.x + 1, b.y + 1), Some(ClickTarget::Button));
        assert_eq!(layout.hit_test(layout.title.x, layout.title.y), None);
    }
}
