//! Stateless UI rendering.

mod board;
mod moves;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Renders the whole screen: title, board, move list, status bar.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and key help
            Constraint::Min(13),   // Board and move list
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::styled(
            "Noughts - Tic Tac Toe",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "1-9 place | arrows+enter place at cursor | ,/. step history | g/G ends | s sort | n new | q quit",
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    board::render_board(frame, columns[0], app);
    moves::render_moves(frame, columns[1], app);

    let game = app.game();
    let status = if game.is_over() {
        format!("{}  -  GAME OVER!", game.status())
    } else {
        game.status()
    };
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);
}
