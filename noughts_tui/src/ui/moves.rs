//! Move-list rendering.

use noughts::SortOrder;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Renders the move list in the current sort order, highlighting the
/// step the game is currently showing.
pub fn render_moves(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();

    let lines: Vec<Line> = game
        .describe_moves()
        .into_iter()
        .map(|entry| {
            let style = if entry.step == game.current_step() {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default()
            };
            Line::from(Span::styled(entry.label, style))
        })
        .collect();

    let order = match game.sort_order() {
        SortOrder::Ascending => "ascending",
        SortOrder::Descending => "descending",
    };
    let list = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Moves ({order})")),
    );
    frame.render_widget(list, area);
}
