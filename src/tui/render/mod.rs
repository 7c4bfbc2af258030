pub mod dialog;
pub mod list_view;
pub mod status_row;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};

use super::app::{App, ROWS_PER_ITEM};

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: idea list | key hints (1 row) | prompt/notice (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let visible = chunks[0].height as usize / ROWS_PER_ITEM;
    app.too_small = visible < 1;
    if app.too_small {
        let msg = Paragraph::new("Terminal too small! Enlarge the window, or press 'q' to quit.")
            .style(Style::default().fg(app.theme.warn).bg(app.theme.background));
        frame.render_widget(msg, area);
        return;
    }

    app.clamp_viewport(visible);

    list_view::render_list(frame, app, chunks[0], visible);
    status_row::render_hints(frame, app, chunks[1]);
    status_row::render_notice(frame, app, chunks[2]);

    // Modal dialog (rendered on top of everything)
    if app.dialog.is_some() {
        dialog::render_dialog(frame, app, area);
    }
}
