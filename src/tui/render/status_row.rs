use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the key-hint row (second from bottom)
pub fn render_hints(frame: &mut Frame, app: &App, area: Rect) {
    let text = match app.mode {
        Mode::Navigate | Mode::SortPrompt | Mode::Dialog => {
            "Press 'a' to add, Del to remove, Space to move, 'd' to toggle archived, \
             'e' to edit, 'o' to change ordering, 'q' to quit. Use Up/Down to scroll."
        }
        Mode::Move => {
            "Moving idea. Use Up/Down to reposition. Press Space to confirm the new order."
        }
    };
    let paragraph =
        Paragraph::new(text).style(Style::default().fg(app.theme.dim).bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

/// Render the bottom row: sort prompt or transient notice
pub fn render_notice(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let paragraph = if app.mode == Mode::SortPrompt {
        Paragraph::new("Order ideas by (i) manual position or (d) creation date? ")
            .style(Style::default().fg(app.theme.text_bright).bg(bg))
    } else if let Some(ref message) = app.status_message {
        Paragraph::new(message.as_str()).style(Style::default().fg(app.theme.warn).bg(bg))
    } else {
        Paragraph::new("").style(Style::default().bg(bg))
    };
    frame.render_widget(paragraph, area);
}
