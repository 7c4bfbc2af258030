use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::DATE_FORMAT;
use crate::tui::app::App;

/// Notes are previewed truncated to this many characters.
const NOTES_PREVIEW_LEN: usize = 50;

/// Render the idea list: two rows per idea (content + separator),
/// windowed by the scroll offset.
pub fn render_list(frame: &mut Frame, app: &App, area: Rect, visible: usize) {
    let bg = app.theme.background;

    if app.ideas.is_empty() {
        let empty = Paragraph::new(" No ideas yet - press 'a' to add one")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let end = app.ideas.len().min(app.scroll_offset + visible);
    let mut lines: Vec<Line> = Vec::with_capacity((end - app.scroll_offset) * 2);

    for idx in app.scroll_offset..end {
        let idea = &app.ideas[idx];

        let base_title = if idea.archived {
            Style::default().fg(app.theme.dim).bg(bg)
        } else {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        };

        // Selected titles render reversed; the one being repositioned
        // renders underlined instead. Dates drop their accent color in
        // both cases so the title stands out.
        let (title_style, date_style) = if app.moving_index == Some(idx) {
            (
                base_title.add_modifier(Modifier::UNDERLINED),
                Style::default().fg(app.theme.text).bg(bg),
            )
        } else if idx == app.selected {
            (
                base_title.add_modifier(Modifier::REVERSED),
                Style::default().fg(app.theme.text).bg(bg),
            )
        } else {
            (base_title, Style::default().fg(app.theme.date).bg(bg))
        };

        let mut spans = vec![
            Span::styled(format!("{}. {}", idx + 1, idea.title), title_style),
            Span::styled(
                format!(" | {}", notes_preview(&idea.notes)),
                Style::default().fg(app.theme.text).bg(bg),
            ),
            Span::styled(
                format!(" | {}", idea.created_date.format(DATE_FORMAT)),
                date_style,
            ),
        ];
        if idea.archived {
            spans.push(Span::styled(
                " | Archived",
                Style::default()
                    .fg(app.theme.warn)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(Span::styled(
            "-".repeat(area.width as usize),
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Single-line notes preview: newlines flattened, truncated to
/// `NOTES_PREVIEW_LEN` characters with a `...` marker.
fn notes_preview(notes: &str) -> String {
    let flat = notes.replace('\n', " ");
    if flat.chars().count() > NOTES_PREVIEW_LEN {
        let head: String = flat.chars().take(NOTES_PREVIEW_LEN).collect();
        format!("{}...", head)
    } else {
        flat
    }
}
