use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::input::dialog::{DIALOG_HEIGHT, DIALOG_WIDTH, DialogStage, NOTES_ROWS};

/// Render the modal add/edit dialog centered over the list.
pub fn render_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let dialog = match &app.dialog {
        Some(d) => d,
        None => return,
    };
    let bg = app.theme.background;
    let popup = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            dialog.heading,
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().fg(app.theme.text).bg(bg));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    // The title buffer starts empty; until something is typed the prior
    // title shows as a dim placeholder (submitting empty keeps it).
    let title_line = if dialog.title.text().is_empty() {
        let mut spans = vec![Span::styled(
            dialog.prior_title.clone(),
            Style::default().fg(app.theme.dim).bg(bg),
        )];
        if dialog.stage == DialogStage::Title {
            spans.insert(
                0,
                Span::styled("\u{258C}", Style::default().fg(app.theme.text_bright).bg(bg)),
            );
        }
        Line::from(spans)
    } else {
        let mut spans = vec![Span::styled(
            dialog.title.text().to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        )];
        if dialog.stage == DialogStage::Title {
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.text_bright).bg(bg),
            ));
        }
        Line::from(spans)
    };

    let dim = Style::default().fg(app.theme.dim).bg(bg);
    let top_lines = vec![
        Line::from(Span::styled("Idea Title:", Style::default().fg(app.theme.text).bg(bg))),
        title_line,
        Line::from(Span::styled(
            "Press Enter when done editing the title (Esc to cancel).",
            dim,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Idea Notes (Ctrl-G to finish, Esc to cancel):",
            Style::default().fg(app.theme.text).bg(bg),
        )),
    ];
    let top = Rect {
        x: inner.x,
        y: inner.y,
        width: inner.width,
        height: 5,
    }
    .intersection(inner);
    frame.render_widget(Paragraph::new(top_lines).style(Style::default().bg(bg)), top);

    // Notes editing box
    let notes_rect = Rect {
        x: inner.x,
        y: inner.y.saturating_add(5),
        width: inner.width,
        height: NOTES_ROWS as u16 + 2,
    }
    .intersection(inner);
    let notes_block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().fg(app.theme.text).bg(bg));
    let notes_inner = notes_block.inner(notes_rect);
    frame.render_widget(notes_block, notes_rect);

    let mut notes_lines: Vec<Line> = Vec::with_capacity(NOTES_ROWS);
    let last = dialog.notes.lines().len() - 1;
    for (i, text) in dialog.notes.lines().iter().enumerate() {
        let mut spans = vec![Span::styled(
            text.clone(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        )];
        if i == last && dialog.stage == DialogStage::Notes {
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.text_bright).bg(bg),
            ));
        }
        notes_lines.push(Line::from(spans));
    }
    frame.render_widget(
        Paragraph::new(notes_lines).style(Style::default().bg(bg)),
        notes_inner,
    );

    // Confirmation prompt on the bottom inner row
    if dialog.stage == DialogStage::Confirm && inner.height > 0 {
        let confirm_rect = Rect {
            x: inner.x,
            y: inner.y + inner.height - 1,
            width: inner.width,
            height: 1,
        };
        let confirm = Paragraph::new("Press 'y' to confirm, 'n' or Esc to cancel.")
            .style(Style::default().fg(app.theme.text_bright).bg(bg));
        frame.render_widget(confirm, confirm_rect);
    }
}

/// Center a `width` x `height` box in `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
