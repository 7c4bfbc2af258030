use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// Dialog box geometry (also consumed by the renderer).
pub const DIALOG_WIDTH: u16 = 70;
pub const DIALOG_HEIGHT: u16 = 18;
/// Bounded title length: the dialog's input row.
pub const TITLE_MAX_LEN: usize = 66;
/// Fixed visible notes editing area.
pub const NOTES_ROWS: usize = 6;
pub const NOTES_COLS: usize = 64;

/// Result of a text-edit interaction. Cancellation is a normal return
/// value, not an interrupt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Committed(String),
    Cancelled,
}

/// Single-line append/backspace editor with a bounded length.
#[derive(Debug, Clone)]
pub struct LineEditor {
    buffer: String,
    max_len: usize,
}

impl LineEditor {
    pub fn new(max_len: usize) -> Self {
        LineEditor {
            buffer: String::new(),
            max_len,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Feed one keystroke. Returns an outcome when the edit finishes,
    /// `None` while it is still live.
    pub fn feed(&mut self, key: KeyEvent) -> Option<EditOutcome> {
        match key.code {
            KeyCode::Esc => Some(EditOutcome::Cancelled),
            KeyCode::Enter => Some(EditOutcome::Committed(self.buffer.clone())),
            KeyCode::Backspace => {
                self.buffer.pop();
                None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.buffer.chars().count() < self.max_len {
                    self.buffer.push(c);
                }
                None
            }
            _ => None,
        }
    }
}

/// Multi-line editor bounded by the fixed visible notes box. Editing
/// happens at the end of the buffer; Ctrl-G finishes, Esc cancels.
#[derive(Debug, Clone)]
pub struct NotesEditor {
    lines: Vec<String>,
}

impl NotesEditor {
    /// Seed with existing notes, clipped to the visible box.
    pub fn new(initial: &str) -> Self {
        let mut lines: Vec<String> = initial
            .lines()
            .take(NOTES_ROWS)
            .map(|l| l.chars().take(NOTES_COLS).collect())
            .collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        NotesEditor { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn feed(&mut self, key: KeyEvent) -> Option<EditOutcome> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('g') => Some(EditOutcome::Committed(self.text())),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Esc => Some(EditOutcome::Cancelled),
            KeyCode::Enter => {
                if self.lines.len() < NOTES_ROWS {
                    self.lines.push(String::new());
                }
                None
            }
            KeyCode::Backspace => {
                let removed = self.lines.last_mut().and_then(|l| l.pop());
                if removed.is_none() && self.lines.len() > 1 {
                    self.lines.pop();
                }
                None
            }
            KeyCode::Char(c) => {
                if let Some(last) = self.lines.last_mut()
                    && last.chars().count() < NOTES_COLS
                {
                    last.push(c);
                }
                None
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogStage {
    Title,
    Notes,
    Confirm,
}

/// State of the modal add/edit dialog.
pub struct DialogState {
    /// `None` for a new idea, `Some(id)` when editing.
    pub target: Option<i64>,
    pub heading: &'static str,
    /// Fallback when the title is submitted empty.
    pub prior_title: String,
    pub title: LineEditor,
    pub notes: NotesEditor,
    pub stage: DialogStage,
    committed_title: String,
}

impl DialogState {
    fn new(target: Option<i64>, heading: &'static str, prior_title: String, notes: &str) -> Self {
        DialogState {
            target,
            heading,
            prior_title,
            title: LineEditor::new(TITLE_MAX_LEN),
            notes: NotesEditor::new(notes),
            stage: DialogStage::Title,
            committed_title: String::new(),
        }
    }
}

pub(super) fn open_new(app: &mut App) {
    app.dialog = Some(DialogState::new(None, "New Idea", String::new(), ""));
    app.mode = Mode::Dialog;
}

pub(super) fn open_edit(app: &mut App) {
    let idea = match app.selected_idea() {
        Some(idea) => idea,
        None => return,
    };
    app.dialog = Some(DialogState::new(
        Some(idea.id),
        "Edit Idea",
        idea.title.clone(),
        &idea.notes,
    ));
    app.mode = Mode::Dialog;
}

enum Step {
    Continue,
    Close,
    Commit,
}

pub(super) fn handle_dialog(app: &mut App, key: KeyEvent) {
    let step = match app.dialog.as_mut() {
        Some(dialog) => advance(dialog, key),
        None => Step::Close,
    };
    match step {
        Step::Continue => {}
        Step::Close => close(app),
        Step::Commit => commit(app),
    }
}

fn advance(dialog: &mut DialogState, key: KeyEvent) -> Step {
    match dialog.stage {
        DialogStage::Title => match dialog.title.feed(key) {
            Some(EditOutcome::Cancelled) => Step::Close,
            Some(EditOutcome::Committed(text)) => {
                // Submitting an empty title keeps the prior one
                let text = text.trim();
                dialog.committed_title = if text.is_empty() {
                    dialog.prior_title.clone()
                } else {
                    text.to_string()
                };
                dialog.stage = DialogStage::Notes;
                Step::Continue
            }
            None => Step::Continue,
        },
        DialogStage::Notes => match dialog.notes.feed(key) {
            Some(EditOutcome::Cancelled) => Step::Close,
            Some(EditOutcome::Committed(_)) => {
                dialog.stage = DialogStage::Confirm;
                Step::Continue
            }
            None => Step::Continue,
        },
        DialogStage::Confirm => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Step::Commit,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Step::Close,
            _ => Step::Continue,
        },
    }
}

fn close(app: &mut App) {
    app.dialog = None;
    app.mode = Mode::Navigate;
}

/// The store is touched exactly once, and only after full confirmation.
fn commit(app: &mut App) {
    let dialog = match app.dialog.take() {
        Some(d) => d,
        None => return,
    };
    app.mode = Mode::Navigate;

    let title = dialog.committed_title;
    let notes = dialog.notes.text().trim().to_string();

    match dialog.target {
        Some(id) => {
            if let Err(e) = app.store.update_fields(id, &title, &notes) {
                app.flash(format!("store error: {}", e));
                return;
            }
            app.refresh();
        }
        None => {
            if let Err(e) = app.store.insert(&title, &notes) {
                app.flash(format!("store error: {}", e));
                return;
            }
            app.refresh();
            app.selected = app.ideas.len().saturating_sub(1);
        }
    }
}
