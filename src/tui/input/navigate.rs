use crossterm::event::{KeyCode, KeyEvent};

use crate::model::SortMode;
use crate::tui::app::{App, Mode};

use super::{dialog, move_mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Up => {
            app.selected = app.selected.saturating_sub(1);
        }
        KeyCode::Down => {
            if app.selected + 1 < app.ideas.len() {
                app.selected += 1;
            }
        }
        KeyCode::Char('a') => {
            dialog::open_new(app);
        }
        KeyCode::Delete | KeyCode::Backspace => {
            delete_selected(app);
        }
        KeyCode::Char('d') => {
            toggle_archived(app);
        }
        KeyCode::Char('e') => {
            dialog::open_edit(app);
        }
        KeyCode::Char('o') => {
            app.mode = Mode::SortPrompt;
        }
        KeyCode::Char(' ') => {
            move_mode::enter_move_mode(app);
        }
        _ => {}
    }
}

/// Second key after `o`: pick an ordering, anything else dismisses.
pub(super) fn handle_sort_prompt(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('i') => set_sort_mode(app, SortMode::Position),
        KeyCode::Char('d') => set_sort_mode(app, SortMode::CreatedDate),
        _ => app.mode = Mode::Navigate,
    }
}

fn set_sort_mode(app: &mut App, sort_mode: SortMode) {
    app.sort_mode = sort_mode;
    app.selected = 0;
    app.scroll_offset = 0;
    app.mode = Mode::Navigate;
    app.refresh();
}

fn delete_selected(app: &mut App) {
    let id = match app.selected_idea() {
        Some(idea) => idea.id,
        None => return,
    };
    if let Err(e) = app.store.delete(id) {
        app.flash(format!("store error: {}", e));
        return;
    }
    app.refresh();
    if app.selected >= app.ideas.len() {
        app.selected = app.ideas.len().saturating_sub(1);
    }
    app.scroll_offset = 0;
}

fn toggle_archived(app: &mut App) {
    let (id, archived) = match app.selected_idea() {
        Some(idea) => (idea.id, idea.archived),
        None => return,
    };
    if let Err(e) = app.store.set_archived(id, !archived) {
        app.flash(format!("store error: {}", e));
        return;
    }
    app.refresh();
}
