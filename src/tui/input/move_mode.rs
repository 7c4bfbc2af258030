use crossterm::event::{KeyCode, KeyEvent};

use crate::model::SortMode;
use crate::tui::app::{App, Mode};

/// Enter Move mode for the idea under the cursor. Only permitted while
/// sorted by manual position; the working list becomes a frozen snapshot
/// of the by-position scan until the new order is confirmed.
pub(super) fn enter_move_mode(app: &mut App) {
    if app.sort_mode != SortMode::Position {
        app.flash("cannot reorder while sorted by date (press 'o' then 'i')".to_string());
        return;
    }
    let ideas = match app.store.list(SortMode::Position) {
        Ok(ideas) => ideas,
        Err(e) => {
            app.flash(format!("store error: {}", e));
            return;
        }
    };
    if ideas.is_empty() {
        return;
    }
    app.ideas = ideas;
    app.selected = app.selected.min(app.ideas.len() - 1);
    app.moving_index = Some(app.selected);
    app.mode = Mode::Move;
}

/// Move mode only exits by confirming — there is no cancel path, and a
/// confirm without any swaps persists the identity permutation.
pub(super) fn handle_move(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => swap_with_neighbor(app, -1),
        KeyCode::Down => swap_with_neighbor(app, 1),
        KeyCode::Char(' ') => confirm_move(app),
        _ => {}
    }
}

/// Swap the moving idea with its neighbor inside the frozen snapshot.
/// No-op at either end of the list.
fn swap_with_neighbor(app: &mut App, direction: i64) {
    let idx = match app.moving_index {
        Some(i) => i,
        None => return,
    };
    let neighbor = idx as i64 + direction;
    if neighbor < 0 || neighbor as usize >= app.ideas.len() {
        return;
    }
    let neighbor = neighbor as usize;
    app.ideas.swap(idx, neighbor);
    app.moving_index = Some(neighbor);
    app.selected = neighbor;
}

fn confirm_move(app: &mut App) {
    let idx = match app.moving_index {
        Some(i) => i,
        None => return,
    };
    let ids: Vec<i64> = app.ideas.iter().map(|i| i.id).collect();
    if let Err(e) = app.store.set_positions(&ids) {
        // Stay in Move mode so the pending order is not silently lost;
        // the on-disk order is unchanged.
        app.flash(format!("store error: {}", e));
        return;
    }
    app.selected = idx;
    app.moving_index = None;
    app.mode = Mode::Navigate;
    app.refresh();
}
