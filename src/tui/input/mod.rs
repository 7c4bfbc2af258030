pub mod dialog;
mod move_mode;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Degraded "terminal too small" screen accepts only quit
    if app.too_small {
        if matches!(key.code, KeyCode::Char('q')) {
            app.should_quit = true;
        }
        return;
    }

    // Clear any transient status message on keypress
    app.status_message = None;

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::SortPrompt => navigate::handle_sort_prompt(app, key),
        Mode::Move => move_mode::handle_move(app, key),
        Mode::Dialog => dialog::handle_dialog(app, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SortMode;
    use crate::store::IdeaStore;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn app_with(titles: &[&str]) -> App {
        let store = IdeaStore::open_in_memory().unwrap();
        for title in titles {
            store.insert(title, "").unwrap();
        }
        App::new(store).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::from(code));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn ctrl_g(app: &mut App) {
        handle_key(
            app,
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::CONTROL),
        );
    }

    fn stored_titles(app: &App) -> Vec<String> {
        app.store
            .list(SortMode::Position)
            .unwrap()
            .into_iter()
            .map(|i| i.title)
            .collect()
    }

    #[test]
    fn test_quit() {
        let mut app = app_with(&[]);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_selection_moves_and_clamps() {
        let mut app = app_with(&["a", "b", "c"]);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 2);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_move_swap_up_and_confirm() {
        // Ideas at positions [0,1,2]; move the middle one up one slot.
        let mut app = app_with(&["a", "b", "c"]);
        app.selected = 1;
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.mode, Mode::Move);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.selected, 0);
        assert_eq!(stored_titles(&app), vec!["b", "a", "c"]);
        let positions: Vec<i64> = app
            .store
            .list(SortMode::Position)
            .unwrap()
            .iter()
            .map(|i| i.position)
            .collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_move_identity_confirm_leaves_order_unchanged() {
        let mut app = app_with(&["a", "b", "c"]);
        app.selected = 1;
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(stored_titles(&app), vec!["a", "b", "c"]);
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_move_swap_clamps_at_boundaries() {
        let mut app = app_with(&["a", "b"]);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Up); // already at the top: no-op
        assert_eq!(app.moving_index, Some(0));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down); // already at the bottom: no-op
        assert_eq!(app.moving_index, Some(1));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(stored_titles(&app), vec!["b", "a"]);
    }

    #[test]
    fn test_move_rejected_when_sorted_by_date() {
        let mut app = app_with(&["a", "b"]);
        app.sort_mode = SortMode::CreatedDate;
        app.refresh();
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.status_message.is_some());
        assert_eq!(stored_titles(&app), vec!["a", "b"]);
    }

    #[test]
    fn test_mutations_disabled_while_moving() {
        let mut app = app_with(&["a", "b"]);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Delete);
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('o'));
        assert!(!app.should_quit);
        assert_eq!(app.mode, Mode::Move);
        assert_eq!(stored_titles(&app), vec!["a", "b"]);
        assert!(!app.store.list(SortMode::Position).unwrap()[0].archived);
    }

    #[test]
    fn test_delete_resets_scroll_and_clamps() {
        let mut app = app_with(&["a", "b", "c"]);
        app.selected = 2;
        app.scroll_offset = 1;
        press(&mut app, KeyCode::Delete);
        assert_eq!(stored_titles(&app), vec!["a", "b"]);
        assert_eq!(app.selected, 1);
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_delete_keeps_other_positions() {
        let mut app = app_with(&["a", "b", "c"]);
        app.selected = 1;
        press(&mut app, KeyCode::Backspace);
        let remaining: Vec<(String, i64)> = app
            .store
            .list(SortMode::Position)
            .unwrap()
            .into_iter()
            .map(|i| (i.title, i.position))
            .collect();
        assert_eq!(remaining, vec![("a".into(), 0), ("c".into(), 2)]);
    }

    #[test]
    fn test_toggle_archived() {
        let mut app = app_with(&["a"]);
        press(&mut app, KeyCode::Char('d'));
        assert!(app.ideas[0].archived);
        press(&mut app, KeyCode::Char('d'));
        assert!(!app.ideas[0].archived);
    }

    #[test]
    fn test_sort_prompt_switches_mode_and_resets_viewport() {
        let mut app = app_with(&["a", "b", "c"]);
        app.selected = 2;
        app.scroll_offset = 1;
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.mode, Mode::SortPrompt);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.sort_mode, SortMode::CreatedDate);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.selected, 0);
        assert_eq!(app.scroll_offset, 0);
        press(&mut app, KeyCode::Char('o'));
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.sort_mode, SortMode::Position);
    }

    #[test]
    fn test_sort_prompt_dismissed_by_other_key() {
        let mut app = app_with(&["a"]);
        press(&mut app, KeyCode::Char('o'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.sort_mode, SortMode::Position);
    }

    #[test]
    fn test_add_dialog_commits_and_selects_last() {
        let mut app = app_with(&["a"]);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.mode, Mode::Dialog);
        type_str(&mut app, "Buy milk");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "2% preferably");
        ctrl_g(&mut app);
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(stored_titles(&app), vec!["a", "Buy milk"]);
        assert_eq!(app.selected, 1);
        let new = &app.store.list(SortMode::Position).unwrap()[1];
        assert_eq!(new.notes, "2% preferably");
        assert_eq!(new.position, 1);
        assert!(!new.archived);
    }

    #[test]
    fn test_add_dialog_cancelled_at_title() {
        let mut app = app_with(&["a"]);
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "nope");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(stored_titles(&app), vec!["a"]);
    }

    #[test]
    fn test_add_dialog_declined_at_confirmation() {
        let mut app = app_with(&[]);
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "nope");
        press(&mut app, KeyCode::Enter);
        ctrl_g(&mut app);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(stored_titles(&app).is_empty());
    }

    #[test]
    fn test_edit_empty_title_falls_back_and_notes_are_trimmed() {
        let mut app = app_with(&["Old"]);
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Enter); // empty title: keep "Old"
        type_str(&mut app, "  trimmed  ");
        ctrl_g(&mut app);
        press(&mut app, KeyCode::Char('y'));
        let idea = &app.store.list(SortMode::Position).unwrap()[0];
        assert_eq!(idea.title, "Old");
        assert_eq!(idea.notes, "trimmed");
    }

    #[test]
    fn test_edit_dialog_seeds_notes() {
        let mut app = app_with(&[]);
        app.store.insert("Old", "keep me").unwrap();
        app.refresh();
        press(&mut app, KeyCode::Char('e'));
        type_str(&mut app, "New");
        press(&mut app, KeyCode::Enter);
        ctrl_g(&mut app); // finish notes untouched
        press(&mut app, KeyCode::Char('y'));
        let idea = &app.store.list(SortMode::Position).unwrap()[0];
        assert_eq!(idea.title, "New");
        assert_eq!(idea.notes, "keep me");
    }

    #[test]
    fn test_too_small_accepts_only_quit() {
        let mut app = app_with(&["a"]);
        app.too_small = true;
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.mode, Mode::Navigate);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
