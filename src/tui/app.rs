use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{Idea, SortMode};
use crate::store::{IdeaStore, StoreError};

use super::input;
use super::input::dialog::DialogState;
use super::render;
use super::theme::Theme;

/// Each idea occupies two display rows: content + separator.
pub const ROWS_PER_ITEM: usize = 2;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Repositioning the selected idea in a frozen working list.
    Move,
    /// The add/edit dialog is open.
    Dialog,
    /// Waiting for an `i`/`d` keypress after `o`.
    SortPrompt,
}

/// Main application state
pub struct App {
    pub store: IdeaStore,
    /// The list currently shown. Re-scanned from the store after every
    /// committed mutation — except while moving, when it is the frozen
    /// snapshot being reordered.
    pub ideas: Vec<Idea>,
    pub sort_mode: SortMode,
    pub mode: Mode,
    pub selected: usize,
    pub scroll_offset: usize,
    /// Index of the idea being repositioned (Move mode only).
    pub moving_index: Option<usize>,
    pub dialog: Option<DialogState>,
    /// Transient notice (invalid action, store failure). Cleared on the
    /// next keypress.
    pub status_message: Option<String>,
    pub should_quit: bool,
    /// Set each frame; when true, input accepts only quit.
    pub too_small: bool,
    pub theme: Theme,
}

impl App {
    pub fn new(store: IdeaStore) -> Result<Self, StoreError> {
        let sort_mode = SortMode::Position;
        let ideas = store.list(sort_mode)?;
        Ok(App {
            store,
            ideas,
            sort_mode,
            mode: Mode::Navigate,
            selected: 0,
            scroll_offset: 0,
            moving_index: None,
            dialog: None,
            status_message: None,
            should_quit: false,
            too_small: false,
            theme: Theme::default(),
        })
    }

    /// Re-scan the working list from the store in the current sort mode.
    /// Never called while moving — the snapshot stays frozen.
    pub fn refresh(&mut self) {
        match self.store.list(self.sort_mode) {
            Ok(ideas) => self.ideas = ideas,
            Err(e) => self.flash(format!("store error: {}", e)),
        }
    }

    pub fn flash(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn selected_idea(&self) -> Option<&Idea> {
        self.ideas.get(self.selected)
    }

    /// Clamp selection to the list and adjust the scroll window minimally
    /// so the selection stays visible. `visible` is how many ideas fit in
    /// the content area.
    pub fn clamp_viewport(&mut self, visible: usize) {
        let count = self.ideas.len();
        if count == 0 || visible == 0 {
            self.selected = 0;
            self.scroll_offset = 0;
            return;
        }
        self.selected = self.selected.min(count - 1);
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible {
            self.scroll_offset = self.selected + 1 - visible;
        }
        self.scroll_offset = self.scroll_offset.min(count.saturating_sub(visible));
    }
}

/// Run the TUI application against the database at the given path.
pub fn run(db_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let store = IdeaStore::open(db_path)?;
    let mut app = App::new(store)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
