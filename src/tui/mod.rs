//! Terminal user interface for the communication board.
//!
//! This module contains the main TUI loop, the host application state, key
//! handling, and all UI widgets using Ratatui. The host owns the stores and
//! the theme; every user interaction is translated into a [`BoardEvent`] and
//! pushed through the pure reducer, after which the returned effects are
//! carried to the storage collaborators.

pub mod board;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::board::{reduce, BoardEvent, BoardState, Effect};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::Category;
use crate::storage::{CatalogStore, SentenceStore};

pub use board::GRID_COLS;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Host application state for the TUI.
///
/// Wraps the immutable board snapshot with everything the terminal host
/// needs on top: selection, transient status messages, theme, and the
/// storage collaborators that consume reducer effects.
pub struct App {
    /// Current board snapshot.
    pub state: BoardState,
    /// Active color theme.
    pub theme: Theme,
    /// Loaded configuration.
    pub config: Config,
    /// Catalog persistence collaborator.
    pub catalog_store: CatalogStore,
    /// Saved-sentence persistence collaborator.
    pub sentence_store: SentenceStore,
    /// Index of the selected tile within the visible view.
    pub selected: usize,
    /// Transient status message shown in the status bar.
    pub status: Option<String>,
    /// Whether the status message reports a failure.
    pub status_is_error: bool,
    /// Set when the user asked to quit.
    pub should_quit: bool,
}

impl App {
    /// Creates the host around an initial board snapshot.
    #[must_use]
    pub fn new(
        state: BoardState,
        config: Config,
        catalog_store: CatalogStore,
        sentence_store: SentenceStore,
    ) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        Self {
            state,
            theme,
            config,
            catalog_store,
            sentence_store,
            selected: 0,
            status: None,
            status_is_error: false,
            should_quit: false,
        }
    }

    /// Feeds one event through the reducer and carries out its effect.
    pub fn apply(&mut self, event: BoardEvent) {
        let (next, effect) = reduce(std::mem::take(&mut self.state), event);
        self.state = next;
        if let Some(effect) = effect {
            self.handle_effect(effect);
        }
        self.clamp_selection();
    }

    fn handle_effect(&mut self, effect: Effect) {
        match effect {
            Effect::FavoriteChanged { id, favorite } => {
                if self.config.storage.persist_favorites {
                    if let Err(e) = self.catalog_store.set_favorite(&id, favorite) {
                        self.set_error(format!("Failed to persist favorite: {e}"));
                        return;
                    }
                }
                let verb = if favorite { "added to" } else { "removed from" };
                self.set_status(format!("Tile {verb} favorites"));
            }
            Effect::SentenceSaved { pictogram_ids, text } => {
                let result = self
                    .sentence_store
                    .append(pictogram_ids.clone(), text.clone())
                    .and_then(|_| self.catalog_store.record_usage(&pictogram_ids))
                    .and_then(|()| self.catalog_store.load());
                match result {
                    Ok(fresh) => {
                        // Pick up the new usage counts in the board view.
                        self.apply(BoardEvent::CatalogReplaced(fresh));
                        self.set_status(format!("Saved: {text}"));
                    }
                    Err(e) => self.set_error(format!("Failed to save sentence: {e}")),
                }
            }
            Effect::SaveRejected => {
                self.set_error("A sentence needs at least 2 tiles to be saved".to_string());
            }
        }
    }

    /// Copies the sentence text to the system clipboard.
    pub fn copy_sentence(&mut self) {
        if !self.state.sentence.can_play() {
            self.set_error("Nothing to copy yet".to_string());
            return;
        }
        let text = self.state.sentence.display_text();
        match arboard::Clipboard::new().and_then(|mut clip| clip.set_text(text.clone())) {
            Ok(()) => self.set_status(format!("Copied: {text}")),
            Err(e) => self.set_error(format!("Clipboard error: {e}")),
        }
    }

    fn set_status(&mut self, message: String) {
        self.status = Some(message);
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: String) {
        self.status = Some(message);
        self.status_is_error = true;
    }

    fn clamp_selection(&mut self) {
        let len = self.state.available.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.state.available.len() as isize;
        if len == 0 {
            return;
        }
        let next = self.selected as isize + delta;
        if (0..len).contains(&next) {
            self.selected = next as usize;
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_key_event(app, key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Translate a key press into board events or host actions.
fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Any keystroke dismisses the previous status message.
    app.status = None;
    app.status_is_error = false;

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,

        KeyCode::Left | KeyCode::Char('h') => app.move_selection(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_selection(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-(GRID_COLS as isize)),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(GRID_COLS as isize),

        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(pictogram) = app.state.available.get(app.selected).cloned() {
                app.apply(BoardEvent::TileTapped(pictogram));
            }
        }
        KeyCode::Char('f') => {
            if let Some(pictogram) = app.state.available.get(app.selected) {
                let id = pictogram.id.clone();
                app.apply(BoardEvent::TileLongPressed { id });
            }
        }
        KeyCode::Backspace => {
            let len = app.state.sentence.len();
            if len > 0 {
                app.apply(BoardEvent::RemoveTapped { index: len - 1 });
            }
        }
        KeyCode::Char('c') => app.apply(BoardEvent::ClearTapped),
        KeyCode::Char('s') => app.apply(BoardEvent::SaveRequested),
        KeyCode::Char('y') => app.copy_sentence(),

        KeyCode::Char('0') | KeyCode::Char('m') => app.apply(BoardEvent::CategoryChosen(None)),
        KeyCode::Char('v') => app.apply(BoardEvent::FavoritesChosen),
        KeyCode::Char(c @ '1'..='6') => {
            let idx = (c as usize) - ('1' as usize);
            let category = Category::ALL[idx];
            app.apply(BoardEvent::CategoryChosen(Some(category)));
        }

        _ => {}
    }
}

/// Render the UI from current state
fn render(f: &mut Frame, app: &App) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(4), // Sentence bar
            Constraint::Min(6),    // Tile grid
            Constraint::Length(3), // Category selector
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], app);
    board::render_sentence_bar(f, chunks[1], app);
    board::render_tile_grid(f, chunks[2], app);
    board::render_category_bar(f, chunks[3], app);
    StatusBar::render(f, chunks[4], app, &app.theme);
}

/// Render title bar with app name and catalog summary
fn render_title_bar(f: &mut Frame, area: Rect, app: &App) {
    let title = format!(" {} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    let widget = Paragraph::new(title).style(
        Style::default()
            .fg(app.theme.primary)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(widget, area);
}
