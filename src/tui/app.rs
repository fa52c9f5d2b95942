use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::cli::Cli;
use crate::model::Task;
use crate::store::TaskListStore;

use super::editor::ItemEditor;
use super::input;
use super::render;
use super::theme::Theme;

#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("terminal: {0}")]
    Terminal(#[from] io::Error),
}

/// Which region has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The new-task entry field
    Entry,
    /// The task list
    List,
}

/// Main application state.
pub struct App {
    pub store: TaskListStore,
    pub editor: ItemEditor,
    pub focus: Focus,
    /// New-task draft, cleared when a submission is accepted
    pub entry: String,
    /// Byte cursor into `entry`
    pub entry_cursor: usize,
    /// Cursor index into the task list
    pub cursor: usize,
    /// Scroll offset (first visible row of the list)
    pub scroll: usize,
    pub show_help: bool,
    pub should_quit: bool,
    pub theme: Theme,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        App {
            store: TaskListStore::new(),
            editor: ItemEditor::new(),
            focus: Focus::Entry,
            entry: String::new(),
            entry_cursor: 0,
            cursor: 0,
            scroll: 0,
            show_help: false,
            should_quit: false,
            theme,
        }
    }

    /// Pre-populate the list (CLI positional args). Blank strings are
    /// rejected by the store like any other submission.
    pub fn seed(&mut self, texts: &[String]) {
        for text in texts {
            self.store.add(text);
        }
    }

    /// The task under the list cursor.
    pub fn cursor_task(&self) -> Option<&Task> {
        self.store.tasks().get(self.cursor)
    }

    /// Keep the cursor inside the list after deletions.
    pub fn clamp_cursor(&mut self) {
        let len = self.store.len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Submit the entry draft. The store rejects blank text; the draft is
    /// cleared only when the submission was accepted.
    pub fn submit_entry(&mut self) {
        let before = self.store.len();
        self.store.add(&self.entry);
        if self.store.len() > before {
            self.entry.clear();
            self.entry_cursor = 0;
        }
    }

    /// Adjust scroll so the cursor row is visible in `height` rows.
    pub fn ensure_cursor_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + height {
            self.scroll = self.cursor + 1 - height;
        }
    }
}

/// Run the TUI application.
pub fn run(cli: &Cli) -> Result<(), TuiError> {
    let mut app = App::new(Theme::from_choice(cli.theme));
    app.seed(&cli.tasks);

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
) -> Result<(), TuiError> {
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
