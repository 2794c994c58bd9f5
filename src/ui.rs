//! Interactive TUI
//!
//! One search/navigation state at a time: the app owns the document, the
//! outline index, and the current `SearchSession`, and re-derives the
//! results list and context pane whenever the cursor moves.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

use crate::document::Document;
use crate::search::{LineMap, MatchView, OutlineIndex, SearchSession};
use crate::theme::Theme;
use crate::widgets::{ContextPane, ResultsList};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Navigating results
    Browse,
    /// Editing the query in the search bar
    Query,
}

pub struct App {
    document: Document,
    outline: OutlineIndex,
    theme: Theme,
    mode: Mode,
    input: String,
    case_sensitive: bool,
    session: Option<SearchSession>,
    line_map: LineMap,
    selected_location: Option<usize>,
    list_scroll: usize,
    /// Results pane height from the last draw, for scroll clamping
    list_height: u16,
    should_quit: bool,
}

impl App {
    pub fn new(document: Document, theme: Theme, case_sensitive: bool) -> Self {
        let outline = OutlineIndex::new(document.outline.clone());
        Self {
            document,
            outline,
            theme,
            mode: Mode::Browse,
            input: String::new(),
            case_sensitive,
            session: None,
            line_map: LineMap::default(),
            selected_location: None,
            list_scroll: 0,
            list_height: 0,
            should_quit: false,
        }
    }

    /// Run a search and rebuild the derived list state. An empty query is a
    /// no-op that leaves prior results untouched.
    pub fn run_search(&mut self, query: &str) -> Result<()> {
        if query.is_empty() {
            return Ok(());
        }

        let session =
            SearchSession::search(&self.document, &self.outline, query, self.case_sensitive)?;
        self.input = query.to_string();
        self.line_map = LineMap::build(&session.results().locations);
        self.selected_location = session.location_of_cursor();
        self.session = Some(session);
        self.list_scroll = 0;
        self.scroll_selection_into_view();
        Ok(())
    }

    fn current_view(&self) -> Option<MatchView> {
        let session = self.session.as_ref()?;
        MatchView::build(&self.document, &self.outline, session.current()?)
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.mode {
            Mode::Query => self.handle_query_key(key),
            Mode::Browse => self.handle_browse_key(key),
        }
    }

    fn handle_query_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Browse;
            }
            KeyCode::Enter => {
                self.mode = Mode::Browse;
                let query = self.input.clone();
                self.run_search(&query)?;
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('/') | KeyCode::Char('s') => {
                self.mode = Mode::Query;
            }
            KeyCode::Char('n') => {
                if let Some(session) = self.session.as_mut() {
                    session.next();
                }
                self.follow_cursor();
            }
            KeyCode::Char('p') | KeyCode::Char('N') => {
                if let Some(session) = self.session.as_mut() {
                    session.previous();
                }
                self.follow_cursor();
            }
            KeyCode::Down => self.move_selection(1),
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Enter => {
                if let (Some(session), Some(selected)) =
                    (self.session.as_mut(), self.selected_location)
                {
                    session.select_location(selected);
                }
                self.follow_cursor();
            }
            KeyCode::Char('c') => {
                self.case_sensitive = !self.case_sensitive;
                if let Some(query) = self.session.as_ref().map(|s| s.query().to_string()) {
                    self.run_search(&query)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Keep the list selection in step with the session cursor.
    fn follow_cursor(&mut self) {
        if let Some(session) = &self.session {
            self.selected_location = session.location_of_cursor();
        }
        self.scroll_selection_into_view();
    }

    /// Move the list selection and jump the cursor to that location.
    fn move_selection(&mut self, delta: isize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let count = session.results().locations.len();
        if count == 0 {
            return;
        }

        let current = self.selected_location.unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, count as isize - 1) as usize;
        session.select_location(next);
        self.selected_location = Some(next);
        self.scroll_selection_into_view();
    }

    fn scroll_selection_into_view(&mut self) {
        let Some(selected) = self.selected_location else {
            return;
        };
        let Some(first_line) = self.line_map.first_line_of(selected) else {
            return;
        };

        let height = self.list_height.max(1) as usize;
        if first_line < self.list_scroll {
            self.list_scroll = first_line;
        } else if first_line >= self.list_scroll + height {
            self.list_scroll = first_line + 1 - height;
        }
    }

    fn status_line(&self) -> String {
        match &self.session {
            Some(session) => session.status(),
            None => "Ready to search".to_string(),
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let [search_area, main_area, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        // Search bar
        let search_title = match self.mode {
            Mode::Query => " Search (Enter to run, Esc to cancel) ",
            Mode::Browse => " Search (/ to edit) ",
        };
        let search_style = Style::default().fg(self.theme.get_color(&self.theme.ui.search_input));
        let search = Paragraph::new(self.input.as_str()).style(search_style).block(
            Block::default()
                .borders(Borders::ALL)
                .title(search_title)
                .border_style(
                    Style::default().fg(self.theme.get_color(&self.theme.ui.search_border)),
                ),
        );
        frame.render_widget(search, search_area);
        if self.mode == Mode::Query {
            frame.set_cursor_position((
                search_area.x + 1 + self.input.width() as u16,
                search_area.y + 1,
            ));
        }

        let [list_area, context_area] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(main_area);

        self.draw_results(frame, list_area);
        self.draw_context(frame, context_area);

        // Footer: status on the left, key help on the right
        let case_indicator = if self.case_sensitive { " [case] " } else { " " };
        let footer = Line::from(vec![
            Span::styled(
                self.status_line(),
                Style::default().fg(self.theme.get_color(&self.theme.ui.status_fg)),
            ),
            Span::styled(
                format!(
                    "{case_indicator}| / search  n/p match  ↑/↓ location  c case  q quit"
                ),
                Style::default().fg(self.theme.get_color(&self.theme.ui.help_fg)),
            ),
        ]);
        frame.render_widget(Paragraph::new(footer), footer_area);
    }

    fn draw_results(&mut self, frame: &mut Frame, area: Rect) {
        let ui = &self.theme.ui;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Results ")
            .border_style(Style::default().fg(self.theme.get_color(&ui.results_border)));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.list_height = inner.height;
        self.scroll_selection_into_view();

        let list = ResultsList::new(&self.line_map, &self.theme)
            .selected(self.selected_location)
            .scroll(self.list_scroll);
        frame.render_widget(list, inner);
    }

    fn draw_context(&mut self, frame: &mut Frame, area: Rect) {
        let ui = &self.theme.ui;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.document.title))
            .border_style(Style::default().fg(self.theme.get_color(&ui.context_border)));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let placeholder = match &self.session {
            Some(_) => "No matches found",
            None => "Ready to search. Press / and type a query.",
        };
        let view = self.current_view();
        frame.render_widget(ContextPane::new(view.as_ref(), &self.theme, placeholder), inner);
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key)?;
                    }
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }
}

/// Start the TUI, optionally pre-running a query from the CLI.
pub fn run(document: Document, case_sensitive: bool, initial_query: Option<String>) -> Result<()> {
    let theme = Theme::load().unwrap_or_default();
    let mut app = App::new(document, theme, case_sensitive);
    if let Some(query) = initial_query {
        app.run_search(&query)?;
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.event_loop(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
