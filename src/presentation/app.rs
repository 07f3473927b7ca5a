// Terminal dashboard application - input handling and visibility toggling
use crate::application::controller::{DashboardController, DashboardState, RenderOutcome};
use crate::application::json_fetcher::FetchError;
use crate::domain::user::UserSummary;
use crate::presentation::chart_backend::{ChartBackend, RatatuiChartBackend};
use crate::presentation::selector::UserSelector;
use anyhow::Context;
use crossterm::{
    event::{Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

pub struct DashboardApp {
    selector: UserSelector,
    controller: DashboardController,
    chart_backend: RatatuiChartBackend,
    tick: Duration,
}

impl DashboardApp {
    pub fn new(controller: DashboardController, tick_ms: u64) -> Self {
        Self {
            selector: UserSelector::new(),
            controller,
            chart_backend: RatatuiChartBackend,
            tick: Duration::from_millis(tick_ms),
        }
    }

    /// Take over the terminal and run until the user quits. `users_rx`
    /// delivers the one-shot user list fetch; `outcomes_rx` delivers render
    /// completions from the controller's spawned fetches.
    pub async fn run(
        mut self,
        users_rx: mpsc::Receiver<Result<Vec<UserSummary>, FetchError>>,
        outcomes_rx: mpsc::Receiver<RenderOutcome>,
    ) -> anyhow::Result<()> {
        enable_raw_mode().context("failed to enter raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let keys = spawn_input_thread();
        let result = self
            .event_loop(&mut terminal, keys, users_rx, outcomes_rx)
            .await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        mut keys: mpsc::Receiver<KeyEvent>,
        mut users_rx: mpsc::Receiver<Result<Vec<UserSummary>, FetchError>>,
        mut outcomes_rx: mpsc::Receiver<RenderOutcome>,
    ) -> anyhow::Result<()> {
        let mut tick = tokio::time::interval(self.tick);
        loop {
            terminal.draw(|frame| self.draw(frame))?;

            tokio::select! {
                _ = tick.tick() => {}
                Some(key) = keys.recv() => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Some(outcome) = outcomes_rx.recv() => {
                    self.controller.apply(outcome);
                }
                Some(result) = users_rx.recv() => {
                    match result {
                        Ok(users) => self.selector.populate(users),
                        // The selector stays behind its loading label.
                        Err(e) => tracing::error!("user list fetch failed: {}", e),
                    }
                }
            }
        }
    }

    /// Returns true when the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Down => self.selector.highlight_next(),
            KeyCode::Up => self.selector.highlight_previous(),
            KeyCode::Enter => {
                // Committing with nothing highlighted selects nothing.
                if let Some(user) = self.selector.highlighted().cloned() {
                    self.controller.select(user);
                }
            }
            _ => {}
        }
        false
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(28), Constraint::Min(0)])
            .split(frame.area());

        self.draw_selector(frame, chunks[0]);
        self.draw_chart_area(frame, chunks[1]);
    }

    fn draw_selector(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Users");

        if !self.selector.is_visible() {
            let loading = Paragraph::new("Loading...")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(loading, area);
            return;
        }

        let items: Vec<ListItem> = self
            .selector
            .options()
            .iter()
            .map(|user| ListItem::new(user.name.clone()))
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, area, self.selector.list_state());
    }

    fn draw_chart_area(&mut self, frame: &mut Frame, area: Rect) {
        // The avatar line appears once the fetch has settled, success or
        // not, mirroring the page this replaces.
        let title = match (self.controller.state(), self.controller.selected()) {
            (DashboardState::Rendered(_) | DashboardState::Empty, Some(user)) => {
                user.header_label()
            }
            _ => "Presence".to_string(),
        };
        let mut block = Block::default().borders(Borders::ALL).title(title);
        if let DashboardState::Rendered(view) = self.controller.state() {
            if let Some(x_title) = &view.x_title {
                block = block.title_bottom(x_title.clone());
            }
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match self.controller.state() {
            DashboardState::Idle => {
                frame.render_widget(
                    Paragraph::new("Select a user and press Enter.")
                        .style(Style::default().fg(Color::DarkGray)),
                    inner,
                );
            }
            DashboardState::Loading => {
                frame.render_widget(
                    Paragraph::new("Loading...").style(Style::default().fg(Color::DarkGray)),
                    inner,
                );
            }
            DashboardState::Empty => {
                frame.render_widget(
                    Paragraph::new("No data to display.")
                        .style(Style::default().add_modifier(Modifier::BOLD)),
                    inner,
                );
            }
            DashboardState::Rendered(view) => {
                self.chart_backend.draw(view, frame, inner);
            }
        }
    }
}

/// Blocking crossterm reads happen on their own thread; key presses are
/// forwarded into the async event loop.
fn spawn_input_thread() -> mpsc::Receiver<KeyEvent> {
    let (tx, rx) = mpsc::channel(16);
    std::thread::spawn(move || {
        loop {
            match crossterm::event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx.blocking_send(key).is_err() {
                        return;
                    }
                }
                Ok(_) => {}
                Err(_) => return,
            }
        }
    });
    rx
}
