//! TUI dashboard using ratatui.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use testdash_core::types::LogLevel;
use tokio::sync::mpsc;

use crate::controller::{DashboardState, UiEvent};

/// TUI dashboard.
pub struct Dashboard {
    refresh_ms: u64,
}

impl Dashboard {
    /// Create a new dashboard.
    pub fn new(refresh_ms: u64) -> Self {
        Self { refresh_ms }
    }

    /// Run the dashboard until the user quits.
    ///
    /// Renders from `get_state` snapshots and forwards key input to the
    /// controller through `ui`.
    pub fn run<F>(&self, mut get_state: F, ui: mpsc::UnboundedSender<UiEvent>) -> io::Result<()>
    where
        F: FnMut() -> DashboardState,
    {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_loop(&mut terminal, &mut get_state, &ui);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        res
    }

    fn run_loop<F>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        get_state: &mut F,
        ui: &mpsc::UnboundedSender<UiEvent>,
    ) -> io::Result<()>
    where
        F: FnMut() -> DashboardState,
    {
        loop {
            let state = get_state();
            terminal.draw(|f| self.ui(f, &state))?;

            if event::poll(Duration::from_millis(self.refresh_ms))? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            let _ = ui.send(UiEvent::Quit);
                            return Ok(());
                        }
                        KeyCode::Char('r') | KeyCode::Enter => {
                            let _ = ui.send(UiEvent::RunTest);
                        }
                        KeyCode::Down | KeyCode::Char('j') => {
                            let _ = ui.send(UiEvent::SelectNext);
                        }
                        KeyCode::Up | KeyCode::Char('k') => {
                            let _ = ui.send(UiEvent::SelectPrev);
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    fn ui(&self, frame: &mut Frame, state: &DashboardState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(10),   // Body
            ])
            .split(frame.area());

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(chunks[1]);

        self.render_header(frame, chunks[0]);
        self.render_tests(frame, body[0], state);
        self.render_logs(frame, body[1], state);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                "Test Automation Dashboard",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | 'r' run, \u{2191}/\u{2193} select, 'q' quit"),
        ])])
        .block(Block::default().borders(Borders::ALL).title("System"));
        frame.render_widget(header, area);
    }

    fn render_tests(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let items: Vec<ListItem> = state
            .tests
            .iter()
            .map(|test| {
                let style = if test.selected {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let marker = if test.selected { "\u{25b6} " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(test.name.clone(), style),
                ]))
            })
            .collect();

        let list =
            List::new(items).block(Block::default().borders(Borders::ALL).title("Tests"));
        frame.render_widget(list, area);
    }

    fn render_logs(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let header_cells = ["Time", "Level", "Step", "Message"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD)));
        let header = Row::new(header_cells).height(1);

        // Pinned to the newest entry: render the window ending at the
        // last row.
        let visible = area.height.saturating_sub(3) as usize;
        let offset = tail_offset(state.entries.len(), visible);

        let rows = state.entries[offset..].iter().map(|entry| {
            Row::new(vec![
                Cell::from(entry.time.clone()),
                Cell::from(entry.level.to_string())
                    .style(Style::default().fg(level_color(entry.level))),
                Cell::from(entry.step.clone()),
                Cell::from(entry.message.clone()),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(9),
                Constraint::Length(8),
                Constraint::Length(10),
                Constraint::Min(20),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Execution Log"));

        frame.render_widget(table, area);
    }
}

fn level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Info => Color::Green,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Error => Color::Red,
        LogLevel::Debug => Color::DarkGray,
        LogLevel::Unknown => Color::White,
    }
}

/// First visible row index when the view is pinned to the tail.
fn tail_offset(len: usize, visible: usize) -> usize {
    len.saturating_sub(visible.max(1))
}
