//! Main TUI application state and logic

use crate::history::ScanHistory;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};

use super::panes::{
    SourceRenderData, SourceScrollState, StatusRenderData, render_diagnostics_pane,
    render_source_pane, render_status_bar, render_tokens_pane,
};

/// Delay between tokens in auto-play mode
const PLAY_INTERVAL: Duration = Duration::from_millis(250);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
    Diagnostics,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> tokens -> diagnostics)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Diagnostics,
            FocusedPane::Diagnostics => FocusedPane::Source,
        }
    }
}

/// The main application state
pub struct App {
    /// Recorded token stream and verdict
    pub history: ScanHistory,

    /// The source text being stepped through
    pub source_code: String,

    /// Index of the current token in `history`
    pub position: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll state
    pub source_scroll: SourceScrollState,
    pub tokens_scroll: usize,
    pub diagnostics_scroll: usize,

    /// Token list keeps the current token in view until the user scrolls it
    pub follow_tokens: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Option<Instant>,
}

impl App {
    /// Create a new app positioned at the first token
    pub fn new(history: ScanHistory, source_code: String) -> Self {
        App {
            history,
            source_code,
            position: 0,
            focused_pane: FocusedPane::Source,
            source_scroll: SourceScrollState {
                offset: 0,
                target_line_row: None,
            },
            tokens_scroll: 0,
            diagnostics_scroll: 0,
            follow_tokens: true,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: None,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= PLAY_INTERVAL {
                if self.advance() {
                    self.status_message = "Playing...".to_string();
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Poll with a timeout so auto-play keeps ticking
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn last_index(&self) -> usize {
        self.history.len().saturating_sub(1)
    }

    /// The failing token has been reached
    pub fn at_failure(&self) -> bool {
        self.history
            .failure_index()
            .is_some_and(|index| self.position >= index)
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Right column: Tokens (top) | Diagnostics (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[1]);

        render_source_pane(
            frame,
            columns[0],
            SourceRenderData {
                source_code: &self.source_code,
                history: &self.history,
                position: self.position,
                is_focused: self.focused_pane == FocusedPane::Source,
            },
            &mut self.source_scroll,
        );

        render_tokens_pane(
            frame,
            right_rows[0],
            &self.history,
            self.position,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
            self.follow_tokens,
        );

        render_diagnostics_pane(
            frame,
            right_rows[1],
            &self.history,
            self.position,
            self.focused_pane == FocusedPane::Diagnostics,
            &mut self.diagnostics_scroll,
        );

        render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                message: &self.status_message,
                position: self.position,
                total_tokens: self.history.len(),
                outcome: self.history.outcome(),
                at_failure: self.at_failure(),
                is_playing: self.is_playing,
                warning_count: self.history.warning_count(),
            },
        );
    }

    /// Handle keyboard events
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N tokens directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1);
                let mut stepped = 0;
                for _ in 0..n {
                    if !self.advance() {
                        break;
                    }
                    stepped += 1;
                }
                self.status_message = format!("Stepped forward {} token(s)", stepped);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::Tokens => {
                    self.follow_tokens = false;
                    self.tokens_scroll = self.tokens_scroll.saturating_sub(1);
                }
                FocusedPane::Diagnostics => {
                    self.diagnostics_scroll = self.diagnostics_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::Tokens => {
                    self.follow_tokens = false;
                    self.tokens_scroll = self.tokens_scroll.saturating_add(1);
                }
                FocusedPane::Diagnostics => {
                    self.diagnostics_scroll = self.diagnostics_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (200ms debounce against key repeat)
                let debounced = self
                    .last_space_press
                    .map_or(true, |at| at.elapsed() >= Duration::from_millis(200));
                if debounced {
                    self.last_space_press = Some(Instant::now());
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(PLAY_INTERVAL)
                            .unwrap_or_else(Instant::now);
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.jump_to(self.last_index());
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.jump_to(0);
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    /// Move one token forward; false at EOF
    fn advance(&mut self) -> bool {
        if self.position >= self.last_index() {
            return false;
        }
        self.jump_to(self.position + 1);
        true
    }

    fn jump_to(&mut self, index: usize) {
        self.position = index.min(self.last_index());
        self.follow_tokens = true;
    }

    fn step_forward(&mut self) {
        if self.advance() {
            self.status_message = self.describe_current("Stepped forward");
        } else {
            self.status_message = "Cannot step forward: at end of input".to_string();
        }
    }

    fn step_backward(&mut self) {
        if self.position == 0 {
            self.status_message = "Cannot step backward: at first token".to_string();
            return;
        }
        self.jump_to(self.position - 1);
        self.status_message = self.describe_current("Stepped backward");
    }

    fn describe_current(&self, action: &str) -> String {
        match self.history.get(self.position) {
            Some(step) => format!("{action}: {}", step.token),
            None => action.to_string(),
        }
    }
}
