//! Status bar rendering with keybindings and state indicators

use crate::history::Outcome;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// What the status bar shows for one frame
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub position: usize,
    pub total_tokens: usize,
    pub outcome: &'a Outcome,
    /// The failing token has been reached
    pub at_failure: bool,
    pub is_playing: bool,
    /// Lexical warnings in the whole stream
    pub warning_count: usize,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData<'_>) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let badge_bg = if data.at_failure {
        DEFAULT_THEME.error
    } else {
        DEFAULT_THEME.primary
    };

    let mut left_spans = vec![
        Span::styled(
            format!(" Token {}/{} ", data.position + 1, data.total_tokens),
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if data.at_failure {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    if data.warning_count > 0 {
        left_spans.push(Span::styled(
            format!(" ⚠ {} ", data.warning_count),
            Style::default()
                .bg(DEFAULT_THEME.warning)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" ←/→ ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" play ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ↵ / ⌫ ", key_style),
        Span::styled(" end/start ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let is_at_end = data.position + 1 >= data.total_tokens;
    let indicator = if data.is_playing {
        Some((" ▶ PLAYING ", DEFAULT_THEME.secondary))
    } else if is_at_end {
        match data.outcome {
            Outcome::Accepted => Some((" ACCEPTED ", DEFAULT_THEME.success)),
            Outcome::Rejected(_) => Some((" REJECTED ", DEFAULT_THEME.error)),
        }
    } else if data.position == 0 {
        Some((" START ", DEFAULT_THEME.success))
    } else {
        None
    };

    if let Some((label, bg)) = indicator {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            label,
            Style::default()
                .bg(bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
