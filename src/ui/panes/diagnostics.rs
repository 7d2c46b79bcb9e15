//! Diagnostics pane: lexical warnings seen so far plus the parse verdict

use super::utils::border_style;
use crate::history::{Outcome, ScanHistory};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

/// Lines for the pane, without styling concerns of the frame
fn diagnostic_lines(history: &ScanHistory, position: usize) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = history
        .warnings_until(position)
        .map(|warning| {
            Line::from(vec![
                Span::styled("warning: ", Style::default().fg(DEFAULT_THEME.warning)),
                Span::styled(warning.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            ])
        })
        .collect();

    // The verdict belongs to the whole stream; reveal it at the failing token or the end
    let at_end = position + 1 >= history.len();
    match history.outcome() {
        Outcome::Rejected(diagnostic)
            if at_end || history.failure_index().is_some_and(|index| position >= index) =>
        {
            lines.push(Line::from(Span::styled(
                diagnostic.to_string(),
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        Outcome::Accepted if at_end => {
            lines.push(Line::from(Span::styled(
                "program accepted",
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        _ => {}
    }

    lines
}

/// Render the diagnostics pane
pub fn render_diagnostics_pane(
    frame: &mut Frame,
    area: Rect,
    history: &ScanHistory,
    position: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Diagnostics ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let lines = diagnostic_lines(history, position);
    if lines.is_empty() {
        let paragraph = Paragraph::new("(nothing yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    *scroll_offset = super::utils::clamp_scroll(*scroll_offset, lines.len(), visible_height);

    let paragraph = Paragraph::new(lines)
        .block(block.padding(Padding::new(1, 0, 0, 0)))
        .scroll((u16::try_from(*scroll_offset).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(history: &ScanHistory, position: usize) -> Vec<String> {
        diagnostic_lines(history, position)
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.to_string()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_verdict_only_at_end_when_accepted() {
        let history = ScanHistory::record("int x;");
        assert!(texts(&history, 0).is_empty());
        assert_eq!(texts(&history, history.len() - 1), vec!["program accepted"]);
    }

    #[test]
    fn test_rejection_revealed_at_failing_token() {
        let history = ScanHistory::record("int ; int y;");
        assert!(texts(&history, 0).is_empty());
        assert_eq!(
            texts(&history, 1),
            vec!["ERROR: \"<id>\" expected here at line 1, column 5"]
        );
    }

    #[test]
    fn test_warnings_accumulate() {
        let history = ScanHistory::record("int x; /* open");
        let last = history.len() - 1;
        let lines = texts(&history, last);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("warning: unterminated multi-line comment"));
        assert_eq!(lines[1], "program accepted");
    }
}
