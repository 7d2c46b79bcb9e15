//! Source pane rendering with token-driven highlighting
//!
//! Lines are colored from the recorded token stream rather than a separate
//! highlighter, so what the pane shows is exactly what the scanner produced.
//!
//! # Features
//!
//! - Per-category token colors; text between tokens (comments) is dimmed
//! - The current token is shown on a raised background, its line marked
//! - Once stepping reaches the failing token, its line turns red
//! - The current line is kept at a fixed visual row while stepping

use super::utils::{border_style, token_style};
use crate::history::ScanHistory;
use crate::parser::token::{SourcePos, Token};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Scroll state for the source pane
pub struct SourceScrollState {
    pub offset: usize,
    pub target_line_row: Option<usize>,
}

/// Everything the source pane needs for one frame
pub struct SourceRenderData<'a> {
    pub source_code: &'a str,
    pub history: &'a ScanHistory,
    pub position: usize,
    pub is_focused: bool,
}

/// Split one source line into styled spans using the tokens that lie on it.
///
/// Columns are 1-based character columns; `end_col` is exclusive.
fn highlight_line<'t>(
    line: &str,
    line_num: usize,
    tokens: impl Iterator<Item = &'t Token>,
    current: Option<SourcePos>,
) -> Line<'static> {
    let chars: Vec<char> = line.chars().map(|c| if c == '\t' { ' ' } else { c }).collect();
    let gap_style = Style::default().fg(DEFAULT_THEME.comment);
    let mut spans = Vec::new();
    let mut cursor = 0;

    for token in tokens.filter(|t| t.pos.start_line == line_num && !t.pos.is_empty()) {
        let start = token.pos.start_col.saturating_sub(1).clamp(cursor, chars.len());
        let end = if token.pos.end_line == line_num {
            token.pos.end_col.saturating_sub(1).clamp(start, chars.len())
        } else {
            chars.len()
        };

        if start > cursor {
            spans.push(Span::styled(chars[cursor..start].iter().collect::<String>(), gap_style));
        }

        let mut style = token_style(token.kind);
        if current == Some(token.pos) {
            style = style
                .bg(DEFAULT_THEME.current_token_bg)
                .add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(chars[start..end].iter().collect::<String>(), style));
        cursor = end;
    }

    if cursor < chars.len() {
        spans.push(Span::styled(chars[cursor..].iter().collect::<String>(), gap_style));
    }

    Line::from(spans)
}

/// Lines holding a lexical warning raised at or before `position`
fn warning_lines(history: &ScanHistory, position: usize) -> Vec<usize> {
    let mut lines: Vec<usize> = history
        .warnings_until(position)
        .map(|warning| warning.pos().start_line)
        .collect();
    lines.dedup();
    lines
}

/// Render the source pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    data: SourceRenderData<'_>,
    scroll_state: &mut SourceScrollState,
) {
    let block = Block::default()
        .title(" Source ")
        .borders(Borders::ALL)
        .border_style(border_style(data.is_focused));

    let lines: Vec<&str> = data.source_code.lines().collect();
    let total_lines = lines.len();

    let current_pos = data.history.get(data.position).map(|step| step.token.pos);
    let current_line = current_pos.map_or(0, |pos| pos.start_line);

    let error_line = data
        .history
        .failure_index()
        .filter(|&index| data.position >= index)
        .and_then(|index| data.history.get(index))
        .map(|step| step.token.pos.start_line);

    let warned = warning_lines(data.history, data.position);

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1

    // Center the current line on first render
    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    if current_line > 0 && current_line <= total_lines {
        let offset = (current_line - 1).saturating_sub(target_row);
        scroll_state.offset = super::utils::clamp_scroll(offset, total_lines, visible_height);
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_current = line_num == current_line;
            let is_error = error_line == Some(line_num);
            let line_num_str = format!("{:4} ", line_num);

            let num_style = if is_error {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else if warned.contains(&line_num) {
                Style::default().fg(DEFAULT_THEME.warning)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut content = highlight_line(line, line_num, data.history.tokens(), current_pos);

            if is_error {
                // Failing line: white on red overrides token colors
                let error_style = Style::default()
                    .bg(DEFAULT_THEME.error)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD);
                for span in &mut content.spans {
                    span.style = error_style;
                }
            } else if is_current {
                for span in &mut content.spans {
                    if span.style.bg.is_none() {
                        span.style = span.style.bg(DEFAULT_THEME.current_line_bg);
                    }
                }
            }

            let mut final_spans = vec![Span::styled(line_num_str, num_style)];
            final_spans.extend(content.spans);
            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::tokenize;

    fn span_texts(line: &Line<'_>) -> Vec<String> {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_highlight_splits_on_token_boundaries() {
        let source = "int x = 10; // note";
        let (tokens, _) = tokenize(source);
        let line = highlight_line(source, 1, tokens.iter(), None);
        assert_eq!(
            span_texts(&line),
            vec!["int", " ", "x", " ", "=", " ", "10", ";", " // note"]
        );
    }

    #[test]
    fn test_highlight_marks_current_token() {
        let source = "f(a);";
        let (tokens, _) = tokenize(source);
        let current = tokens[2].pos;
        let line = highlight_line(source, 1, tokens.iter(), Some(current));
        assert_eq!(line.spans[2].content, "a");
        assert_eq!(line.spans[2].style.bg, Some(DEFAULT_THEME.current_token_bg));
        assert_eq!(line.spans[0].style.bg, None);
    }

    #[test]
    fn test_warning_lines_follow_position() {
        let history = ScanHistory::record("int x;\nbool y = \"\\q\";\n/* open");
        assert!(warning_lines(&history, 0).is_empty());

        let last = history.len() - 1;
        assert_eq!(warning_lines(&history, last), vec![2, 3]);
    }

    #[test]
    fn test_highlight_ignores_other_lines() {
        let source = "int x;\nbool y;";
        let (tokens, _) = tokenize(source);
        let line = highlight_line("bool y;", 2, tokens.iter(), None);
        assert_eq!(span_texts(&line), vec!["bool", " ", "y", ";"]);
    }
}
