//! Token list pane: one row per scanned token, current token selected

use super::utils::{border_style, clamp_scroll, scroll_to_show, token_style};
use crate::history::ScanHistory;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render the token list pane.
///
/// `scroll_offset` follows the current token unless the user scrolled it away.
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    history: &ScanHistory,
    position: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
    follow_current: bool,
) {
    let block = Block::default()
        .title(format!(" Tokens ({}) ", history.len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if follow_current {
        *scroll_offset = scroll_to_show(*scroll_offset, position, visible_height);
    }
    *scroll_offset = clamp_scroll(*scroll_offset, history.len(), visible_height);

    let failure = history.failure_index();

    let items: Vec<ListItem> = history
        .steps()
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, step)| {
            let token = &step.token;
            let marker = if idx == position { "▶ " } else { "  " };

            let mut spans = vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.secondary)),
                Span::styled(
                    format!("{:<14}", token.pos.to_string()),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(format!("{:<16}", token.kind.spelling()), token_style(token.kind)),
            ];
            if !token.lexeme.is_empty() {
                spans.push(Span::styled(
                    format!("{:?}", token.lexeme),
                    Style::default().fg(DEFAULT_THEME.fg),
                ));
            }
            if !step.warnings.is_empty() {
                spans.push(Span::styled(" ⚠", Style::default().fg(DEFAULT_THEME.warning)));
            }
            if failure == Some(idx) && position >= idx {
                spans.push(Span::styled(
                    " ✗",
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                ));
            }

            let mut item = ListItem::new(Line::from(spans));
            if idx == position {
                item = item.style(Style::default().bg(DEFAULT_THEME.current_line_bg));
            }
            item
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
