//! Styling helpers shared by the panes

use crate::parser::token::TokenKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style for a pane, brighter when focused
pub(super) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Foreground style for a token by category
pub(super) fn token_style(kind: TokenKind) -> Style {
    if kind.is_type_specifier() {
        return Style::default().fg(DEFAULT_THEME.type_name);
    }
    if kind.is_literal() {
        return Style::default().fg(DEFAULT_THEME.literal);
    }

    match kind {
        TokenKind::If
        | TokenKind::Else
        | TokenKind::While
        | TokenKind::For
        | TokenKind::Return => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        TokenKind::Id => Style::default().fg(DEFAULT_THEME.identifier),
        TokenKind::LeftBrace
        | TokenKind::RightBrace
        | TokenKind::LeftBracket
        | TokenKind::RightBracket
        | TokenKind::LeftParen
        | TokenKind::RightParen => Style::default().fg(DEFAULT_THEME.primary),
        TokenKind::Comma | TokenKind::Semicolon => Style::default().fg(DEFAULT_THEME.fg),
        TokenKind::Eof => Style::default().fg(DEFAULT_THEME.comment),
        TokenKind::Error => Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(DEFAULT_THEME.operator),
    }
}

/// Clamp a scroll offset so the last page stays full
pub(super) fn clamp_scroll(offset: usize, total: usize, visible: usize) -> usize {
    if total > visible {
        offset.min(total - visible)
    } else {
        0
    }
}

/// Smallest offset change that brings `row` into the visible window
pub(super) fn scroll_to_show(offset: usize, row: usize, visible: usize) -> usize {
    if row < offset {
        row
    } else if row >= offset + visible {
        row + 1 - visible
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        assert_eq!(clamp_scroll(10, 5, 20), 0);
        assert_eq!(clamp_scroll(10, 25, 20), 5);
        assert_eq!(clamp_scroll(3, 25, 20), 3);
    }

    #[test]
    fn test_scroll_to_show() {
        assert_eq!(scroll_to_show(5, 2, 10), 2);
        assert_eq!(scroll_to_show(0, 12, 10), 3);
        assert_eq!(scroll_to_show(4, 8, 10), 4);
    }

    #[test]
    fn test_token_categories() {
        assert_eq!(token_style(TokenKind::Int).fg, Some(DEFAULT_THEME.type_name));
        assert_eq!(token_style(TokenKind::BoolLiteral).fg, Some(DEFAULT_THEME.literal));
        assert_eq!(token_style(TokenKind::LessEq).fg, Some(DEFAULT_THEME.operator));
    }
}
