use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub warning: Color,   // Yellow
    pub keyword: Color,
    pub type_name: Color,
    pub identifier: Color,
    pub literal: Color,
    pub operator: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub current_token_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    warning: Color::Rgb(249, 226, 175),
    keyword: Color::Rgb(137, 180, 250),        // Blue for keywords
    type_name: Color::Rgb(148, 226, 213),      // Cyan/teal for type specifiers
    identifier: Color::Rgb(205, 214, 244),
    literal: Color::Rgb(250, 179, 135),        // Orange for literals
    operator: Color::Rgb(245, 194, 231),       // Pink for operators
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),
    current_token_bg: Color::Rgb(88, 91, 112),
};
