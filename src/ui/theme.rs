use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color, // Blue, push phase
    pub accent: Color,  // Orange, pop phase
    pub comment: Color, // Grey
    pub success: Color, // Green
    pub error: Color,   // Red
    pub border_active: Color,
    pub border_normal: Color,
    pub highlight_bg: Color,
    pub title: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250), // Blue
    accent: Color::Rgb(250, 179, 135),  // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_active: Color::Rgb(249, 226, 175), // Yellow border for the active panel
    border_normal: Color::Rgb(108, 112, 134), // Grey border for normal
    highlight_bg: Color::Rgb(50, 50, 70),     // Slightly lighter BG for highlighted cells
    title: Color::Rgb(245, 194, 231),         // Pink
};
