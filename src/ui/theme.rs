use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Sea green
    pub secondary: Color, // Pastel pink
    pub gradients: [Color; 3],
    pub title: Color,
    pub help: Color,
    pub comment: Color,
    pub success: Color,
    pub legend: Color,
    pub accent: Color,
    pub border: Color,
    pub button: Color,
    pub button_active: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(159, 226, 191),
    secondary: Color::Rgb(248, 200, 220),
    gradients: [
        Color::Rgb(128, 128, 128),
        Color::Rgb(160, 160, 160),
        Color::Rgb(192, 192, 192),
    ],
    title: Color::Rgb(150, 121, 105),   // Taupe
    help: Color::Rgb(196, 164, 132),    // Light brown
    comment: Color::Rgb(108, 112, 134), // Grey
    success: Color::Rgb(166, 227, 161),
    legend: Color::Rgb(128, 0, 0), // Maroon
    accent: Color::Rgb(250, 179, 135), // Orange
    border: Color::Rgb(108, 112, 134),
    button: Color::Rgb(196, 164, 132),
    button_active: Color::Rgb(249, 226, 175), // Yellow for the current selection
    status_bg: Color::Rgb(50, 50, 70),
};
