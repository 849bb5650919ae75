use ratatui::style::Color;

use crate::cli::Cli;

pub const DEFAULT_RAIN: Color = Color::Cyan;
pub const DEFAULT_LIGHTNING: Color = Color::Yellow;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub rain: Color,
    pub lightning: Color,
}

#[must_use]
pub fn theme_for(cli: &Cli) -> Theme {
    Theme {
        rain: color_from_name(&cli.rain_color, DEFAULT_RAIN),
        lightning: color_from_name(&cli.lightning_color, DEFAULT_LIGHTNING),
    }
}

/// The classic eight terminal colors; anything else gets the fallback rather
/// than an error.
#[must_use]
pub fn color_from_name(name: &str, fallback: Color) -> Color {
    match name.to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        _ => fallback,
    }
}
