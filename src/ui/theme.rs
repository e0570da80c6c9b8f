use ratatui::style::{Color, Modifier, Style};

pub(crate) const RED: Color = Color::Rgb(243, 139, 168);
pub(crate) const BLUE: Color = Color::Rgb(137, 180, 250);
pub(crate) const GREEN: Color = Color::Rgb(166, 227, 161);
pub(crate) const ORANGE: Color = Color::Rgb(250, 179, 135);
pub(crate) const PURPLE: Color = Color::Rgb(203, 166, 247);
pub(crate) const YELLOW: Color = Color::Rgb(249, 226, 175);
pub(crate) const CYAN: Color = Color::Rgb(137, 220, 235);
pub(crate) const TEXT: Color = Color::Rgb(205, 214, 244);
pub(crate) const TEXT_DIM: Color = Color::Rgb(127, 132, 156);
pub(crate) const OVERLAY: Color = Color::Rgb(69, 71, 90);

/// Bar colors, assigned by position and cycled when there are more bars.
pub(crate) const PALETTE: [Color; 7] = [RED, BLUE, GREEN, ORANGE, PURPLE, YELLOW, CYAN];

pub(crate) fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

pub(crate) fn title_style() -> Style {
    Style::default()
        .fg(TEXT_DIM)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(OVERLAY)
}

pub(crate) fn value_style() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}
