//! Colors and glyphs for the demo host chrome and the reveal overlay.
//!
//! The chat list uses the Kanagawa Wave palette; the overlay takes its colors
//! from the surface's [`RevealTheme`](reveal_engine::RevealTheme).

use ratatui::style::{Color, Modifier, Style};

use reveal_engine::Rgb;

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const ORANGE: Color = Color::Rgb(255, 160, 102); // surimiOrange
}

/// Rendering switches read from the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Use ASCII-only glyphs for arrows and bullets.
    pub ascii_only: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub peach: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            peach: colors::ORANGE,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

/// Terminal color for an overlay color.
#[must_use]
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// ASCII/Unicode glyphs. Arrows run clockwise from straight up in 45 degree
/// steps.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub arrows: [&'static str; 8],
    pub bullet: &'static str,
    pub archive: &'static str,
}

#[must_use]
pub fn glyphs(options: RenderOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            arrows: ["^", "/", ">", "\\", "v", "/", "<", "\\"],
            bullet: "*",
            archive: "[A]",
        }
    } else {
        Glyphs {
            arrows: ["↑", "↗", "→", "↘", "↓", "↙", "←", "↖"],
            bullet: "•",
            archive: "▣",
        }
    }
}

/// Arrow for a glyph rotated by `degrees` (0 points up, clockwise positive),
/// snapped to the nearest of eight directions.
#[must_use]
pub fn arrow_glyph(degrees: f64, options: RenderOptions) -> &'static str {
    let arrows = glyphs(options).arrows;
    let sector = ((degrees.rem_euclid(360.0) + 22.5) / 45.0).floor() as usize;
    arrows[sector % arrows.len()]
}

/// Pre-defined styles for the host chrome.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn list_title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn list_item(palette: &Palette) -> Style {
        Style::default().fg(palette.text_primary)
    }

    #[must_use]
    pub fn border(palette: &Palette) -> Style {
        Style::default().fg(palette.bg_border)
    }

    #[must_use]
    pub fn status_bar(palette: &Palette) -> Style {
        Style::default().bg(palette.bg_highlight).fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.peach)
            .add_modifier(Modifier::BOLD)
    }
}
