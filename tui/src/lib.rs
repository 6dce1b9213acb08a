//! Terminal rendering and input for the archive reveal demo using ratatui.

mod input;
mod raster;
mod theme;

pub use input::{HostCommand, InputPump, command_for, handle_events};
pub use raster::RevealView;
pub use theme::{Glyphs, Palette, RenderOptions, arrow_glyph, glyphs, styles, to_color};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use reveal_engine::RevealSurface;

/// Everything the host draws in one frame.
pub struct Scene<'a> {
    pub surface: &'a RevealSurface,
    /// Terminal rows the overlay occupies above the list.
    pub overlay_rows: u16,
    pub chats: &'a [String],
    pub showing_archive: bool,
    pub options: RenderOptions,
}

/// Main draw function
pub fn draw(frame: &mut Frame, scene: &Scene<'_>) {
    let palette = Palette::standard();
    let glyphs = glyphs(scene.options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(scene.overlay_rows), // Reveal overlay
            Constraint::Min(1),                     // Chat list
            Constraint::Length(1),                  // Status bar
        ])
        .split(frame.area());

    if chunks[0].height > 0 {
        frame.render_widget(
            RevealView::new(scene.surface).options(scene.options),
            chunks[0],
        );
    }

    let title = if scene.showing_archive {
        format!(" {} Archived chats ", glyphs.archive)
    } else {
        " Chats ".to_string()
    };
    let items: Vec<ListItem> = scene
        .chats
        .iter()
        .map(|chat| {
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", glyphs.bullet), styles::key_hint(&palette)),
                Span::styled(chat.as_str(), styles::list_item(&palette)),
            ]))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(styles::border(&palette))
            .title(Span::styled(title, styles::list_title(&palette))),
    );
    frame.render_widget(list, chunks[1]);

    let status = Line::from(vec![
        Span::styled(format!(" {}/j ", glyphs.arrows[4]), styles::key_highlight(&palette)),
        Span::styled("pull  ", styles::key_hint(&palette)),
        Span::styled(format!("{}/k ", glyphs.arrows[0]), styles::key_highlight(&palette)),
        Span::styled("ease  ", styles::key_hint(&palette)),
        Span::styled("enter ", styles::key_highlight(&palette)),
        Span::styled("release  ", styles::key_hint(&palette)),
        Span::styled("r ", styles::key_highlight(&palette)),
        Span::styled("reset  ", styles::key_hint(&palette)),
        Span::styled("q ", styles::key_highlight(&palette)),
        Span::styled("quit  ", styles::key_hint(&palette)),
        Span::styled(
            format!("[{}]", scene.surface.state().name()),
            styles::key_hint(&palette),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(status).style(styles::status_bar(&palette)),
        chunks[2],
    );
}
