//! Paints a [`RevealSurface`] into a terminal buffer.
//!
//! Each cell samples the logical point at its center. Cells no attached layer
//! covers are left untouched so whatever was drawn underneath shows through.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthChar;

use reveal_engine::{GradientLayer, Point, RevealSurface};

use crate::theme::{RenderOptions, arrow_glyph, to_color};

/// Logical extent of one terminal cell for a surface drawn into `area`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CellScale {
    origin: Point,
    x: f64,
    y: f64,
}

impl CellScale {
    fn new(surface: &RevealSurface, area: Rect) -> Option<Self> {
        let bounds = surface.bounds();
        if area.is_empty() || bounds.is_empty() {
            return None;
        }
        Some(Self {
            origin: Point::new(bounds.x, bounds.y),
            x: bounds.width / f64::from(area.width),
            y: bounds.height / f64::from(area.height),
        })
    }

    fn sample(&self, col: u16, row: u16) -> Point {
        Point::new(
            self.origin.x + (f64::from(col) + 0.5) * self.x,
            self.origin.y + (f64::from(row) + 0.5) * self.y,
        )
    }

    fn column_of(&self, x: f64) -> f64 {
        (x - self.origin.x) / self.x
    }

    fn row_of(&self, y: f64) -> f64 {
        (y - self.origin.y) / self.y
    }
}

/// Read-only view of a surface.
pub struct RevealView<'a> {
    surface: &'a RevealSurface,
    options: RenderOptions,
}

impl<'a> RevealView<'a> {
    #[must_use]
    pub fn new(surface: &'a RevealSurface) -> Self {
        Self {
            surface,
            options: RenderOptions::default(),
        }
    }

    #[must_use]
    pub fn options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    fn paint_layers(&self, scale: CellScale, area: Rect, buf: &mut Buffer) {
        let layers = self.surface.paint_order();
        for row in 0..area.height {
            for col in 0..area.width {
                let point = scale.sample(col, row);
                let Some(layer) = layers.iter().rev().find(|layer| layer.covers(point)) else {
                    continue;
                };
                let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) else {
                    continue;
                };
                cell.set_bg(layer_color(layer, point));

                let indicator = layer.indicator();
                let glyph = indicator.glyph_center();
                if contains_cell(scale, col, row, glyph) {
                    cell.set_symbol(arrow_glyph(indicator.rotation(), self.options))
                        .set_fg(to_color(indicator.tint()));
                } else {
                    cell.set_symbol(" ");
                }
            }
        }
    }

    fn paint_label(&self, scale: CellScale, area: Rect, buf: &mut Buffer) {
        let label = self.surface.label();
        let center = label.center();
        let row = scale.row_of(center.y).floor();
        if row < 0.0 || row >= f64::from(area.height) {
            return;
        }
        let row = area.y + row as u16;

        let width: usize = label
            .text()
            .chars()
            .map(|ch| ch.width().unwrap_or(0))
            .sum();
        let mut col = (scale.column_of(center.x) - width as f64 / 2.0).round() as i64;
        let fg = to_color(label.color());

        for ch in label.text().chars() {
            let advance = ch.width().unwrap_or(0) as i64;
            if (0..i64::from(area.width)).contains(&col)
                && let Some(cell) = buf.cell_mut((area.x + col as u16, row))
            {
                cell.set_char(ch)
                    .set_fg(fg)
                    .modifier
                    .insert(Modifier::BOLD);
            }
            col += advance;
        }
    }
}

impl Widget for RevealView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(scale) = CellScale::new(self.surface, area) else {
            return;
        };
        self.paint_layers(scale, area, buf);
        self.paint_label(scale, area, buf);
    }
}

/// Gradient, track or badge color of `layer` at `point`.
fn layer_color(layer: &GradientLayer, point: Point) -> Color {
    let indicator = layer.indicator();
    if indicator.badge().contains(point) {
        to_color(indicator.badge_color())
    } else if indicator.track().contains(point) {
        to_color(indicator.track_color())
    } else {
        to_color(layer.color_at(point.x))
    }
}

fn contains_cell(scale: CellScale, col: u16, row: u16, point: Point) -> bool {
    scale.column_of(point.x).floor() as i64 == i64::from(col)
        && scale.row_of(point.y).floor() as i64 == i64::from(row)
}
