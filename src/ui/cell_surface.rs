//! Character-cell rendering target. Surface pixels map onto terminal cells
//! at a fixed cell size; sprites become glyph blocks.

use crate::assets::SpriteId;
use crate::core::Vec2;
use crate::render::{Rgb, Surface};
use crate::ui::sprites::sprite_glyph;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

pub const CELL_WIDTH_PX: f64 = 16.0;
pub const CELL_HEIGHT_PX: f64 = 32.0;

/// Pointer displacement multiplier for cell-quantised mice. A one-column
/// move (16 px) becomes 32 px and clears the swing threshold. A purely
/// vertical move still has no horizontal component, so it never tilts.
pub const SWING_SCALE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub color: Rgb,
}

impl Cell {
    const EMPTY: Cell = Cell {
        symbol: ' ',
        color: Rgb(0, 0, 0),
    };
}

#[derive(Debug, Clone)]
pub struct CellSurface {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl CellSurface {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::EMPTY; cols as usize * rows as usize],
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        if cols != self.cols || rows != self.rows {
            *self = Self::new(cols, rows);
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(row as usize * self.cols as usize + col as usize).copied()
    }

    /// Centre of a cell in surface pixels.
    pub fn cell_center(col: u16, row: u16) -> Vec2 {
        Vec2::new(
            (col as f64 + 0.5) * CELL_WIDTH_PX,
            (row as f64 + 0.5) * CELL_HEIGHT_PX,
        )
    }

    fn to_cell(point: Vec2) -> (i64, i64) {
        (
            (point.x / CELL_WIDTH_PX).floor() as i64,
            (point.y / CELL_HEIGHT_PX).floor() as i64,
        )
    }

    fn put(&mut self, col: i64, row: i64, symbol: char, color: Rgb) {
        if col < 0 || row < 0 || col >= self.cols as i64 || row >= self.rows as i64 {
            return;
        }
        let index = row as usize * self.cols as usize + col as usize;
        self.cells[index] = Cell { symbol, color };
    }

    fn fill_cells(&mut self, from: Vec2, to: Vec2, symbol: char, color: Rgb) {
        let (c0, r0) = Self::to_cell(from);
        let (c1, r1) = Self::to_cell(to);
        for row in r0..=r1 {
            for col in c0..=c1 {
                self.put(col, row, symbol, color);
            }
        }
    }
}

impl Surface for CellSurface {
    fn width(&self) -> f64 {
        self.cols as f64 * CELL_WIDTH_PX
    }

    fn height(&self) -> f64 {
        self.rows as f64 * CELL_HEIGHT_PX
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    fn draw_sprite(&mut self, sprite: SpriteId, center: Vec2, size: Vec2, rotation: f64, opacity: f64) {
        if opacity <= 0.05 {
            return;
        }
        let (symbol, color) = sprite_glyph(sprite);

        // Long thin sprites (weapons) read better as a stroke along their axis.
        if size.x > size.y * 2.0 {
            let half = Vec2::from_angle(rotation, size.x / 2.0);
            self.draw_line(center - half, center + half, color);
            let (col, row) = Self::to_cell(center);
            self.put(col, row, symbol, color);
            return;
        }

        let half = size * 0.5;
        self.fill_cells(center - half, center + half, symbol, color);
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Rgb) {
        if radii.x <= 0.0 || radii.y <= 0.0 {
            return;
        }
        let (c0, r0) = Self::to_cell(center - radii);
        let (c1, r1) = Self::to_cell(center + radii);
        for row in r0..=r1 {
            for col in c0..=c1 {
                let p = Self::cell_center(col.max(0) as u16, row.max(0) as u16);
                let dx = (p.x - center.x) / radii.x;
                let dy = (p.y - center.y) / radii.y;
                if dx * dx + dy * dy <= 1.0 {
                    self.put(col, row, '░', color);
                }
            }
        }
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Rgb) {
        let (mut x0, mut y0) = Self::to_cell(from);
        let (x1, y1) = Self::to_cell(to);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let symbol = if dx == 0 {
            '│'
        } else if dy == 0 {
            '─'
        } else {
            '·'
        };

        loop {
            self.put(x0, y0, symbol, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn fill_rect(&mut self, top_left: Vec2, size: Vec2, color: Rgb) {
        if size.x <= 0.0 || size.y <= 0.0 {
            return;
        }
        self.fill_cells(top_left, top_left + size - Vec2::new(0.01, 0.01), '█', color);
    }
}

impl Widget for &CellSurface {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..self.rows.min(area.height) {
            for col in 0..self.cols.min(area.width) {
                let Some(cell) = self.cell(col, row) else {
                    continue;
                };
                if cell.symbol == ' ' {
                    continue;
                }
                let Rgb(r, g, b) = cell.color;
                buf.get_mut(area.x + col, area.y + row)
                    .set_char(cell.symbol)
                    .set_fg(Color::Rgb(r, g, b));
            }
        }
    }
}
