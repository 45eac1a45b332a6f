//! Drawing contract between the simulation and whatever displays it.

use crate::assets::SpriteId;
use crate::core::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const SHADOW: Rgb = Rgb(40, 40, 40);
    pub const CHAIN: Rgb = Rgb(179, 109, 27);
    pub const GAUGE_NORMAL: Rgb = Rgb(76, 135, 228);
    pub const GAUGE_PANIC: Rgb = Rgb(255, 81, 0);
}

/// A drawing target in surface pixels, origin top-left, y down.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn clear(&mut self);
    /// Draws `sprite` scaled to `size`, centred on `center` and rotated
    /// clockwise by `rotation` radians.
    fn draw_sprite(&mut self, sprite: SpriteId, center: Vec2, size: Vec2, rotation: f64, opacity: f64);
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Rgb);
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Rgb);
    fn fill_rect(&mut self, top_left: Vec2, size: Vec2, color: Rgb);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Sprite {
        sprite: SpriteId,
        center: Vec2,
        size: Vec2,
        rotation: f64,
        opacity: f64,
    },
    Ellipse {
        center: Vec2,
        radii: Vec2,
        color: Rgb,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgb,
    },
    Rect {
        top_left: Vec2,
        size: Vec2,
        color: Rgb,
    },
}

/// Surface that records every call. Used by tests and headless runs.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn sprites(&self) -> Vec<SpriteId> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Sprite { sprite, .. } => Some(*sprite),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_sprite(&mut self, sprite: SpriteId, center: Vec2, size: Vec2, rotation: f64, opacity: f64) {
        self.commands.push(DrawCommand::Sprite {
            sprite,
            center,
            size,
            rotation,
            opacity,
        });
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Rgb) {
        self.commands.push(DrawCommand::Ellipse {
            center,
            radii,
            color,
        });
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Rgb) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn fill_rect(&mut self, top_left: Vec2, size: Vec2, color: Rgb) {
        self.commands.push(DrawCommand::Rect {
            top_left,
            size,
            color,
        });
    }
}
