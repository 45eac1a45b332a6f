use crate::core::constants::{GAUGE_EASING, GAUGE_SNAP};
use crate::core::Vec2;
use crate::render::{Rgb, Surface};

const GAUGE_WIDTH: f64 = 28.0;
const GAUGE_HEIGHT_FRACTION: f64 = 0.6;
const GAUGE_MARGIN: f64 = 12.0;

/// Vertical sanity bar on the right edge. The displayed level trails the
/// real value so changes animate.
#[derive(Debug, Clone, PartialEq)]
pub struct SanityGauge {
    displayed: f64,
}

impl SanityGauge {
    pub fn new(value: f64) -> Self {
        Self { displayed: value }
    }

    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    /// Eases a tenth of the way to `target`, snapping once the step is tiny.
    pub fn update(&mut self, target: f64) {
        let step = (target - self.displayed) * GAUGE_EASING;
        if step.abs() < GAUGE_SNAP {
            self.displayed = target;
        } else {
            self.displayed += step;
        }
    }

    /// Top-left corner and size of the bar for a surface.
    pub fn layout(width: f64, height: f64) -> (Vec2, Vec2) {
        let gauge_height = height * GAUGE_HEIGHT_FRACTION;
        let top_left = Vec2::new(
            width - GAUGE_WIDTH - GAUGE_MARGIN,
            (height - gauge_height) / 2.0,
        );
        (top_left, Vec2::new(GAUGE_WIDTH, gauge_height))
    }

    pub fn draw(&self, surface: &mut dyn Surface, max_sanity: f64, is_panic: bool, jitter: Vec2) {
        let (top_left, size) = Self::layout(surface.width(), surface.height());
        let top_left = top_left + jitter;
        surface.fill_rect(top_left, size, Rgb::SHADOW);

        let fraction = if max_sanity > 0.0 {
            (self.displayed / max_sanity).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let fill = size.y * fraction;
        let color = if is_panic {
            Rgb::GAUGE_PANIC
        } else {
            Rgb::GAUGE_NORMAL
        };
        surface.fill_rect(
            Vec2::new(top_left.x, top_left.y + size.y - fill),
            Vec2::new(size.x, fill),
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingSurface};

    #[test]
    fn test_eases_then_snaps() {
        let mut gauge = SanityGauge::new(80.0);
        gauge.update(70.0);
        assert!((gauge.displayed() - 79.0).abs() < 1e-9);
        for _ in 0..100 {
            gauge.update(70.0);
        }
        assert_eq!(gauge.displayed(), 70.0);
    }

    #[test]
    fn test_layout_on_right_edge() {
        let (top_left, size) = SanityGauge::layout(800.0, 600.0);
        assert_eq!(top_left, Vec2::new(760.0, 120.0));
        assert_eq!(size, Vec2::new(28.0, 360.0));
    }

    #[test]
    fn test_fill_proportional_and_panic_colour() {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        SanityGauge::new(40.0).draw(&mut surface, 80.0, true, Vec2::ZERO);
        match &surface.commands[1] {
            DrawCommand::Rect { size, color, .. } => {
                assert_eq!(size.y, 180.0);
                assert_eq!(*color, Rgb::GAUGE_PANIC);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
