//! Verlet chain that dangles the equipped trinket from the weapon.

use crate::assets::SpriteId;
use crate::core::constants::*;
use crate::core::Vec2;
use crate::render::{Rgb, Surface};
use crate::trinkets::TrinketId;

#[derive(Debug, Clone, PartialEq)]
pub struct ChainPoint {
    pub position: Vec2,
    pub previous: Vec2,
    /// Zero for the pinned anchor.
    pub inverse_mass: f64,
}

impl ChainPoint {
    fn new(position: Vec2, inverse_mass: f64) -> Self {
        Self {
            position,
            previous: position,
            inverse_mass,
        }
    }

    fn integrate(&mut self) {
        let velocity = (self.position - self.previous) * CHAIN_FRICTION;
        self.previous = self.position;
        self.position += velocity + Vec2::new(0.0, CHAIN_GRAVITY);
    }

    fn pin(&mut self, to: Vec2) {
        self.previous = self.position;
        self.position = to;
    }
}

/// Distance constraint between two points, by index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainSegment {
    pub a: usize,
    pub b: usize,
    pub rest_length: f64,
}

#[derive(Debug, Clone)]
pub struct Chain {
    points: Vec<ChainPoint>,
    segments: Vec<ChainSegment>,
}

impl Chain {
    pub fn new(anchor: Vec2) -> Self {
        Self::with_shape(anchor, CHAIN_POINTS, CHAIN_SEGMENT_LENGTH)
    }

    /// A chain hanging straight down from `anchor`. The first point is
    /// pinned and the last is heavier.
    pub fn with_shape(anchor: Vec2, count: usize, segment_length: f64) -> Self {
        let points: Vec<ChainPoint> = (0..count)
            .map(|i| {
                let inverse_mass = if i == 0 {
                    0.0
                } else if i == count - 1 {
                    1.0 / CHAIN_TAIL_MASS
                } else {
                    1.0
                };
                ChainPoint::new(
                    anchor + Vec2::new(0.0, i as f64 * segment_length),
                    inverse_mass,
                )
            })
            .collect();

        let segments = (1..count)
            .map(|i| ChainSegment {
                a: i - 1,
                b: i,
                rest_length: segment_length,
            })
            .collect();

        Self { points, segments }
    }

    pub fn points(&self) -> &[ChainPoint] {
        &self.points
    }

    pub fn segments(&self) -> &[ChainSegment] {
        &self.segments
    }

    pub fn tail(&self) -> Option<Vec2> {
        self.points.last().map(|p| p.position)
    }

    /// One frame: integrate, pin the head to `anchor`, relax constraints.
    pub fn update(&mut self, anchor: Vec2) {
        for point in &mut self.points {
            point.integrate();
        }
        if let Some(head) = self.points.first_mut() {
            head.pin(anchor);
        }
        for _ in 0..CHAIN_ITERATIONS {
            for segment in &self.segments {
                relax(&mut self.points, *segment);
            }
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface, trinket: TrinketId) {
        for segment in &self.segments {
            surface.draw_line(
                self.points[segment.a].position,
                self.points[segment.b].position,
                Rgb::CHAIN,
            );
        }
        if let Some(tail) = self.tail() {
            surface.draw_sprite(
                SpriteId::Trinket(trinket),
                tail,
                Vec2::new(TRINKET_DRAW_SIZE, TRINKET_DRAW_SIZE),
                0.0,
                1.0,
            );
        }
    }
}

fn relax(points: &mut [ChainPoint], segment: ChainSegment) {
    let p1 = &points[segment.a];
    let p2 = &points[segment.b];
    let delta = p2.position - p1.position;
    let distance = delta.length();
    let total_inverse = p1.inverse_mass + p2.inverse_mass;
    if distance == 0.0 || total_inverse == 0.0 {
        return;
    }

    let percent = (segment.rest_length - distance) / distance / total_inverse;
    let offset = delta * percent;
    let (inv1, inv2) = (p1.inverse_mass, p2.inverse_mass);

    points[segment.a].position -= offset * inv1;
    points[segment.b].position += offset * inv2;
}
