//! Geometry primitives shared by the builders.
//!
//! Coordinates use a right-handed frame: `x` is the width axis (spines/groups are centered on
//! it), `y` is height (tiers), `z` is depth (clusters recede towards negative `z`).

use nalgebra as na;

pub type Point = na::Point3<f64>;

pub fn point(x: f64, y: f64, z: f64) -> Point {
    Point::new(x, y, z)
}

/// A straight line between two points; the unit every buffer is made of.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        na::distance(&self.start, &self.end)
    }

    pub fn midpoint(&self) -> Point {
        na::center(&self.start, &self.end)
    }
}

/// Flattening helpers for handing segment lists to a line renderer.
pub trait LineBuffer {
    /// `[x0, y0, z0, x1, y1, z1, ...]`, two points per segment, narrowed to `f32` for upload.
    fn to_f32_vec(&self) -> Vec<f32>;

    /// Segment endpoints in order, two per segment.
    fn points(&self) -> Vec<Point>;
}

impl LineBuffer for [Segment] {
    fn to_f32_vec(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.len() * 6);
        for s in self {
            for p in [&s.start, &s.end] {
                out.push(p.x as f32);
                out.push(p.y as f32);
                out.push(p.z as f32);
            }
        }
        out
    }

    fn points(&self) -> Vec<Point> {
        self.iter().flat_map(|s| [s.start, s.end]).collect()
    }
}

/// Evenly spaced offsets of `count` items centered on zero.
pub(crate) fn centered(index: usize, count: usize, spacing: f64) -> f64 {
    (index as f64 - (count as f64 - 1.0) / 2.0) * spacing
}
