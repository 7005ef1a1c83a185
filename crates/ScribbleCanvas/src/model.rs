//! # Stroke Model
//!
//! Strokes are ordered point sequences captured from a single drag gesture.
//! The `Drawing` is the append-only history of completed strokes, in paint
//! order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::palette::PaletteColor;

/// A position in canvas-local units.
pub type Point = Vec2;

/// One continuous freehand line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Point>,
    /// Palette color selected when the stroke began.
    color: PaletteColor,
}

impl Stroke {
    /// Starts a stroke at `start`.
    pub fn begin(start: Point, color: PaletteColor) -> Self {
        Self {
            points: vec![start],
            color,
        }
    }

    /// Appends `points` in the order given.
    pub fn extend<I: IntoIterator<Item = Point>>(&mut self, points: I) {
        self.points.extend(points);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn color(&self) -> PaletteColor {
        self.color
    }

    /// A single point has no extent, so only strokes with two or more points
    /// are painted.
    pub fn is_renderable(&self) -> bool {
        self.points.len() >= 2
    }

    /// The straight segments joining consecutive points, ending at the last
    /// point. Yields `len() - 1` segments, or none for fewer than two points.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

/// The completed strokes of the session.
///
/// Lower index = painted first (bottom).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    strokes: Vec<Stroke>,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a finished stroke and returns its index.
    pub fn push(&mut self, stroke: Stroke) -> usize {
        self.strokes.push(stroke);
        self.strokes.len() - 1
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn get(&self, index: usize) -> Option<&Stroke> {
        self.strokes.get(index)
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Total number of captured points across all strokes.
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }
}
