//! # Rendering System
//!
//! The canvas does not draw pixels. It outputs a display list of
//! `DrawCommand`s, and the host application (macroquad, egui, a software
//! rasterizer...) interprets them.

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// One step of a stroked path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathVerb {
    /// Starts a new sub-path at the point without drawing.
    MoveTo(Vec2),
    /// Draws a straight segment from the current point.
    LineTo(Vec2),
}

/// A single drawing primitive.
///
/// Coordinates are in **Screen Space** (Pixels).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// A filled axis-aligned rectangle.
    Rect {
        /// Top-left position in screen pixels.
        pos: Vec2,
        /// Size in screen pixels.
        size: Vec2,
        /// Fill color (RGBA, 0.0 - 1.0).
        color: Vec4,
    },
    /// A circle with an optional outline.
    Circle {
        center: Vec2,
        radius: f32,
        /// Fill color. `None` draws only the outline.
        color: Option<Vec4>,
        /// Width of the outline in pixels.
        stroke_width: f32,
        /// Color of the outline. `None` draws no outline.
        stroke_color: Option<Vec4>,
    },
    /// A stroked (not filled) path of straight segments.
    Path {
        verbs: Vec<PathVerb>,
        /// Line color (RGBA, 0.0 - 1.0).
        color: Vec4,
        /// Line thickness in pixels.
        width: f32,
    },
}

impl DrawCommand {
    /// Line segments drawn by this command, in drawing order.
    ///
    /// Non-path commands have none.
    pub fn segments(&self) -> Vec<(Vec2, Vec2)> {
        let DrawCommand::Path { verbs, .. } = self else {
            return Vec::new();
        };
        let mut out = Vec::new();
        let mut current: Option<Vec2> = None;
        for verb in verbs {
            match *verb {
                PathVerb::MoveTo(p) => current = Some(p),
                PathVerb::LineTo(p) => {
                    if let Some(from) = current {
                        out.push((from, p));
                    }
                    current = Some(p);
                }
            }
        }
        out
    }
}

/// A list of draw commands representing the current frame.
pub type RenderList = Vec<DrawCommand>;
