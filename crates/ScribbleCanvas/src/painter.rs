use glam::Vec4;

use crate::config::{CanvasConfig, ColorMode};
use crate::interaction::CaptureMode;
use crate::layout::Layout;
use crate::model::{Drawing, Stroke};
use crate::palette::Palette;
use crate::render::{DrawCommand, PathVerb, RenderList};

/// Converts the canvas state into a `RenderList`.
///
/// Paint order (painters algorithm):
/// - Canvas background
/// - Completed strokes, oldest first
/// - Active stroke (topmost)
/// - Palette row, swatches and the selection ring
pub struct Painter;

impl Painter {
    /// Generates the draw commands for a full frame.
    ///
    /// # Arguments
    /// * `layout` - Surface geometry; stroke points are translated into screen space with it.
    /// * `config` - Line width, color mode and style.
    /// * `palette` - Current selection, used for swatches and for `ColorMode::Live`.
    /// * `drawing` - Completed strokes.
    /// * `mode` - Capture state holding the active stroke.
    pub fn draw_scene(
        layout: &Layout,
        config: &CanvasConfig,
        palette: &Palette,
        drawing: &Drawing,
        mode: &CaptureMode,
    ) -> RenderList {
        let mut draw_list = Vec::new();
        let style = &config.style;

        draw_list.push(DrawCommand::Rect {
            pos: layout.canvas_origin(),
            size: layout.canvas_size(),
            color: style.canvas_background,
        });

        Self::draw_strokes(layout, config, palette, drawing, mode, &mut draw_list);
        Self::draw_palette(layout, config, palette, &mut draw_list);

        draw_list
    }

    /// Emits one path per renderable stroke, history first, active stroke last.
    pub fn draw_strokes(
        layout: &Layout,
        config: &CanvasConfig,
        palette: &Palette,
        drawing: &Drawing,
        mode: &CaptureMode,
        draw_list: &mut RenderList,
    ) {
        let strokes = drawing.strokes().iter().chain(mode.active_stroke());
        for stroke in strokes {
            let color = match config.color_mode {
                ColorMode::PerStroke => stroke.color().rgba(),
                ColorMode::Live => palette.selected().rgba(),
            };
            if let Some(cmd) = Self::stroke_path(layout, stroke, color, config.line_width) {
                draw_list.push(cmd);
            }
        }
    }

    /// Builds the path for a single stroke, or `None` if it has fewer than two points.
    ///
    /// The path moves to the first point and draws a segment to every
    /// following point, the last one included.
    pub fn stroke_path(
        layout: &Layout,
        stroke: &Stroke,
        color: Vec4,
        width: f32,
    ) -> Option<DrawCommand> {
        if !stroke.is_renderable() {
            return None;
        }
        let (first, rest) = stroke.points().split_first()?;

        let mut verbs = Vec::with_capacity(stroke.len());
        verbs.push(PathVerb::MoveTo(layout.canvas_to_screen(*first)));
        verbs.extend(
            rest.iter()
                .map(|&p| PathVerb::LineTo(layout.canvas_to_screen(p))),
        );

        Some(DrawCommand::Path {
            verbs,
            color,
            width,
        })
    }

    fn draw_palette(
        layout: &Layout,
        config: &CanvasConfig,
        palette: &Palette,
        draw_list: &mut RenderList,
    ) {
        let style = &config.style;

        draw_list.push(DrawCommand::Rect {
            pos: glam::Vec2::ZERO,
            size: layout.palette_size(),
            color: style.palette_background,
        });

        let radius = layout.swatch_radius();
        for (i, color) in palette.entries().iter().enumerate() {
            if let Some(center) = layout.swatch_center(i) {
                draw_list.push(DrawCommand::Circle {
                    center,
                    radius,
                    color: Some(color.rgba()),
                    stroke_width: 0.0,
                    stroke_color: None,
                });
            }
        }

        // Selection ring sits just outside the selected swatch
        if let Some(center) = layout.swatch_center(palette.selected_index()) {
            draw_list.push(DrawCommand::Circle {
                center,
                radius: radius + style.selection_ring_width,
                color: None,
                stroke_width: style.selection_ring_width,
                stroke_color: Some(style.selection_ring_color),
            });
        }
    }
}
