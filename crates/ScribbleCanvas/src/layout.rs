//! # Layout
//!
//! Splits the surface into the palette row (top) and the drawing canvas
//! (everything below it), and converts between Screen Space (surface pixels)
//! and Canvas Space (origin at the canvas' top-left corner).

use glam::Vec2;

use crate::config::CanvasStyle;

/// Screen-space geometry of the two parts of the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Size of the whole surface in pixels.
    pub surface_size: Vec2,
    /// Height of the palette row.
    pub palette_height: f32,
    swatch_size: f32,
    swatch_padding: f32,
    swatch_count: usize,
}

impl Layout {
    /// Lays out `swatch_count` swatches on a surface of `surface_size`.
    pub fn new(style: &CanvasStyle, swatch_count: usize, surface_size: Vec2) -> Self {
        Self {
            surface_size,
            palette_height: style.swatch_size + 2.0 * style.swatch_padding,
            swatch_size: style.swatch_size,
            swatch_padding: style.swatch_padding,
            swatch_count,
        }
    }

    /// Top-left corner of the canvas in screen space.
    pub fn canvas_origin(&self) -> Vec2 {
        Vec2::new(0.0, self.palette_height)
    }

    /// Size of the canvas area. Never negative.
    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(
            self.surface_size.x.max(0.0),
            (self.surface_size.y - self.palette_height).max(0.0),
        )
    }

    /// Size of the palette row.
    pub fn palette_size(&self) -> Vec2 {
        Vec2::new(self.surface_size.x.max(0.0), self.palette_height)
    }

    /// Converts a point from **Screen Space** to **Canvas Space**.
    pub fn screen_to_canvas(&self, screen_pos: Vec2) -> Vec2 {
        screen_pos - self.canvas_origin()
    }

    /// Converts a point from **Canvas Space** to **Screen Space**.
    pub fn canvas_to_screen(&self, canvas_pos: Vec2) -> Vec2 {
        canvas_pos + self.canvas_origin()
    }

    /// Whether a screen-space point lies inside the drawing canvas.
    pub fn canvas_contains(&self, screen_pos: Vec2) -> bool {
        let local = self.screen_to_canvas(screen_pos);
        let size = self.canvas_size();
        local.x >= 0.0 && local.y >= 0.0 && local.x < size.x && local.y < size.y
    }

    /// Whether a screen-space point lies inside the palette row.
    pub fn palette_contains(&self, screen_pos: Vec2) -> bool {
        screen_pos.x >= 0.0
            && screen_pos.y >= 0.0
            && screen_pos.x < self.surface_size.x
            && screen_pos.y < self.palette_height
    }

    pub fn swatch_radius(&self) -> f32 {
        self.swatch_size * 0.5
    }

    /// Screen-space center of swatch `index`.
    ///
    /// Swatches are spaced evenly: the free width is split into equal gaps
    /// before, between and after them.
    pub fn swatch_center(&self, index: usize) -> Option<Vec2> {
        if index >= self.swatch_count {
            return None;
        }
        let n = self.swatch_count as f32;
        let free = (self.surface_size.x - n * self.swatch_size).max(0.0);
        let gap = free / (n + 1.0);
        let i = index as f32;
        let x = gap * (i + 1.0) + self.swatch_size * i + self.swatch_radius();
        let y = self.swatch_padding + self.swatch_radius();
        Some(Vec2::new(x, y))
    }

    /// Index of the swatch under a screen-space point, if any.
    pub fn swatch_at(&self, screen_pos: Vec2) -> Option<usize> {
        let radius = self.swatch_radius();
        (0..self.swatch_count).find(|&i| {
            self.swatch_center(i)
                .is_some_and(|c| c.distance_squared(screen_pos) <= radius * radius)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(width: f32, height: f32) -> Layout {
        Layout::new(&CanvasStyle::default(), 6, Vec2::new(width, height))
    }

    #[test]
    fn canvas_sits_below_palette() {
        let l = layout(400.0, 300.0);
        assert_eq!(l.palette_height, 48.0);
        assert_eq!(l.canvas_origin(), Vec2::new(0.0, 48.0));
        assert_eq!(l.canvas_size(), Vec2::new(400.0, 252.0));
    }

    #[test]
    fn conversions_are_inverse() {
        let l = layout(400.0, 300.0);
        let p = Vec2::new(12.5, 99.0);
        assert_eq!(l.canvas_to_screen(l.screen_to_canvas(p)), p);
        assert_eq!(l.screen_to_canvas(l.canvas_to_screen(p)), p);
    }

    #[test]
    fn swatches_are_evenly_spaced() {
        // 6 * 32 = 192 used, 208 free, 7 gaps of ~29.714
        let l = layout(400.0, 300.0);
        let gap = 208.0 / 7.0;
        let first = l.swatch_center(0).unwrap();
        assert!((first.x - (gap + 16.0)).abs() < 1e-4);
        assert_eq!(first.y, 24.0);

        let last = l.swatch_center(5).unwrap();
        assert!((400.0 - (last.x + 16.0) - gap).abs() < 1e-4);
        assert!(l.swatch_center(6).is_none());
    }

    #[test]
    fn tiny_surface_has_empty_canvas() {
        let l = layout(100.0, 20.0);
        assert_eq!(l.canvas_size().y, 0.0);
        assert!(!l.canvas_contains(Vec2::new(10.0, 30.0)));
    }
}
