//! # Configuration
//!
//! This module defines the configuration struct for the scribble canvas.
//! Every value is a session constant. `CanvasConfig::default()` is the
//! configuration the app ships with.

use glam::Vec4;
use serde::{Deserialize, Serialize};

use crate::error::{CanvasError, Result};

/// Width of every stroke, in canvas units.
pub const DEFAULT_LINE_WIDTH: f32 = 5.0;
/// Diameter of a palette swatch.
pub const DEFAULT_SWATCH_SIZE: f32 = 32.0;
/// Vertical padding above and below the swatch row.
pub const DEFAULT_SWATCH_PADDING: f32 = 8.0;

/// How stroke colors are resolved at paint time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorMode {
    /// Each stroke keeps the color that was selected when it began.
    #[default]
    PerStroke,
    /// Every stroke, finished or not, is painted with the current selection.
    Live,
}

/// Configuration parameters for the canvas.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Stroke width in canvas units. Default: 5.0.
    pub line_width: f32,
    /// Color resolution policy. Default: `ColorMode::PerStroke`.
    #[serde(default)]
    pub color_mode: ColorMode,
    /// Visual styling configuration.
    #[serde(default)]
    pub style: CanvasStyle,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            color_mode: ColorMode::default(),
            style: CanvasStyle::default(),
        }
    }
}

impl CanvasConfig {
    /// Checks that every size in the config can be laid out and painted.
    pub fn validate(&self) -> Result<()> {
        positive("line_width", self.line_width)?;
        positive("style.swatch_size", self.style.swatch_size)?;
        positive("style.selection_ring_width", self.style.selection_ring_width)?;
        if !self.style.swatch_padding.is_finite() || self.style.swatch_padding < 0.0 {
            return Err(CanvasError::InvalidConfig {
                field: "style.swatch_padding",
                reason: format!("must be finite and >= 0, got {}", self.style.swatch_padding),
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CanvasError::InvalidConfig {
            field,
            reason: format!("must be finite and > 0, got {value}"),
        })
    }
}

/// Visual styling for the canvas and the palette row.
///
/// Colors are RGBA `glam::Vec4` in `0.0..=1.0`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CanvasStyle {
    /// Fill of the drawing area.
    pub canvas_background: Vec4,
    /// Fill of the palette row.
    pub palette_background: Vec4,
    /// Diameter of each swatch.
    pub swatch_size: f32,
    /// Padding above and below the swatches.
    pub swatch_padding: f32,
    /// Outline drawn around the selected swatch.
    pub selection_ring_color: Vec4,
    /// Width of that outline.
    pub selection_ring_width: f32,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            // 0xFF888888
            canvas_background: Vec4::new(0.533, 0.533, 0.533, 1.0),
            // 0xFF444444
            palette_background: Vec4::new(0.267, 0.267, 0.267, 1.0),
            swatch_size: DEFAULT_SWATCH_SIZE,
            swatch_padding: DEFAULT_SWATCH_PADDING,
            selection_ring_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            selection_ring_width: 2.0,
        }
    }
}
