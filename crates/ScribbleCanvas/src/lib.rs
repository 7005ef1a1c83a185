//! # ScribbleCanvas
//!
//! `scribble_canvas` is a headless freehand drawing surface. It owns the
//! palette selection and the stroke history, turns drag gestures into point
//! sequences, and delegates rendering to the host application.
//!
//! ## Core Architecture
//! - **Model (`src/model.rs`)**: Strokes and the append-only `Drawing`.
//! - **Interaction (`src/interaction.rs`)**: The `Idle` / `Capturing` gesture state machine.
//! - **Input (`src/input.rs`)**: Per-frame pointer polling and gesture detection.
//! - **Layout (`src/layout.rs`)**: Palette row / canvas split and coordinate conversion.
//! - **Render (`src/render.rs`)**: Outputs a list of `DrawCommand`s for the host to render.

pub mod config;
pub mod error;
pub mod input;
pub mod interaction;
pub mod layout;
pub mod model;
pub mod painter;
pub mod palette;
pub mod render;

use glam::Vec2;
use input::{GestureDetector, InputAction, InputState};
use layout::Layout;
use model::{Drawing, Stroke};
use render::RenderList;

// Re-exports for convenience
pub use config::{CanvasConfig, ColorMode};
pub use error::{CanvasError, Result};
pub use interaction::{CaptureMode, GestureEvent, LogicEvent};
pub use palette::{Palette, PaletteColor};

/// The main entry point for the library.
///
/// `ScribbleCanvas` is the single owner of all drawing state: the palette
/// selection, completed strokes, the active stroke and the gesture detector.
/// It is meant to live for the whole session.
pub struct ScribbleCanvas {
    config: CanvasConfig,
    layout: Layout,
    palette: Palette,
    drawing: Drawing,
    mode: CaptureMode,
    detector: GestureDetector,
}

impl ScribbleCanvas {
    /// Creates a canvas with the given configuration.
    ///
    /// Fails if the configuration does not validate.
    pub fn new(config: CanvasConfig) -> Result<Self> {
        config.validate()?;
        let palette = Palette::new();
        // Default 800x600, user should update
        let layout = Layout::new(&config.style, palette.len(), Vec2::new(800.0, 600.0));
        Ok(Self {
            config,
            layout,
            palette,
            drawing: Drawing::new(),
            mode: CaptureMode::Idle,
            detector: GestureDetector::new(),
        })
    }

    /// Updates the surface size (e.g., on window resize).
    pub fn update_viewport_size(&mut self, size: Vec2) {
        if size != self.layout.surface_size {
            self.layout = Layout::new(&self.config.style, self.palette.len(), size);
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn mode(&self) -> &CaptureMode {
        &self.mode
    }

    /// The stroke currently being drawn, if any.
    pub fn active_stroke(&self) -> Option<&Stroke> {
        self.mode.active_stroke()
    }

    /// Applies a gesture event delivered in Canvas Space.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> Vec<LogicEvent> {
        let mut events = Vec::new();
        interaction::handle_gesture(
            &mut self.mode,
            &mut self.drawing,
            &self.palette,
            event,
            &mut events,
        );
        events
    }

    /// Selects a palette color.
    ///
    /// Reselecting the current color is a no-op and emits nothing.
    pub fn select_color(&mut self, color: PaletteColor) -> Vec<LogicEvent> {
        let changed = self.palette.select(color);
        selection_events(changed, color)
    }

    /// Selects the palette entry at `index`.
    pub fn select_index(&mut self, index: usize) -> Result<Vec<LogicEvent>> {
        let before = self.palette.selected();
        let color = self.palette.select_index(index)?;
        Ok(selection_events(color != before, color))
    }

    /// Renders the current state. Does not mutate anything.
    pub fn render(&self) -> RenderList {
        painter::Painter::draw_scene(
            &self.layout,
            &self.config,
            &self.palette,
            &self.drawing,
            &self.mode,
        )
    }

    /// The per-frame update loop for polling hosts.
    ///
    /// Runs gesture detection on `input`, applies the result and returns the
    /// frame's draw commands together with what changed.
    pub fn update(&mut self, input: &InputState) -> (RenderList, Vec<LogicEvent>) {
        self.update_viewport_size(input.screen_size);

        let events = match self.detector.detect(input, &self.layout) {
            Some(InputAction::Gesture(event)) => self.handle_gesture(event),
            Some(InputAction::SwatchPressed(index)) => match self.select_index(index) {
                Ok(events) => events,
                Err(e) => {
                    tracing::warn!(error = %e, "swatch press ignored");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        (self.render(), events)
    }
}

fn selection_events(changed: bool, color: PaletteColor) -> Vec<LogicEvent> {
    if !changed {
        return Vec::new();
    }
    tracing::info!(color = color.name(), "color selected");
    vec![LogicEvent::ColorSelected(color), LogicEvent::RepaintNeeded]
}
