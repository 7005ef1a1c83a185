//! # Input Protocol
//!
//! This module defines the per-frame input state that a polling host passes to
//! the canvas, and the `GestureDetector` that turns consecutive frames into
//! drag gestures and palette presses.
//!
//! Hosts with a native gesture system can skip this and feed
//! `GestureEvent`s directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::interaction::GestureEvent;
use crate::layout::Layout;

/// The input state for a single frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputState {
    /// Current pointer position in Screen Space (pixels).
    pub pointer_pos: Vec2,
    /// Primary button / finger is down.
    pub pointer_down: bool,
    /// Pointer samples seen since the previous frame, oldest first, excluding
    /// `pointer_pos`. Screen Space.
    ///
    /// Hosts that only see one position per frame leave this empty.
    pub history: Vec<Vec2>,
    /// Size of the surface in Screen Space (pixels).
    pub screen_size: Vec2,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pointer_pos: Vec2::ZERO,
            pointer_down: false,
            history: Vec::new(),
            screen_size: Vec2::new(800.0, 600.0),
        }
    }
}

/// What a frame of input amounts to.
#[derive(Clone, Debug, PartialEq)]
pub enum InputAction {
    /// A drag gesture on the canvas, in Canvas Space.
    Gesture(GestureEvent),
    /// A press landed on the palette swatch at this index.
    SwatchPressed(usize),
}

/// Tracks pointer state across frames.
#[derive(Clone, Debug, Default)]
pub struct GestureDetector {
    was_down: bool,
    dragging: bool,
    last_pos: Option<Vec2>,
}

impl GestureDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag started by this detector is still in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Converts one frame of input into at most one action.
    ///
    /// A press inside the canvas starts a drag. A press in the palette row
    /// hits a swatch or nothing. Once a drag is running, every position is
    /// recorded, including positions that leave the canvas.
    pub fn detect(&mut self, input: &InputState, layout: &Layout) -> Option<InputAction> {
        let pressed = input.pointer_down && !self.was_down;
        self.was_down = input.pointer_down;

        if self.dragging {
            if !input.pointer_down {
                self.dragging = false;
                self.last_pos = None;
                return Some(InputAction::Gesture(GestureEvent::End));
            }

            let moved = self.last_pos != Some(input.pointer_pos);
            if !moved && input.history.is_empty() {
                return None;
            }
            self.last_pos = Some(input.pointer_pos);
            return Some(InputAction::Gesture(GestureEvent::Move {
                history: input
                    .history
                    .iter()
                    .map(|&p| layout.screen_to_canvas(p))
                    .collect(),
                position: layout.screen_to_canvas(input.pointer_pos),
            }));
        }

        if !pressed {
            return None;
        }

        if layout.canvas_contains(input.pointer_pos) {
            self.dragging = true;
            self.last_pos = Some(input.pointer_pos);
            return Some(InputAction::Gesture(GestureEvent::Start {
                position: layout.screen_to_canvas(input.pointer_pos),
            }));
        }

        if layout.palette_contains(input.pointer_pos) {
            return layout
                .swatch_at(input.pointer_pos)
                .map(InputAction::SwatchPressed);
        }

        None
    }
}
