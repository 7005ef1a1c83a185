use std::mem;

use crate::model::{Drawing, Point, Stroke};
use crate::palette::{Palette, PaletteColor};

/// A discrete drag gesture, in Canvas Space.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureEvent {
    /// The pointer went down and a drag began.
    Start { position: Point },
    /// The pointer moved while down.
    Move {
        /// Samples seen since the previous event, oldest first.
        history: Vec<Point>,
        /// The latest position.
        position: Point,
    },
    /// The pointer was released or the drag was interrupted.
    End,
}

/// Events emitted by the canvas logic to the host application.
#[derive(Clone, Debug, PartialEq)]
pub enum LogicEvent {
    /// A new active stroke began.
    StrokeStarted,
    /// Points were appended to the active stroke.
    PointsAppended { count: usize },
    /// The active stroke was moved into the drawing.
    StrokeCommitted {
        /// Index of the stroke in the drawing.
        index: usize,
        /// Number of points in the stroke.
        points: usize,
    },
    /// The selected palette color changed.
    ColorSelected(PaletteColor),
    /// The visible state changed, requiring a repaint.
    /// Hosts can skip rendering on frames without it.
    RepaintNeeded,
}

/// The state of stroke capture.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CaptureMode {
    /// No active stroke.
    #[default]
    Idle,
    /// A drag is in progress and `stroke` is being built.
    Capturing { stroke: Stroke },
}

impl CaptureMode {
    /// The stroke currently being drawn, if any.
    pub fn active_stroke(&self) -> Option<&Stroke> {
        match self {
            CaptureMode::Idle => None,
            CaptureMode::Capturing { stroke } => Some(stroke),
        }
    }

    pub fn is_capturing(&self) -> bool {
        matches!(self, CaptureMode::Capturing { .. })
    }
}

/// Applies one gesture event to the capture state machine.
///
/// # Arguments
/// * `mode` - The current capture mode, mutated on transitions.
/// * `drawing` - The stroke history; strokes are appended on drag end.
/// * `palette` - Supplies the color recorded on new strokes.
/// * `event` - The gesture to apply.
/// * `events` - A buffer to push `LogicEvent`s into.
pub fn handle_gesture(
    mode: &mut CaptureMode,
    drawing: &mut Drawing,
    palette: &Palette,
    event: GestureEvent,
    events: &mut Vec<LogicEvent>,
) {
    match event {
        GestureEvent::Start { position } => {
            if mode.is_capturing() {
                tracing::debug!("drag start while capturing, committing previous stroke");
                commit(mode, drawing, events);
            }
            let color = palette.selected();
            tracing::debug!(x = position.x, y = position.y, color = ?color, "stroke started");
            *mode = CaptureMode::Capturing {
                stroke: Stroke::begin(position, color),
            };
            events.push(LogicEvent::StrokeStarted);
            events.push(LogicEvent::RepaintNeeded);
        }
        GestureEvent::Move { history, position } => match mode {
            CaptureMode::Capturing { stroke } => {
                let count = history.len() + 1;
                stroke.extend(history.into_iter().chain(std::iter::once(position)));
                tracing::trace!(count, total = stroke.len(), "points appended");
                events.push(LogicEvent::PointsAppended { count });
                events.push(LogicEvent::RepaintNeeded);
            }
            CaptureMode::Idle => {
                tracing::debug!("drag move without an active stroke, ignored");
            }
        },
        GestureEvent::End => {
            if mode.is_capturing() {
                commit(mode, drawing, events);
            } else {
                tracing::debug!("drag end without an active stroke, ignored");
            }
        }
    }
}

/// Moves the active stroke into the drawing and returns to `Idle`.
fn commit(mode: &mut CaptureMode, drawing: &mut Drawing, events: &mut Vec<LogicEvent>) {
    if let CaptureMode::Capturing { stroke } = mem::take(mode) {
        if stroke.is_empty() {
            return;
        }
        let points = stroke.len();
        let index = drawing.push(stroke);
        tracing::debug!(index, points, "stroke committed");
        events.push(LogicEvent::StrokeCommitted { index, points });
        events.push(LogicEvent::RepaintNeeded);
    }
}
