use glam::Vec2;
use scribble_canvas::input::InputState;
use scribble_canvas::{CanvasConfig, CaptureMode, LogicEvent, PaletteColor, ScribbleCanvas};

fn frame(pos: Vec2, down: bool) -> InputState {
    InputState {
        pointer_pos: pos,
        pointer_down: down,
        ..Default::default()
    }
}

#[test]
fn test_polled_drag_builds_stroke() {
    let mut canvas = ScribbleCanvas::new(CanvasConfig::default()).unwrap();
    let origin = canvas.layout().canvas_origin();

    // 1. Press inside the canvas
    let (_, events) = canvas.update(&frame(origin + Vec2::new(10.0, 10.0), true));
    assert!(events.contains(&LogicEvent::StrokeStarted));
    assert!(matches!(canvas.mode(), CaptureMode::Capturing { .. }));

    // 2. Hold without moving: nothing happens
    let (_, events) = canvas.update(&frame(origin + Vec2::new(10.0, 10.0), true));
    assert!(events.is_empty());

    // 3. Move with batched samples
    let input = InputState {
        pointer_pos: origin + Vec2::new(40.0, 10.0),
        pointer_down: true,
        history: vec![origin + Vec2::new(20.0, 10.0), origin + Vec2::new(30.0, 10.0)],
        ..Default::default()
    };
    let (_, events) = canvas.update(&input);
    assert!(events.contains(&LogicEvent::PointsAppended { count: 3 }));

    // 4. Release
    let (draw_list, events) = canvas.update(&frame(origin + Vec2::new(40.0, 10.0), false));
    assert!(events.contains(&LogicEvent::StrokeCommitted {
        index: 0,
        points: 4
    }));
    assert!(!draw_list.is_empty());

    // Stored points are canvas-local
    assert_eq!(
        canvas.drawing().strokes()[0].points(),
        &[
            Vec2::new(10.0, 10.0),
            Vec2::new(20.0, 10.0),
            Vec2::new(30.0, 10.0),
            Vec2::new(40.0, 10.0)
        ]
    );
}

#[test]
fn test_swatch_press_selects_color_without_stroke() {
    let mut canvas = ScribbleCanvas::new(CanvasConfig::default()).unwrap();
    let red = canvas.layout().swatch_center(4).unwrap();

    let (_, events) = canvas.update(&frame(red, true));
    assert_eq!(
        events,
        vec![
            LogicEvent::ColorSelected(PaletteColor::Red),
            LogicEvent::RepaintNeeded
        ]
    );

    // Dragging from the palette never draws
    canvas.update(&frame(red + Vec2::new(0.0, 200.0), true));
    canvas.update(&frame(red + Vec2::new(0.0, 200.0), false));

    assert_eq!(canvas.palette().selected(), PaletteColor::Red);
    assert!(canvas.drawing().is_empty());
    assert_eq!(*canvas.mode(), CaptureMode::Idle);
}

#[test]
fn test_press_between_swatches_does_nothing() {
    let mut canvas = ScribbleCanvas::new(CanvasConfig::default()).unwrap();
    let layout = *canvas.layout();
    let a = layout.swatch_center(0).unwrap();
    let b = layout.swatch_center(1).unwrap();
    let between = (a + b) * 0.5;

    assert!(layout.swatch_at(between).is_none());
    let (_, events) = canvas.update(&frame(between, true));
    assert!(events.is_empty());
    assert_eq!(canvas.palette().selected(), PaletteColor::Black);
}

#[test]
fn test_drag_leaving_canvas_keeps_recording() {
    let mut canvas = ScribbleCanvas::new(CanvasConfig::default()).unwrap();
    let origin = canvas.layout().canvas_origin();

    canvas.update(&frame(origin + Vec2::new(5.0, 5.0), true));
    // Into the palette row, above the canvas
    canvas.update(&frame(Vec2::new(5.0, 10.0), true));
    canvas.update(&frame(Vec2::new(5.0, 10.0), false));

    let stroke = &canvas.drawing().strokes()[0];
    assert_eq!(stroke.points()[1], Vec2::new(5.0, 10.0) - origin);
    assert!(stroke.points()[1].y < 0.0);
    // The palette selection is untouched
    assert_eq!(canvas.palette().selected(), PaletteColor::Black);
}

#[test]
fn test_resize_moves_layout() {
    let mut canvas = ScribbleCanvas::new(CanvasConfig::default()).unwrap();

    let input = InputState {
        screen_size: Vec2::new(320.0, 480.0),
        ..Default::default()
    };
    canvas.update(&input);

    assert_eq!(canvas.layout().surface_size, Vec2::new(320.0, 480.0));
    assert_eq!(canvas.layout().canvas_size(), Vec2::new(320.0, 432.0));
}
