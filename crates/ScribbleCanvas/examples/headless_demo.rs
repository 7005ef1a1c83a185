use glam::Vec2;
use scribble_canvas::render::DrawCommand;
use scribble_canvas::{CanvasConfig, GestureEvent, PaletteColor, ScribbleCanvas};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();
    println!("=== ScribbleCanvas Headless Demo ===");

    // 1. Initialize Canvas
    let mut canvas = match ScribbleCanvas::new(CanvasConfig::default()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create canvas: {e}");
            return;
        }
    };
    // Explicitly set a surface size (simulating a window)
    canvas.update_viewport_size(Vec2::new(1280.0, 720.0));

    // 2. Draw a red zig-zag, delivering samples in batches like a touch screen
    canvas.select_color(PaletteColor::Red);
    canvas.handle_gesture(GestureEvent::Start {
        position: Vec2::new(100.0, 100.0),
    });
    for step in 1..5 {
        let x = 100.0 + step as f32 * 40.0;
        let events = canvas.handle_gesture(GestureEvent::Move {
            history: vec![Vec2::new(x - 20.0, 120.0)],
            position: Vec2::new(x, if step % 2 == 0 { 100.0 } else { 140.0 }),
        });
        println!("  Move {step}: {events:?}");
    }
    let events = canvas.handle_gesture(GestureEvent::End);
    println!("  End: {events:?}");

    // 3. Switch to blue and tap: a single point is kept but not painted
    canvas.select_color(PaletteColor::Blue);
    canvas.handle_gesture(GestureEvent::Start {
        position: Vec2::new(400.0, 400.0),
    });
    canvas.handle_gesture(GestureEvent::End);

    println!(
        "\nDrawing: {} strokes, {} points",
        canvas.drawing().len(),
        canvas.drawing().point_count()
    );

    // 4. Render and summarize the display list
    for cmd in canvas.render() {
        match &cmd {
            DrawCommand::Rect { pos, size, .. } => println!("  Rect at {pos} size {size}"),
            DrawCommand::Circle { center, radius, .. } => {
                println!("  Circle at {center} r={radius}")
            }
            DrawCommand::Path { color, width, .. } => println!(
                "  Path with {} segments, color {color}, width {width}",
                cmd.segments().len()
            ),
        }
    }

    println!("\nDemo Complete.");
}
