use macroquad::prelude as mq;
use scribble_canvas::input::InputState;
use scribble_canvas::render::DrawCommand;
use scribble_canvas::{CanvasConfig, LogicEvent, ScribbleCanvas};

/// Digit keys select palette entries by position: `1` is the first swatch.
const DIGIT_KEYS: [mq::KeyCode; 9] = [
    mq::KeyCode::Key1,
    mq::KeyCode::Key2,
    mq::KeyCode::Key3,
    mq::KeyCode::Key4,
    mq::KeyCode::Key5,
    mq::KeyCode::Key6,
    mq::KeyCode::Key7,
    mq::KeyCode::Key8,
    mq::KeyCode::Key9,
];

fn to_mq(color: glam::Vec4) -> mq::Color {
    mq::Color::new(color.x, color.y, color.z, color.w)
}

#[macroquad::main("Scribble")]
async fn main() {
    tracing_subscriber::fmt::init();

    // 1. Initialize Canvas
    let mut canvas = match ScribbleCanvas::new(CanvasConfig::default()) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "failed to create canvas");
            return;
        }
    };
    tracing::info!("canvas ready");

    loop {
        let screen_w = mq::screen_width();
        let screen_h = mq::screen_height();

        // 2. Keyboard palette shortcuts
        for (index, key) in DIGIT_KEYS.iter().enumerate() {
            if mq::is_key_pressed(*key) {
                if let Err(e) = canvas.select_index(index) {
                    tracing::warn!(error = %e, "palette shortcut ignored");
                }
            }
        }

        // 3. Input Handling
        // Macroquad reports one pointer position per frame, so there is no history.
        // Touch input is delivered as mouse input.
        let (mx, my) = mq::mouse_position();
        let input = InputState {
            pointer_pos: glam::Vec2::new(mx, my),
            pointer_down: mq::is_mouse_button_down(mq::MouseButton::Left),
            history: Vec::new(),
            screen_size: glam::Vec2::new(screen_w, screen_h),
        };

        // 4. Update Logic
        let (draw_list, events) = canvas.update(&input);

        for event in events {
            match event {
                LogicEvent::StrokeCommitted { index, points } => {
                    tracing::info!(index, points, "stroke committed");
                }
                LogicEvent::RepaintNeeded => {}
                other => tracing::debug!(event = ?other, "logic event"),
            }
        }

        // 5. Render
        mq::clear_background(mq::DARKGRAY);

        for cmd in &draw_list {
            match cmd {
                DrawCommand::Rect { pos, size, color } => {
                    mq::draw_rectangle(pos.x, pos.y, size.x, size.y, to_mq(*color));
                }
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                    stroke_width,
                    stroke_color,
                } => {
                    if let Some(fill) = color {
                        mq::draw_circle(center.x, center.y, *radius, to_mq(*fill));
                    }
                    if let Some(sc) = stroke_color {
                        mq::draw_circle_lines(
                            center.x,
                            center.y,
                            *radius,
                            *stroke_width,
                            to_mq(*sc),
                        );
                    }
                }
                DrawCommand::Path { color, width, .. } => {
                    for (start, end) in cmd.segments() {
                        mq::draw_line(start.x, start.y, end.x, end.y, *width, to_mq(*color));
                    }
                }
            }
        }

        mq::next_frame().await
    }
}
