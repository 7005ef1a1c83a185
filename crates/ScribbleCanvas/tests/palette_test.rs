use scribble_canvas::config::CanvasStyle;
use scribble_canvas::{CanvasConfig, CanvasError, LogicEvent, Palette, PaletteColor, ScribbleCanvas};

#[test]
fn test_palette_order_and_default() {
    let palette = Palette::new();

    assert_eq!(
        palette.entries(),
        &[
            PaletteColor::Black,
            PaletteColor::Blue,
            PaletteColor::Green,
            PaletteColor::Yellow,
            PaletteColor::Red,
            PaletteColor::LightGray,
        ]
    );
    assert_eq!(palette.selected(), PaletteColor::Black);
    assert_eq!(palette.selected_index(), 0);
}

#[test]
fn test_select_by_value_and_index() {
    let mut palette = Palette::new();

    assert!(palette.select(PaletteColor::Red));
    assert_eq!(palette.selected(), PaletteColor::Red);
    assert_eq!(palette.selected_index(), 4);

    // Reselecting is not a change
    assert!(!palette.select(PaletteColor::Red));

    assert_eq!(palette.select_index(1), Ok(PaletteColor::Blue));
    assert_eq!(palette.selected(), PaletteColor::Blue);
}

#[test]
fn test_out_of_range_index_keeps_selection() {
    let mut canvas = ScribbleCanvas::new(CanvasConfig::default()).unwrap();
    canvas.select_color(PaletteColor::Green);

    let err = canvas.select_index(6).unwrap_err();
    assert_eq!(err, CanvasError::PaletteIndexOutOfRange { index: 6, len: 6 });
    assert_eq!(canvas.palette().selected(), PaletteColor::Green);
}

#[test]
fn test_selection_events() {
    let mut canvas = ScribbleCanvas::new(CanvasConfig::default()).unwrap();

    let events = canvas.select_color(PaletteColor::Yellow);
    assert_eq!(
        events,
        vec![
            LogicEvent::ColorSelected(PaletteColor::Yellow),
            LogicEvent::RepaintNeeded
        ]
    );

    assert!(canvas.select_color(PaletteColor::Yellow).is_empty());
    assert!(canvas.select_index(3).unwrap().is_empty());
}

#[test]
fn test_colors_are_opaque_and_distinct() {
    for (i, a) in PaletteColor::ALL.iter().enumerate() {
        assert_eq!(a.rgba().w, 1.0, "{} should be opaque", a.name());
        for b in &PaletteColor::ALL[i + 1..] {
            assert_ne!(a.rgba(), b.rgba());
        }
    }
    assert_eq!(PaletteColor::LightGray.name(), "light-gray");
}

#[test]
fn test_config_validation() {
    assert!(CanvasConfig::default().validate().is_ok());

    let bad_width = CanvasConfig {
        line_width: 0.0,
        ..Default::default()
    };
    match ScribbleCanvas::new(bad_width) {
        Err(CanvasError::InvalidConfig { field, .. }) => assert_eq!(field, "line_width"),
        _ => panic!("zero line width should be rejected"),
    }

    let nan_swatch = CanvasConfig {
        style: CanvasStyle {
            swatch_size: f32::NAN,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(matches!(
        nan_swatch.validate(),
        Err(CanvasError::InvalidConfig {
            field: "style.swatch_size",
            ..
        })
    ));

    let negative_padding = CanvasConfig {
        style: CanvasStyle {
            swatch_padding: -1.0,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(negative_padding.validate().is_err());
}
