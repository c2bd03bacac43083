use std::fs;

use rasterizer::core::load;
use rasterizer::demo;
use rasterizer::{
    Circle, Color, DrawList, DrawOp, Line, LineMode, PixelBuffer, Rectangle, SceneFile,
};

// ============================================================================
// Draw List Tests
// ============================================================================

#[test]
fn test_draw_list_executes_in_order() {
    let mut buffer = PixelBuffer::new(100, 100).unwrap();
    DrawList::new()
        .draw(DrawOp::fill(Color::WHITE))
        .draw(DrawOp::rectangle(Rectangle::new(20, 20, 60, 60), Color(0x00FF_0000)))
        .draw(DrawOp::circle(Circle::new(50, 50, 20), Color(0x0000_00FF)))
        .execute(&mut buffer);

    // Background
    assert_eq!(buffer.pixel(0, 0), Color::WHITE);
    // Rectangle area
    assert_eq!(buffer.pixel(25, 25), Color(0x00FF_0000));
    // Circle center (overwrites rectangle)
    assert_eq!(buffer.pixel(50, 50), Color(0x0000_00FF));
}

#[test]
fn test_vertical_line_same_in_both_modes() {
    let vertical = Line::new(5, 0, 5, 9);

    let mut exact = PixelBuffer::new(10, 10).unwrap();
    DrawList::new()
        .draw(DrawOp::fill(Color::BLACK))
        .draw(DrawOp::line(vertical, Color::WHITE))
        .execute(&mut exact);

    let mut bresenham = PixelBuffer::new(10, 10).unwrap();
    DrawList::new()
        .with_line_mode(LineMode::Bresenham)
        .draw(DrawOp::fill(Color::BLACK))
        .draw(DrawOp::line(vertical, Color::WHITE))
        .execute(&mut bresenham);

    // A vertical line is a single column in both modes
    assert_eq!(exact.count(Color::WHITE), 10);
    assert_eq!(exact, bresenham);
}

#[test]
fn test_empty_draw_list_leaves_buffer_untouched() {
    let mut buffer = PixelBuffer::new(4, 4).unwrap();
    buffer.fill_all(Color(0x0012_3456));
    let before = buffer.clone();

    let list = DrawList::new();
    assert!(list.is_empty());
    list.execute(&mut buffer);
    assert_eq!(buffer, before);
}

// ============================================================================
// Scene File Tests
// ============================================================================

const SCENE_JSON: &str = r##"{
    "width": 64,
    "height": 32,
    "background": "0x00FFBCBC",
    "line_mode": "bresenham",
    "ops": [
        {"op": "rectangle", "x": 4, "y": 4, "width": 8, "height": 8, "color": "0x000000FF"},
        {"op": "circle", "x": 40, "y": 16, "radius": 3, "color": 65280},
        {"op": "line", "x1": 0, "y1": 31, "x2": 63, "y2": 31, "color": "#FFFFFF"}
    ]
}"##;

#[test]
fn test_scene_parses_all_color_spellings() {
    let scene = SceneFile::from_json(SCENE_JSON).unwrap();

    assert_eq!((scene.width, scene.height), (64, 32));
    assert_eq!(scene.background, Some(Color(0x00FF_BCBC)));
    assert_eq!(scene.draw_list.line_mode, LineMode::Bresenham);
    assert_eq!(
        scene.draw_list.ops,
        vec![
            DrawOp::rectangle(Rectangle::new(4, 4, 8, 8), Color(0x0000_00FF)),
            DrawOp::circle(Circle::new(40, 16, 3), Color(0x0000_FF00)),
            DrawOp::line(Line::new(0, 31, 63, 31), Color::WHITE),
        ]
    );
}

#[test]
fn test_scene_renders() {
    let buffer = SceneFile::from_json(SCENE_JSON).unwrap().render().unwrap();

    assert_eq!(buffer.dimensions(), (64, 32));
    assert_eq!(buffer.pixel(0, 0), Color(0x00FF_BCBC));
    assert_eq!(buffer.pixel(4, 4), Color(0x0000_00FF));
    assert_eq!(buffer.pixel(11, 11), Color(0x0000_00FF));
    assert_eq!(buffer.pixel(40, 16), Color(0x0000_FF00));
    assert_eq!(buffer.pixel(30, 31), Color::WHITE);
}

#[test]
fn test_scene_defaults() {
    let scene = SceneFile::from_json(r#"{"width": 3, "height": 2}"#).unwrap();
    assert_eq!(scene.background, None);
    assert_eq!(scene.draw_list.line_mode, LineMode::Exact);
    assert!(scene.draw_list.is_empty());

    let buffer = scene.render().unwrap();
    assert_eq!(buffer.count(Color::BLACK), 6);
}

#[test]
fn test_scene_json_round_trip() {
    let scene = SceneFile::from_json(SCENE_JSON).unwrap();
    let text = scene.to_json().unwrap();
    assert_eq!(SceneFile::from_json(&text).unwrap(), scene);
}

#[test]
fn test_scene_rejects_bad_color() {
    let json = r#"{"width": 3, "height": 2, "ops": [{"op": "fill", "color": "purple"}]}"#;
    assert!(SceneFile::from_json(json).is_err());
}

#[test]
fn test_scene_rejects_signed_hex_color() {
    let json = r##"{"width": 3, "height": 2, "ops": [{"op": "fill", "color": "#+FFFFF"}]}"##;
    assert!(SceneFile::from_json(json).is_err());
}

#[test]
fn test_scene_rejects_unknown_op() {
    let json = r#"{"width": 3, "height": 2, "ops": [{"op": "triangle", "color": 0}]}"#;
    assert!(SceneFile::from_json(json).is_err());
}

#[test]
fn test_scene_zero_size_fails_to_render() {
    let scene = SceneFile::new(0, 10);
    assert!(scene.render().is_err());
}

// ============================================================================
// Demo Tests
// ============================================================================

#[test]
fn test_demo_rectangles_nested() {
    let mut buffer = PixelBuffer::new(800, 800).unwrap();
    demo::rectangles(800).execute(&mut buffer);

    assert_eq!(buffer.pixel(50, 50), demo::BACKGROUND);
    assert_eq!(buffer.pixel(150, 150), Color(0x0000_00FF));
    assert_eq!(buffer.pixel(250, 250), Color(0x0000_FFFF));
    assert_eq!(buffer.pixel(399, 399), Color(0x00FF_00FF));
    assert_eq!(buffer.pixel(500, 500), Color(0x0000_FFFF));
    assert_eq!(buffer.pixel(700, 700), demo::BACKGROUND);
}

#[test]
fn test_demo_circles_grid() {
    let list = demo::circles(800);
    // One fill plus an 8x8 grid
    assert_eq!(list.len(), 65);

    let mut buffer = PixelBuffer::new(800, 800).unwrap();
    list.execute(&mut buffer);

    // First column radius 15, last column radius 50
    assert_eq!(buffer.pixel(50, 35), Color(0x0000_FF00));
    assert_eq!(buffer.pixel(50, 34), Color::BLACK);
    assert_eq!(buffer.pixel(750, 750), Color(0x0000_FF00));
    assert_eq!(buffer.pixel(750, 700), Color(0x0000_FF00));
    assert_eq!(buffer.pixel(0, 0), Color::BLACK);
}

#[test]
fn test_demo_lines() {
    let mut buffer = PixelBuffer::new(800, 800).unwrap();
    demo::lines(800).execute(&mut buffer);

    assert_eq!(buffer.pixel(10, 200), Color(0x00FF_0000));
    assert_eq!(buffer.pixel(10, 600), Color(0x0000_FF00));
    assert_eq!(buffer.pixel(200, 10), Color(0x00A0_00FF));
    assert_eq!(buffer.pixel(600, 10), Color(0x00F0_FF0F));
    assert_eq!(buffer.pixel(123, 123), Color::WHITE);
    assert_eq!(buffer.pixel(123, 799 - 123), Color::WHITE);
    assert_eq!(buffer.pixel(123, 124), Color::BLACK);
}

#[test]
fn test_demo_render_all_writes_three_images() {
    let dir = std::env::temp_dir().join(format!("rasterizer-demo-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();

    let written = demo::render_all(&dir, 80, LineMode::Exact).unwrap();
    assert_eq!(
        written,
        vec![
            dir.join(demo::RECTANGLES_FILE),
            dir.join(demo::CIRCLES_FILE),
            dir.join(demo::LINES_FILE),
        ]
    );

    for path in &written {
        let image = load(path).unwrap();
        assert_eq!((image.width, image.height), (80, 80));
    }
}

#[test]
fn test_demo_render_all_reports_unwritable_dir() {
    let dir = std::env::temp_dir()
        .join(format!("rasterizer-demo-missing-{}", std::process::id()))
        .join("nope");
    let err = demo::render_all(&dir, 16, LineMode::Exact).unwrap_err();
    assert!(format!("{:#}", err).contains("could not save file"));
}
