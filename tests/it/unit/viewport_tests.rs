//! Viewport transform tests.

use crate::helpers::assert_approx;
use visionboard::Point;
use visionboard::constants::{MAX_SCALE, MIN_SCALE};
use visionboard::viewport::{Viewport, ZoomDirection};

fn at_origin(scale: f64) -> Viewport {
    let mut viewport = Viewport::new((1000.0, 800.0), (0.0, 0.0));
    viewport.set_transform(scale, Point::new(0.0, 0.0));
    viewport
}

#[test]
fn test_screen_world_round_trip() {
    let mut viewport = at_origin(1.5);
    viewport.pan_by(30.0, -12.0);

    let world = Point::new(123.0, -45.5);
    let screen = viewport.world_to_screen(world);
    let back = viewport.screen_to_world(screen);

    assert_approx(back.x, world.x);
    assert_approx(back.y, world.y);
}

#[test]
fn test_pan_by_divides_by_scale() {
    let mut viewport = at_origin(2.0);
    viewport.pan_by(50.0, -20.0);
    assert_eq!(viewport.pan(), Point::new(25.0, -10.0));
}

#[test]
fn test_zoom_keeps_anchor_under_cursor() {
    let mut viewport = at_origin(1.0);
    viewport.pan_by(37.0, -11.0);

    let cursors = [(300.0, 200.0), (10.0, 790.0), (640.0, 0.0), (999.0, 400.0)];
    let directions = [
        ZoomDirection::In,
        ZoomDirection::In,
        ZoomDirection::Out,
        ZoomDirection::In,
        ZoomDirection::Out,
        ZoomDirection::Out,
    ];

    for (i, direction) in directions.iter().enumerate() {
        let (sx, sy) = cursors[i % cursors.len()];
        let anchor = viewport.screen_to_world(Point::new(sx, sy));

        viewport.zoom_at(sx, sy, *direction);

        let screen = viewport.world_to_screen(anchor);
        assert!((screen.x - sx).abs() < 1e-6, "x drifted on step {i}");
        assert!((screen.y - sy).abs() < 1e-6, "y drifted on step {i}");
    }
}

#[test]
fn test_zoom_steps() {
    let mut viewport = at_origin(1.0);
    assert!(viewport.zoom_at(0.0, 0.0, ZoomDirection::In));
    assert_approx(viewport.scale(), 1.1);

    let mut viewport = at_origin(1.0);
    assert!(viewport.zoom_at(0.0, 0.0, ZoomDirection::Out));
    assert_approx(viewport.scale(), 0.9);
}

#[test]
fn test_scale_stays_within_limits() {
    let mut viewport = at_origin(1.0);
    for _ in 0..100 {
        viewport.zoom_at(500.0, 400.0, ZoomDirection::In);
        assert!(viewport.scale() <= MAX_SCALE);
    }
    assert_eq!(viewport.scale(), MAX_SCALE);
    assert!(!viewport.zoom_at(500.0, 400.0, ZoomDirection::In));

    for _ in 0..100 {
        viewport.zoom_at(500.0, 400.0, ZoomDirection::Out);
        assert!(viewport.scale() >= MIN_SCALE);
    }
    assert_eq!(viewport.scale(), MIN_SCALE);
}

#[test]
fn test_clamped_zoom_still_preserves_anchor() {
    let mut viewport = at_origin(4.8);
    let anchor = viewport.screen_to_world(Point::new(250.0, 125.0));

    assert!(viewport.zoom_at(250.0, 125.0, ZoomDirection::In));
    assert_eq!(viewport.scale(), MAX_SCALE);

    let screen = viewport.world_to_screen(anchor);
    assert!((screen.x - 250.0).abs() < 1e-6);
    assert!((screen.y - 125.0).abs() < 1e-6);
}

#[test]
fn test_wheel_direction() {
    assert_eq!(ZoomDirection::from_wheel_delta(120.0), ZoomDirection::Out);
    assert_eq!(ZoomDirection::from_wheel_delta(-3.0), ZoomDirection::In);
}

#[test]
fn test_reset_centers_frame() {
    let mut viewport = Viewport::new((1200.0, 900.0), (400.0, 300.0));
    viewport.zoom_at(10.0, 10.0, ZoomDirection::In);
    viewport.pan_by(500.0, 500.0);

    viewport.reset();

    assert_eq!(viewport.scale(), 1.0);
    assert_eq!(viewport.pan(), Point::new(400.0, 300.0));
}

#[test]
fn test_initial_placement_centers_item() {
    let viewport = at_origin(2.0);
    // Window center (500, 400) is world (250, 200) at scale 2
    let pos = viewport.initial_placement(200.0, 100.0);
    assert_eq!(pos, Point::new(150.0, 150.0));

    let screen = viewport.world_to_screen(Point::new(pos.x + 100.0, pos.y + 50.0));
    assert_eq!(screen, Point::new(500.0, 400.0));
}

#[test]
fn test_window_resize_moves_placement() {
    let mut viewport = at_origin(1.0);
    viewport.set_window_size(400.0, 200.0);
    assert_eq!(viewport.initial_placement(0.0, 0.0), Point::new(200.0, 100.0));
}
