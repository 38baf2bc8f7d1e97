use super::*;

#[test]
fn direction_axis_helpers() {
    assert!(Direction::East.is_horizontal());
    assert!(Direction::West.is_horizontal());
    assert!(Direction::North.is_vertical());
    assert!(Direction::South.is_vertical());
}

#[test]
fn viewport_degeneracy() {
    assert!(!Viewport::new(800.0, 600.0).is_degenerate());
    assert!(Viewport::new(0.0, 600.0).is_degenerate());
    assert!(Viewport::new(800.0, 0.0).is_degenerate());
    assert!(Viewport::new(-1.0, 600.0).is_degenerate());
    assert!(Viewport::new(f64::NAN, 600.0).is_degenerate());
}

#[test]
fn placement_center_and_rect() {
    let p = Placement {
        origin: Point::new(10.0, 20.0),
        width: 96.0,
        height: 48.0,
        horizontal: true,
        corner: false,
        double: false,
        flipped: false,
    };
    assert_eq!(p.center(), Point::new(58.0, 44.0));
    assert_eq!(p.rect(), Rect::new(10.0, 20.0, 106.0, 68.0));
}
