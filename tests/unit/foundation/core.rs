use super::*;

#[test]
fn canvas_size_rejects_zero_dimensions() {
    assert!(CanvasSize::new(0, 10).is_err());
    assert!(CanvasSize::new(10, 0).is_err());
    assert!(CanvasSize::new(1, 1).is_ok());
}

#[test]
fn canvas_size_contains_boundaries() {
    let size = CanvasSize::new(4, 3).unwrap();
    assert!(size.contains(PixelCoord::new(0, 0)));
    assert!(size.contains(PixelCoord::new(3, 2)));
    assert!(!size.contains(PixelCoord::new(4, 2)));
    assert!(!size.contains(PixelCoord::new(3, 3)));
    assert!(!size.contains(PixelCoord::new(-1, 0)));

    assert!(size.contains_point(Point::new(3.9, 2.9)));
    assert!(!size.contains_point(Point::new(-1.0, -1.0)));
    assert!(!size.contains_point(Point::new(4.0, 0.0)));
}

#[test]
fn bgra_byte_order_is_blue_first() {
    let px = Bgra8::from_rgba(10, 20, 30, 40);
    assert_eq!(px.to_bytes(), [30, 20, 10, 40]);
    assert_eq!(px.to_rgba(), [10, 20, 30, 40]);
    assert_eq!(Bgra8::from_bytes(px.to_bytes()), px);
    assert_eq!(Bgra8::BLANK.to_bytes(), [255, 255, 255, 0]);
    assert!(Bgra8::INK.is_opaque());
    assert!(!Bgra8::TRANSPARENT.is_opaque());
}

#[test]
fn pixel_coord_truncates_toward_zero() {
    assert_eq!(
        PixelCoord::from_point_trunc(Point::new(3.9, 7.2)),
        PixelCoord::new(3, 7)
    );
    assert_eq!(PixelCoord::new(5, 6).to_point(), Point::new(5.0, 6.0));
}
