use designcanvas_core::{DocPoint, ScreenPoint, SurfaceRect};
use designcanvas_overlay::{capture, ruler_offset_to_document, CoordinateSpace, ZoomFactor};

#[test]
fn test_capture_translates_by_surface_origin() {
    let surface = SurfaceRect::new(250.0, 120.0, 1200.0, 800.0);
    let pos = capture(ScreenPoint::new(250.0, 120.0), &surface, ZoomFactor::IDENTITY);
    assert_eq!((pos.x, pos.y), (0, 0));

    let pos = capture(ScreenPoint::new(240.0, 100.0), &surface, ZoomFactor::IDENTITY);
    assert_eq!((pos.x, pos.y), (-10, -20));
    assert_eq!((pos.screen_x, pos.screen_y), (240, 100));
}

#[test]
fn test_capture_at_quarter_zoom() {
    let surface = SurfaceRect::new(0.0, 0.0, 300.0, 200.0);
    let pos = capture(ScreenPoint::new(300.0, 200.0), &surface, ZoomFactor::new(0.25));
    assert_eq!((pos.x, pos.y), (1200, 800));
}

#[test]
fn test_document_to_screen_inverse() {
    let space = CoordinateSpace::new(ZoomFactor::new(1.5), ScreenPoint::new(40.0, 60.0));
    let screen = space.document_to_screen(DocPoint::new(100.0, 200.0));
    assert_eq!(screen, ScreenPoint::new(190.0, 360.0));
    assert_eq!(space.screen_to_document(screen), DocPoint::new(100.0, 200.0));
}

#[test]
fn test_ruler_offset_matches_capture() {
    let zoom = ZoomFactor::new(1.75);
    let surface = SurfaceRect::new(0.0, 0.0, 2100.0, 1400.0);
    let pos = capture(ScreenPoint::new(333.0, 0.0), &surface, zoom);
    assert_eq!(ruler_offset_to_document(333.0, zoom), pos.x);
}
