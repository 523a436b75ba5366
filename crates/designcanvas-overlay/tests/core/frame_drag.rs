use std::sync::Arc;

use designcanvas_core::{
    AppEvent, CanvasSize, EventBus, EventFilter, OverlayEvent, PointerEvent, ScreenPoint,
};
use designcanvas_overlay::{FramePosition, FrameView, ZoomFactor};
use parking_lot::Mutex;

fn tablet_frame(zoom: f64) -> FrameView {
    FrameView::new(
        CanvasSize::new(768.0, 1024.0).unwrap(),
        CanvasSize::new(1600.0, 1200.0).unwrap(),
        ZoomFactor::new(zoom),
        "Tablet",
    )
}

#[test]
fn test_drag_lifecycle_over_bus() {
    let bus = Arc::new(EventBus::new());
    let frame = tablet_frame(1.0);
    let start = frame.position();
    assert_eq!(start, FramePosition { x: 416.0, y: 88.0 });

    let moves = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&moves);
    let _watch = bus.subscribe_scoped(EventFilter::overlay(), move |event| {
        if let AppEvent::Overlay(OverlayEvent::FrameMoved { x, y }) = event {
            sink.lock().push((*x, *y));
        }
    });

    assert!(frame.press(&bus, ScreenPoint::new(500.0, 100.0)));
    assert!(!frame.press(&bus, ScreenPoint::new(500.0, 100.0)));

    let _ = bus.publish(AppEvent::Pointer(PointerEvent::moved(400.0, 150.0)));
    let _ = bus.publish(AppEvent::Pointer(PointerEvent::moved(-1000.0, 150.0)));
    assert_eq!(frame.position(), FramePosition { x: 0.0, y: 138.0 });

    let _ = bus.publish(AppEvent::Pointer(PointerEvent::up(-1000.0, 150.0)));
    assert!(!frame.is_dragging());

    let _ = bus.publish(AppEvent::Pointer(PointerEvent::moved(800.0, 150.0)));
    assert_eq!(frame.position(), FramePosition { x: 0.0, y: 138.0 });

    assert_eq!(*moves.lock(), vec![(316.0, 138.0), (0.0, 138.0)]);
}

#[test]
fn test_second_drag_takes_fresh_offset() {
    let bus = Arc::new(EventBus::new());
    let frame = tablet_frame(1.0);
    let start = frame.position();

    assert!(frame.press(&bus, ScreenPoint::new(start.x + 1.0, start.y + 1.0)));
    frame.pointer_moved(ScreenPoint::new(start.x + 51.0, start.y + 51.0));
    assert!(frame.release());
    let p = frame.position();
    assert_eq!(p, FramePosition { x: start.x + 50.0, y: start.y + 50.0 });

    assert!(frame.press(&bus, ScreenPoint::new(p.x + 10.0, p.y + 10.0)));
    let moved = frame
        .pointer_moved(ScreenPoint::new(p.x + 20.0, p.y + 30.0))
        .unwrap();
    assert_eq!(moved, FramePosition { x: p.x + 10.0, y: p.y + 20.0 });
    assert!(frame.release());
    assert_eq!(bus.subscriber_count(), 0);
}

#[test]
fn test_second_drag_over_bus() {
    let bus = Arc::new(EventBus::new());
    let frame = tablet_frame(1.0);
    let start = frame.position();

    assert!(frame.press(&bus, ScreenPoint::new(start.x + 1.0, start.y + 1.0)));
    let _ = bus.publish(AppEvent::Pointer(PointerEvent::moved(
        start.x + 51.0,
        start.y + 51.0,
    )));
    let _ = bus.publish(AppEvent::Pointer(PointerEvent::up(
        start.x + 51.0,
        start.y + 51.0,
    )));
    assert!(!frame.is_dragging());
    let p = frame.position();
    assert_eq!(p, FramePosition { x: start.x + 50.0, y: start.y + 50.0 });

    assert!(frame.press(&bus, ScreenPoint::new(p.x + 10.0, p.y + 10.0)));
    let _ = bus.publish(AppEvent::Pointer(PointerEvent::moved(p.x + 20.0, p.y + 30.0)));
    assert_eq!(frame.position(), FramePosition { x: p.x + 10.0, y: p.y + 20.0 });
    let _ = bus.publish(AppEvent::Pointer(PointerEvent::up(p.x + 20.0, p.y + 30.0)));
    assert!(!frame.is_dragging());
    assert_eq!(bus.subscriber_count(), 0);
}

#[test]
fn test_idle_moves_are_ignored() {
    let frame = tablet_frame(1.0);
    let before = frame.position();
    assert!(frame.pointer_moved(ScreenPoint::new(0.0, 0.0)).is_none());
    assert!(!frame.release());
    assert_eq!(frame.position(), before);
}

#[test]
fn test_clamp_range_scales_with_zoom() {
    let bus = Arc::new(EventBus::new());
    let frame = tablet_frame(2.0);
    let rect = frame.rect();
    assert_eq!((rect.width, rect.height), (1536.0, 2048.0));

    assert!(frame.press(&bus, ScreenPoint::new(rect.x + 1.0, rect.y + 1.0)));
    let far = frame
        .pointer_moved(ScreenPoint::new(10_000.0, 10_000.0))
        .unwrap();
    assert_eq!(far, FramePosition { x: 1664.0, y: 352.0 });
}

#[test]
fn test_dropping_bus_while_dragging() {
    let bus = Arc::new(EventBus::new());
    let frame = tablet_frame(1.0);
    assert!(frame.press(&bus, ScreenPoint::new(500.0, 100.0)));
    drop(bus);
    assert!(frame.is_dragging());
    assert!(frame.release());
}
