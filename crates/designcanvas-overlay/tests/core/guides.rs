use designcanvas_core::{DocPoint, ScreenPoint, SurfaceRect};
use designcanvas_overlay::{EditorSession, GuideKind, MemoryScene, Orientation, Tool};
use designcanvas_settings::Config;

fn session_with_object() -> EditorSession<MemoryScene> {
    let mut session = EditorSession::new(Config::default(), MemoryScene::default()).unwrap();
    session.set_tool(Tool::Circle);
    session.place(DocPoint::new(600.0, 400.0)).unwrap();
    session
}

#[test]
fn test_guides_follow_pointer_and_objects() {
    let mut session = session_with_object();
    assert!(session.guides().is_none());

    session.pointer_entered();
    session.pointer_moved(
        ScreenPoint::new(150.0, 90.0),
        SurfaceRect::new(50.0, 40.0, 1200.0, 800.0),
    );
    let overlay = session.guides().unwrap();
    let crosshair: Vec<_> = overlay.lines_of(GuideKind::Pointer).collect();
    assert_eq!(crosshair[0].orientation, Orientation::Vertical);
    assert_eq!(crosshair[0].position, 100.0);
    assert_eq!(crosshair[1].position, 50.0);

    session.pointer_left();
    assert!(session.guides().is_none());
}

#[test]
fn test_guides_hidden_after_external_clear() {
    let mut session = session_with_object();
    session.pointer_entered();
    assert!(session.guides().is_some());

    let id = session.scene().objects()[0].id;
    assert!(session.scene_mut().remove(id));
    assert!(session.guides().is_some());

    assert_eq!(session.sync_objects(), 0);
    assert!(session.guides().is_none());
}

#[test]
fn test_centre_marker_tracks_canvas() {
    let mut session = session_with_object();
    session.pointer_entered();
    session.select_screen_size("tablet").unwrap();
    session.set_zoom(0.5);
    let overlay = session.guides().unwrap();
    assert_eq!(overlay.marker.center.x, 192.0);
    assert_eq!(overlay.marker.center.y, 256.0);
}
