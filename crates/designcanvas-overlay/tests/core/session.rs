use designcanvas_core::{AppEvent, CanvasSize, DocPoint, OverlayEvent, ScreenPoint};
use designcanvas_overlay::{EditorSession, MemoryScene, SceneCanvas, Tool};
use designcanvas_settings::{Config, ScreenPreset};

#[test]
fn test_session_rejects_invalid_config() {
    let mut config = Config::default();
    config.default_screen = "watch".to_string();
    assert!(EditorSession::new(config, MemoryScene::default()).is_err());

    let mut config = Config::default();
    config.zoom.min = 5.0;
    assert!(EditorSession::new(config, MemoryScene::default()).is_err());
}

#[test]
fn test_session_uses_configured_preset_and_zoom() {
    let mut config = Config::default();
    config
        .screen_sizes
        .push(ScreenPreset::new("watch", "Watch", 198.0, 242.0));
    config.default_screen = "watch".to_string();
    config.zoom.initial = 2.0;

    let session = EditorSession::new(config, MemoryScene::default()).unwrap();
    assert_eq!(session.state().canvas(), CanvasSize::new(198.0, 242.0).unwrap());
    assert_eq!(session.zoom().percent(), 200);
    assert_eq!(session.scene().zoom(), 2.0);
    assert_eq!(session.frame_label().as_deref(), Some("Watch 198×242"));
}

#[test]
fn test_hidden_frame_label() {
    let mut config = Config::default();
    config.frame.show_label = false;
    let session = EditorSession::new(config, MemoryScene::default()).unwrap();
    assert!(session.frame_label().is_none());
}

#[test]
fn test_scene_pointer_moves_bypass_transform() {
    let mut session = EditorSession::new(Config::default(), MemoryScene::default()).unwrap();
    session.set_zoom(3.0);
    session.pointer_entered();
    session.scene_pointer_moved(DocPoint::new(10.4, -0.5), ScreenPoint::new(95.0, 70.0));
    let status = session.status().to_string();
    assert!(status.starts_with("Mouse: 10, -1 |"), "{}", status);
}

#[test]
fn test_placement_sequence() {
    let mut session = EditorSession::new(Config::default(), MemoryScene::default()).unwrap();
    session.set_color("#10b981");
    for tool in [Tool::Rectangle, Tool::Circle, Tool::Text] {
        session.set_tool(tool);
        assert!(session.place(DocPoint::new(100.0, 100.0)).is_some());
        assert_eq!(session.tools().active(), Tool::Select);
    }
    assert_eq!(session.scene().object_count(), 3);
    assert!(session.scene().objects().iter().all(|o| o.fill == "#10b981"));
    assert!(session.status().to_string().ends_with("Objects: 3"));
}

#[tokio::test]
async fn test_async_receiver_sees_overlay_events() {
    let mut session = EditorSession::new(Config::default(), MemoryScene::default()).unwrap();
    let mut rx = session.bus().receiver();

    session.toggle_grid();
    session.zoom_out();
    session.pointer_entered();

    let mut seen = Vec::new();
    for _ in 0..3 {
        if let AppEvent::Overlay(event) = rx.recv().await.unwrap() {
            seen.push(event);
        }
    }
    assert_eq!(
        seen,
        vec![
            OverlayEvent::GridToggled { visible: false },
            OverlayEvent::ZoomChanged { zoom: 0.75 },
            OverlayEvent::SurfaceHover { inside: true },
        ]
    );
}
