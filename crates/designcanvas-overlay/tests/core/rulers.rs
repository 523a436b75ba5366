use designcanvas_core::{Axis, ScreenPoint};
use designcanvas_overlay::EditorSession;
use designcanvas_overlay::MemoryScene;
use designcanvas_settings::Config;

fn session() -> EditorSession<MemoryScene> {
    EditorSession::new(Config::default(), MemoryScene::default()).unwrap()
}

#[test]
fn test_tick_counts_per_preset() {
    let mut session = session();
    let rulers = session.rulers();
    assert_eq!(rulers.horizontal.ticks.len(), 121);
    assert_eq!(rulers.vertical.ticks.len(), 81);

    session.select_screen_size("tablet").unwrap();
    let rulers = session.rulers();
    assert_eq!(rulers.horizontal.ticks.len(), 77);
    assert_eq!(rulers.vertical.ticks.len(), 103);
    assert_eq!(rulers.vertical.major_count(), 21);
}

#[test]
fn test_labels_are_document_units_at_any_zoom() {
    let mut session = session();
    session.set_zoom(0.5);
    let small = session.rulers().horizontal;
    session.set_zoom(3.0);
    let large = session.rulers().horizontal;

    let texts = |render: &designcanvas_overlay::RulerRender| {
        render.labels.iter().map(|l| l.text.clone()).collect::<Vec<_>>()
    };
    assert_eq!(texts(&small), texts(&large));
    assert_eq!(small.ticks[5].along, 25.0 + 8.0);
    assert_eq!(large.ticks[5].along, 150.0 + 8.0);
}

#[test]
fn test_ruler_hover_readout() {
    let mut session = session();
    session.set_zoom(2.0);
    let value = session.ruler_hovered(Axis::X, 251.0, ScreenPoint::new(300.0, 12.0));
    assert_eq!(value, 126);

    let readout = session.readout().unwrap();
    assert_eq!(readout.text, "x: 126");
    assert_eq!(readout.anchor, ScreenPoint::new(310.0, -18.0));

    let guideline = session.rulers().horizontal.guideline.unwrap();
    assert_eq!(guideline.value, 126);
    assert!(session.rulers().vertical.guideline.is_none());

    session.ruler_left();
    assert!(session.readout().is_none());
    assert!(session.rulers().horizontal.guideline.is_none());
}
