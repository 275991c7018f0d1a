use caption_canvas::{ImageSource, LoadError, LoadOutcome, Session, loader};

/// Encode a solid-color PNG to stand in for a host-supplied image source.
fn solid_png(width: u32, height: u32, r: u8, g: u8, b: u8) -> Vec<u8> {
    let mut pixmap = tiny_skia::Pixmap::new(width, height).unwrap();
    pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, 255));
    pixmap.encode_png().unwrap()
}

#[test]
fn test_load_seeds_background_at_paint_order_zero() {
    let mut session = Session::new(800, 600).unwrap();
    session.create_text();

    let source = ImageSource::Bytes(solid_png(400, 300, 10, 20, 30));
    let outcome = session.load_background(&source).unwrap();
    assert_eq!(outcome, LoadOutcome::Applied);

    let background = session.scene().background().expect("background present");
    assert_eq!(background.natural_width(), 400);
    assert_eq!(background.natural_height(), 300);
    // 800/400 and 600/300 both give 2.0, for a drawn size of exactly 800x600
    assert_eq!(background.scale(), 2.0);
    assert_eq!(background.position(), egui::Pos2::ZERO);
    assert_eq!(background.rect().max, egui::Pos2::new(800.0, 600.0));
    assert!(!session.scene().objects()[0].selectable());
}

#[test]
fn test_load_replaces_prior_background() {
    let mut session = Session::new(800, 600).unwrap();
    session
        .load_background(&ImageSource::Bytes(solid_png(400, 300, 0, 0, 0)))
        .unwrap();
    session
        .load_background(&ImageSource::Bytes(solid_png(200, 200, 0, 0, 0)))
        .unwrap();

    assert_eq!(session.scene().len(), 1);
    let background = session.scene().background().unwrap();
    assert_eq!(background.natural_width(), 200);
    // Cover scale now bound by the wider frame axis: 800/200
    assert_eq!(background.scale(), 4.0);
}

#[test]
fn test_failed_load_leaves_session_usable() {
    let mut session = Session::new(800, 600).unwrap();
    let err = session
        .load_background(&ImageSource::Bytes(b"not an image".to_vec()))
        .unwrap_err();
    assert!(matches!(err, LoadError::Decode(_)));
    assert!(session.scene().background().is_none());

    // Shapes still compose against the empty frame
    session.create_shape("circle").unwrap();
    assert!(session.export().is_ok());
}

#[test]
fn test_empty_source_is_a_load_error() {
    let mut session = Session::new(800, 600).unwrap();
    let err = session
        .load_background(&ImageSource::Bytes(Vec::new()))
        .unwrap_err();
    assert!(matches!(err, LoadError::EmptySource));
}

#[test]
fn test_superseded_load_is_discarded() {
    let mut session = Session::new(800, 600).unwrap();

    let stale = session.begin_load();
    let current = session.begin_load();

    // The stale completion arrives first and must not touch the scene.
    let decoded = loader::decode(&ImageSource::Bytes(solid_png(100, 100, 1, 2, 3)));
    let outcome = session.complete_load(stale, decoded).unwrap();
    assert_eq!(outcome, LoadOutcome::Superseded);
    assert!(session.scene().background().is_none());

    let decoded = loader::decode(&ImageSource::Bytes(solid_png(400, 300, 1, 2, 3)));
    let outcome = session.complete_load(current, decoded).unwrap();
    assert_eq!(outcome, LoadOutcome::Applied);
    assert_eq!(session.scene().background().unwrap().natural_width(), 400);
}

#[test]
fn test_ticket_from_another_session_is_discarded() {
    let mut old_session = Session::new(800, 600).unwrap();
    let ticket = old_session.begin_load();
    old_session.dispose();

    // The host replaced the editor; the in-flight result lands on the new
    // session and must be a no-op.
    let mut session = Session::new(800, 600).unwrap();
    let decoded = loader::decode(&ImageSource::Bytes(solid_png(100, 100, 1, 2, 3)));
    let outcome = session.complete_load(ticket, decoded).unwrap();
    assert_eq!(outcome, LoadOutcome::Superseded);
    assert!(session.scene().background().is_none());
}

#[test]
fn test_selection_survives_late_background_arrival() {
    let mut session = Session::new(800, 600).unwrap();
    let ticket = session.begin_load();
    let circle = session.create_shape("circle").unwrap();

    let decoded = loader::decode(&ImageSource::Bytes(solid_png(400, 300, 1, 2, 3)));
    session.complete_load(ticket, decoded).unwrap();

    // Background went to index 0, the circle is still the active selection.
    assert_eq!(session.scene().active_object().unwrap().id(), circle);
    session.apply_fill(egui::Color32::RED).unwrap();
}
