use caption_canvas::{Command, CommandError, DEFAULT_STROKE_WIDTH, Session, ShapeKind};
use egui::Color32;

fn new_session() -> Session {
    Session::new(800, 600).expect("valid frame")
}

#[test]
fn test_invalid_frame_is_rejected() {
    assert!(Session::new(0, 600).is_err());
    assert!(Session::new(800, 0).is_err());
}

#[test]
fn test_create_text_defaults() {
    let mut session = new_session();
    let id = session.create_text();

    let object = session.scene().active_object().expect("text is active");
    assert_eq!(object.id(), id);
    assert_eq!(object.object_type(), "text");
    assert_eq!(object.position(), egui::Pos2::new(100.0, 100.0));
    assert_eq!(object.style().unwrap().fill, Color32::BLACK);
}

#[test]
fn test_create_shape_defaults() {
    let mut session = new_session();
    session.create_shape("circle").unwrap();

    let circle = session.scene().active_object().unwrap();
    assert_eq!(circle.object_type(), "circle");
    assert_eq!(circle.position(), egui::Pos2::new(150.0, 150.0));
    assert_eq!(circle.rect().size(), egui::vec2(100.0, 100.0));
    let style = circle.style().unwrap();
    assert_eq!(style.fill, Color32::TRANSPARENT);
    assert_eq!(style.stroke, Color32::BLUE);
    assert_eq!(style.stroke_width, DEFAULT_STROKE_WIDTH);

    session.create_shape("polygon").unwrap();
    let polygon = session.scene().active_object().unwrap();
    assert_eq!(polygon.object_type(), "polygon");
    assert_eq!(polygon.position(), egui::Pos2::new(100.0, 100.0));
}

#[test]
fn test_new_object_becomes_active() {
    let mut session = new_session();
    let text = session.create_text();
    assert_eq!(session.scene().active_object().unwrap().id(), text);

    let rect = session.create_shape("rectangle").unwrap();
    assert_eq!(session.scene().active_object().unwrap().id(), rect);
}

#[test]
fn test_unknown_shape_kind_is_a_silent_no_op() {
    let mut session = new_session();
    session.create_shape("circle").unwrap();
    let objects_before = session.scene().len();
    let log_before = session.log().len();

    let err = session.create_shape("hexagon").unwrap_err();
    assert_eq!(err, CommandError::UnknownShape("hexagon".to_owned()));
    assert_eq!(session.scene().len(), objects_before);
    assert_eq!(session.log().len(), log_before);
}

#[test]
fn test_every_successful_command_logs_exactly_once() {
    let mut session = new_session();

    session.create_text();
    assert_eq!(session.log().len(), 1);

    session.create_shape("triangle").unwrap();
    assert_eq!(session.log().len(), 2);

    session.apply_fill(Color32::RED).unwrap();
    assert_eq!(session.log().len(), 3);

    session
        .apply_stroke(Color32::GREEN, DEFAULT_STROKE_WIDTH)
        .unwrap();
    assert_eq!(session.log().len(), 4);

    let descriptions: Vec<_> = session
        .log()
        .entries()
        .iter()
        .map(|e| e.description.clone())
        .collect();
    assert_eq!(descriptions[0], "Added text");
    assert_eq!(descriptions[1], "Added triangle");
    assert_eq!(descriptions[2], "Applied fill #ff0000 to triangle");
    assert!(descriptions[3].starts_with("Applied stroke #00ff00"));
}

#[test]
fn test_style_mutation_without_selection_is_a_no_op() {
    let mut session = new_session();
    assert_eq!(session.apply_fill(Color32::RED), Err(CommandError::NoSelection));
    assert_eq!(
        session.apply_stroke(Color32::RED, 3.0),
        Err(CommandError::NoSelection)
    );
    assert!(session.scene().is_empty());
    assert!(session.log().is_empty());
}

#[test]
fn test_fill_mutates_in_place_preserving_other_attributes() {
    let mut session = new_session();
    session.create_shape("circle").unwrap();
    let before = *session.scene().active_object().unwrap().style().unwrap();

    session.apply_fill(Color32::RED).unwrap();

    let object = session.scene().active_object().unwrap();
    let after = object.style().unwrap();
    assert_eq!(after.fill, Color32::RED);
    assert_eq!(after.stroke, before.stroke);
    assert_eq!(after.stroke_width, before.stroke_width);
    assert_eq!(object.position(), egui::Pos2::new(150.0, 150.0));
}

#[test]
fn test_stroke_mutation_targets_host_selection() {
    let mut session = new_session();
    let first = session.create_shape("rectangle").unwrap();
    session.create_shape("circle").unwrap();

    // Host reports the pointer going back to the rectangle
    assert!(session.select(first));
    session.apply_stroke(Color32::BLACK, 5.0).unwrap();

    let objects = session.scene().objects();
    let rect = objects.iter().find(|o| o.id() == first).unwrap();
    assert_eq!(rect.style().unwrap().stroke, Color32::BLACK);
    assert_eq!(rect.style().unwrap().stroke_width, 5.0);
    // The circle kept its defaults
    let circle = objects.iter().find(|o| o.id() != first).unwrap();
    assert_eq!(circle.style().unwrap().stroke, Color32::BLUE);
}

#[test]
fn test_command_enum_drives_the_same_paths() {
    let mut session = new_session();
    Command::AddShape(ShapeKind::Circle).apply(&mut session).unwrap();
    Command::ApplyFill(Color32::RED).apply(&mut session).unwrap();
    Command::ApplyStroke {
        color: Color32::BLACK,
        width: DEFAULT_STROKE_WIDTH,
    }
    .apply(&mut session)
    .unwrap();

    assert_eq!(session.log().len(), 3);
    assert_eq!(session.scene().len(), 1);
}
