use layerkit_core::{DocumentError, Error};
use layerkit_designer::model::find_duplicate_id;
use layerkit_designer::{
    DesignerState, DocumentSnapshot, GroupLayer, Layer, LayerKind, LayerPatch,
};
use tempfile::TempDir;

#[test]
fn test_save_and_load_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("design.json");

    let mut state = DesignerState::new();
    state.add_rect();
    state.add_text();
    state.select_all();
    state.group_selection();
    state.set_canvas_size(1200.0, 628.0);
    state.save_to_file(&path).unwrap();
    assert!(!state.is_modified());

    let mut loaded = DesignerState::new();
    loaded.load_from_file(&path).unwrap();
    assert_eq!(loaded.snapshot(), state.snapshot());
    assert!(loaded.history().is_empty());
    assert!(loaded.selected_ids().is_empty());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let mut state = DesignerState::new();
    let err = state
        .load_from_file(temp_dir.path().join("missing.json"))
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_from_json_rejects_duplicate_ids() {
    let rect = Layer::rect();
    let snapshot = DocumentSnapshot {
        layers: vec![rect.clone(), rect],
        width: 800.0,
        height: 600.0,
        background: "#ffffff".to_string(),
    };
    let json = serde_json::to_string(&snapshot).unwrap();

    let err = DesignerState::from_json(&json).unwrap_err();
    assert!(err.is_document_error());
    assert!(matches!(
        err,
        Error::Document(DocumentError::DuplicateId { .. })
    ));
}

#[test]
fn test_undo_after_load_stops_at_loaded_document() {
    let mut state = DesignerState::new();
    state.add_rect();
    let json = state.to_json().unwrap();

    let mut loaded = DesignerState::from_json(&json).unwrap();
    loaded.add_text();
    loaded.undo();
    loaded.undo();
    assert_eq!(loaded.layer_count(), 1);
}

#[test]
fn test_snapshot_accepts_minimal_layer_json() {
    let json = r##"{
        "layers": [
            { "id": "a", "type": "rect", "x": 5, "y": 6, "width": 10, "height": 20 },
            { "id": "b", "type": "text", "x": 0, "y": 0, "text": "Hi" }
        ],
        "width": 800,
        "height": 600,
        "background": "#fafafa"
    }"##;
    let state = DesignerState::from_json(json).unwrap();
    let rect = &state.layers()[0];
    assert_eq!((rect.x, rect.y), (5.0, 6.0));
    assert_eq!(rect.extent(), (10.0, 20.0));
    assert!(rect.visible);
    assert_eq!(rect.scale_x, 1.0);
}

#[test]
fn test_group_content_reusing_ids_keeps_document_loadable() {
    let mut state = DesignerState::new();
    let a = state.add_layer(Layer::rect_at(10.0, 10.0, 30.0, 30.0));
    let b = state.add_layer(Layer::rect_at(50.0, 50.0, 30.0, 30.0));
    let outside = state.add_rect();
    state.select(&a);
    state.add_to_selection(&b);
    let group = state.group_selection().unwrap();

    let stolen = state.layer(&outside).unwrap().clone();
    let patch = LayerPatch::new()
        .with_name("Reused")
        .with_content(LayerKind::Group(GroupLayer::new(vec![stolen])));
    assert!(state.update_layer(&group, patch));

    assert_eq!(state.layer(&group).unwrap().name, "Reused");
    assert_eq!(state.layer(&group).unwrap().children().unwrap().len(), 2);
    assert!(find_duplicate_id(state.layers()).is_none());
    assert!(DesignerState::from_json(&state.to_json().unwrap()).is_ok());
}

#[test]
fn test_group_content_with_own_ids_is_applied() {
    let mut state = DesignerState::new();
    state.add_rect();
    state.add_text();
    state.select_all();
    let group = state.group_selection().unwrap();

    let mut children = state.layer(&group).unwrap().children().unwrap().to_vec();
    children.pop();
    let patch = LayerPatch::new().with_content(LayerKind::Group(GroupLayer::new(children)));
    assert!(state.update_layer(&group, patch));
    assert_eq!(state.layer(&group).unwrap().children().unwrap().len(), 1);
    assert!(find_duplicate_id(state.layers()).is_none());
}

#[test]
fn test_add_layer_with_repeated_child_ids() {
    let child = Layer::rect_at(0.0, 0.0, 10.0, 10.0);
    let group = Layer::new(
        LayerKind::Group(GroupLayer::new(vec![child.clone(), child])),
        0.0,
        0.0,
    );

    let mut state = DesignerState::new();
    state.add_layer(group);
    assert!(find_duplicate_id(state.layers()).is_none());
    assert_eq!(state.layers()[0].children().unwrap().len(), 2);
    assert!(DesignerState::from_json(&state.to_json().unwrap()).is_ok());
}
