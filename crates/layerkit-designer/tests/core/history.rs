use layerkit_designer::{DesignerState, LayerKind, LayerPatch};

#[test]
fn test_add_rect_add_text_undo_redo() {
    let mut state = DesignerState::new();
    let rect = state.add_rect();
    let text = state.add_text();

    state.undo();
    assert_eq!(state.layer_count(), 1);
    assert_eq!(state.layers()[0].id, rect);

    state.redo();
    let ids: Vec<_> = state.layers().iter().map(|l| l.id.clone()).collect();
    assert_eq!(ids, vec![rect, text]);
    assert!(matches!(state.layers()[1].kind, LayerKind::Text(_)));
}

#[test]
fn test_history_capped_at_one_hundred() {
    let mut state = DesignerState::new();
    for _ in 0..150 {
        state.add_rect();
    }
    assert_eq!(state.history().len(), 100);
    assert_eq!(state.history_index(), Some(99));

    while state.can_undo() {
        state.undo();
    }
    assert_eq!(state.layer_count(), 50);
}

#[test]
fn test_new_action_discards_redo() {
    let mut state = DesignerState::new();
    state.add_rect();
    state.add_text();
    state.undo();
    assert!(state.can_redo());

    state.add_ellipse();
    assert!(!state.can_redo());
    assert_eq!(state.history().len(), 2);
    assert_eq!(state.history_index(), Some(1));
}

#[test]
fn test_history_labels_form_audit_trail() {
    let mut state = DesignerState::new();
    let id = state.add_rect();
    state.update_layer(&id, LayerPatch::position(0.0, 0.0));
    state.add_text();
    state.reorder_layers(1, 0);
    state.select_all();
    state.delete_selected();

    let labels: Vec<_> = state.history().iter().map(|e| e.label().to_string()).collect();
    assert_eq!(
        labels,
        vec![
            "ADD_LAYER",
            "UPDATE_LAYER",
            "ADD_LAYER",
            "REORDER_LAYERS",
            "DELETE_LAYERS"
        ]
    );
}

#[test]
fn test_undo_restores_deleted_layers_in_place() {
    let mut state = DesignerState::new();
    state.add_rect();
    let middle = state.add_text();
    state.add_line();
    let before = state.layers().to_vec();

    state.select(&middle);
    state.delete_selected();
    assert_eq!(state.layer_count(), 2);

    state.undo();
    assert_eq!(state.layers(), before.as_slice());
}

#[test]
fn test_nested_update_undo() {
    let mut state = DesignerState::new();
    state.add_rect();
    state.add_text();
    state.select_all();
    let group = state.group_selection().unwrap();
    let child = state.layer(&group).unwrap().children().unwrap()[0].id.clone();

    assert!(state.update_layer(&child, LayerPatch::new().with_opacity(0.5)));
    assert_eq!(state.layer(&child).unwrap().opacity, 0.5);
    state.undo();
    assert_eq!(state.layer(&child).unwrap().opacity, 1.0);
}

#[test]
fn test_seek_to_start_and_back() {
    let mut state = DesignerState::new();
    state.add_rect();
    state.add_text();
    state.add_line();
    let full = state.layers().to_vec();

    state.set_history_index(None);
    assert!(state.layers().is_empty());
    assert_eq!(state.history_index(), None);

    state.set_history_index(Some(2));
    assert_eq!(state.layers(), full.as_slice());
}
