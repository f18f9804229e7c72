use layerkit_designer::{DesignerState, Layer, LayerId, LayerKind, LayerPatch, RectLayer};

fn order(state: &DesignerState) -> Vec<LayerId> {
    state.layers().iter().map(|l| l.id.clone()).collect()
}

#[test]
fn test_group_then_ungroup_restores_absolute_positions() {
    let mut state = DesignerState::new();
    let a = state.add_layer(Layer::rect_at(10.0, 10.0, 30.0, 30.0));
    let b = state.add_layer(Layer::rect_at(50.0, 50.0, 30.0, 30.0));
    state.select_all();

    let group = state.group_selection().unwrap();
    assert_eq!(state.layer_count(), 1);
    assert!(state.layers()[0].is_group());
    assert_eq!(state.layers()[0].id, group);

    state.ungroup_selection();
    assert_eq!(order(&state), vec![a.clone(), b.clone()]);
    assert!(state.layers().iter().all(|l| !l.is_group()));
    let pa = state.layer(&a).unwrap();
    let pb = state.layer(&b).unwrap();
    assert_eq!((pa.x, pa.y), (10.0, 10.0));
    assert_eq!((pb.x, pb.y), (50.0, 50.0));
}

#[test]
fn test_moving_group_moves_children_on_ungroup() {
    let mut state = DesignerState::new();
    let a = state.add_layer(Layer::rect_at(10.0, 10.0, 30.0, 30.0));
    state.add_layer(Layer::rect_at(50.0, 50.0, 30.0, 30.0));
    state.select_all();
    let group = state.group_selection().unwrap();

    state.move_layer(&group, 5.0, 5.0);
    state.ungroup_selection();
    let pa = state.layer(&a).unwrap();
    assert_eq!((pa.x, pa.y), (15.0, 15.0));
}

#[test]
fn test_selecting_child_selects_group() {
    let mut state = DesignerState::new();
    let a = state.add_rect();
    state.add_text();
    state.select_all();
    let group = state.group_selection().unwrap();

    state.clear_selection();
    state.select(&a);
    assert_eq!(state.selected_ids(), &[group]);
}

#[test]
fn test_group_style_uses_topmost_member() {
    let mut state = DesignerState::new();
    let bottom = state.add_rect();
    let top = state.add_rect();
    state.update_layer(
        &top,
        LayerPatch::new().with_content(LayerKind::Rect(RectLayer {
            fill: "#ff0000".to_string(),
            ..RectLayer::default()
        })),
    );
    state.select(&bottom);
    state.add_to_selection(&top);
    let group = state.group_selection().unwrap();

    let style = state.layer(&group).unwrap().style().unwrap();
    assert_eq!(style.fill.as_deref(), Some("#ff0000"));
}

#[test]
fn test_group_non_adjacent_members() {
    let mut state = DesignerState::new();
    let a = state.add_rect();
    let b = state.add_text();
    let c = state.add_line();
    let d = state.add_ellipse();
    state.select(&a);
    state.add_to_selection(&c);

    let group = state.group_selection().unwrap();
    assert_eq!(order(&state), vec![b.clone(), group, d.clone()]);

    state.undo();
    assert_eq!(order(&state), vec![a, b, c, d]);
}

#[test]
fn test_multi_select_bring_forward_clamps() {
    let mut state = DesignerState::new();
    let a = state.add_rect();
    let b = state.add_text();
    let c = state.add_line();
    state.select(&a);
    state.add_to_selection(&c);

    state.bring_forward();
    assert_eq!(order(&state), vec![b.clone(), a.clone(), c.clone()]);

    state.bring_forward();
    assert_eq!(order(&state), vec![b, a, c]);
}

#[test]
fn test_send_backward_block() {
    let mut state = DesignerState::new();
    let a = state.add_rect();
    let b = state.add_text();
    let c = state.add_line();
    state.select(&b);
    state.add_to_selection(&c);

    state.send_backward();
    assert_eq!(order(&state), vec![b.clone(), c.clone(), a.clone()]);
    assert_eq!(state.history().last().unwrap().label(), "SEND_BACKWARD");

    state.undo();
    assert_eq!(order(&state), vec![a, b, c]);
}
