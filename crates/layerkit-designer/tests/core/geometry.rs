use layerkit_designer::{DesignerState, Layer, LayerPatch};

fn xs(state: &DesignerState) -> Vec<f64> {
    state.layers().iter().map(|l| l.x).collect()
}

#[test]
fn test_align_left_uses_minimum_x() {
    let mut state = DesignerState::new();
    state.add_layer(Layer::rect_at(120.0, 10.0, 30.0, 30.0));
    state.add_layer(Layer::rect_at(45.0, 80.0, 60.0, 10.0));
    state.add_layer(Layer::rect_at(300.0, 5.0, 10.0, 70.0));
    state.select_all();

    state.align_left();
    assert_eq!(xs(&state), vec![45.0, 45.0, 45.0]);
}

#[test]
fn test_align_right_and_center() {
    let mut state = DesignerState::new();
    state.add_layer(Layer::rect_at(0.0, 0.0, 100.0, 10.0));
    state.add_layer(Layer::rect_at(10.0, 20.0, 20.0, 10.0));
    state.select_all();

    state.align_right();
    assert_eq!(xs(&state), vec![0.0, 80.0]);

    state.align_center();
    assert_eq!(xs(&state), vec![0.0, 40.0]);
}

#[test]
fn test_align_top_bottom_middle() {
    let mut state = DesignerState::new();
    let a = state.add_layer(Layer::rect_at(0.0, 10.0, 10.0, 40.0));
    let b = state.add_layer(Layer::rect_at(0.0, 70.0, 10.0, 20.0));
    state.select_all();

    state.align_top();
    assert_eq!(state.layer(&b).unwrap().y, 10.0);

    state.align_bottom();
    assert_eq!(state.layer(&b).unwrap().y, 30.0);
    assert_eq!(state.layer(&a).unwrap().y, 10.0);

    state.align_middle();
    assert_eq!(state.layer(&b).unwrap().y, 20.0);
}

#[test]
fn test_distribute_three_equal_widths() {
    let mut state = DesignerState::new();
    let left = state.add_layer(Layer::rect_at(0.0, 0.0, 50.0, 50.0));
    let middle = state.add_layer(Layer::rect_at(180.0, 0.0, 50.0, 50.0));
    let right = state.add_layer(Layer::rect_at(250.0, 0.0, 50.0, 50.0));
    state.select_all();

    state.distribute_horizontally();
    let l = state.layer(&left).unwrap().bounds();
    let m = state.layer(&middle).unwrap().bounds();
    let r = state.layer(&right).unwrap().bounds();

    assert!(l.min_x < m.min_x && m.min_x < r.min_x);
    let gap1 = m.min_x - l.max_x;
    let gap2 = r.min_x - m.max_x;
    assert_eq!(gap1, gap2);
    assert_eq!(gap1 + gap2, 300.0 - 0.0 - 150.0);
    assert_eq!((l.min_x, r.max_x), (0.0, 300.0));
}

#[test]
fn test_distribute_vertical_unsorted_selection() {
    let mut state = DesignerState::new();
    let bottom = state.add_layer(Layer::rect_at(0.0, 200.0, 10.0, 20.0));
    let top = state.add_layer(Layer::rect_at(0.0, 0.0, 10.0, 20.0));
    let mid = state.add_layer(Layer::rect_at(0.0, 30.0, 10.0, 20.0));
    state.select(&bottom);
    state.add_to_selection(&top);
    state.add_to_selection(&mid);

    state.distribute_vertically();
    assert_eq!(state.layer(&top).unwrap().y, 0.0);
    assert_eq!(state.layer(&mid).unwrap().y, 100.0);
    assert_eq!(state.layer(&bottom).unwrap().y, 200.0);
}

#[test]
fn test_lines_count_as_zero_extent() {
    let mut state = DesignerState::new();
    let mut short = Layer::line();
    short.x = 10.0;
    let line = state.add_layer(short);
    state.add_layer(Layer::rect_at(40.0, 0.0, 20.0, 20.0));
    state.select_all();

    state.align_right();
    assert_eq!(state.layer(&line).unwrap().x, 60.0);
}

#[test]
fn test_alignment_undo_restores_every_layer() {
    let mut state = DesignerState::new();
    state.add_layer(Layer::rect_at(120.0, 10.0, 30.0, 30.0));
    state.add_layer(Layer::rect_at(45.0, 80.0, 60.0, 10.0));
    state.add_layer(Layer::rect_at(300.0, 5.0, 10.0, 70.0));
    let before = state.layers().to_vec();
    state.select_all();

    state.align_center();
    state.undo();
    assert_eq!(state.layers(), before.as_slice());
}

#[test]
fn test_align_left_after_nested_child_edit() {
    let mut state = DesignerState::new();
    let a = state.add_layer(Layer::rect_at(10.0, 10.0, 30.0, 30.0));
    state.add_layer(Layer::rect_at(50.0, 50.0, 30.0, 30.0));
    state.select_all();
    let group = state.group_selection().unwrap();

    assert!(state.update_layer(&a, LayerPatch::new().with_x(-5.0)));
    let g = state.layer(&group).unwrap();
    assert_eq!(g.x, 5.0);
    assert_eq!(g.bounds().min_x, g.x);
    assert_eq!(state.history().last().unwrap().label(), "UPDATE_LAYER");

    let rect = state.add_layer(Layer::rect_at(0.0, 0.0, 20.0, 20.0));
    state.select(&group);
    state.add_to_selection(&rect);
    state.align_left();
    assert_eq!(state.layer(&group).unwrap().x, 0.0);
    assert_eq!(state.layer(&rect).unwrap().x, 0.0);

    state.undo();
    state.undo();
    state.undo();
    assert_eq!(state.layer(&group).unwrap().x, 10.0);
    assert_eq!(state.layer(&a).unwrap().x, 0.0);
}
