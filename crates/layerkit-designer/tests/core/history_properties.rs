use layerkit_designer::{DesignerState, Layer, LayerPatch};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    AddRect,
    AddText,
    AddSized(f64, f64, f64),
    Move(usize, f64, f64),
    Select(usize),
    SelectAll,
    Delete,
    Forward,
    Backward,
    Reorder(usize, usize),
    Group,
    Ungroup,
    AlignLeft,
    AlignMiddle,
    DistributeHorizontal,
    Lock(usize),
    Rename(usize),
    Paste,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::AddRect),
        Just(Op::AddText),
        (0.0f64..500.0, 0.0f64..500.0, 1.0f64..120.0).prop_map(|(x, y, w)| Op::AddSized(x, y, w)),
        (0usize..8, -40.0f64..40.0, -40.0f64..40.0).prop_map(|(i, dx, dy)| Op::Move(i, dx, dy)),
        (0usize..8).prop_map(Op::Select),
        Just(Op::SelectAll),
        Just(Op::Delete),
        Just(Op::Forward),
        Just(Op::Backward),
        (0usize..8, 0usize..8).prop_map(|(a, b)| Op::Reorder(a, b)),
        Just(Op::Group),
        Just(Op::Ungroup),
        Just(Op::AlignLeft),
        Just(Op::AlignMiddle),
        Just(Op::DistributeHorizontal),
        (0usize..8).prop_map(Op::Lock),
        (0usize..8).prop_map(Op::Rename),
        Just(Op::Paste),
    ]
}

fn nth_id(state: &DesignerState, i: usize) -> Option<layerkit_designer::LayerId> {
    let len = state.layer_count();
    (len > 0).then(|| state.layers()[i % len].id.clone())
}

fn run(state: &mut DesignerState, op: &Op) {
    match op {
        Op::AddRect => {
            state.add_rect();
        }
        Op::AddText => {
            state.add_text();
        }
        Op::AddSized(x, y, w) => {
            state.add_layer(Layer::rect_at(*x, *y, *w, *w / 2.0));
        }
        Op::Move(i, dx, dy) => {
            if let Some(id) = nth_id(state, *i) {
                state.move_layer(&id, *dx, *dy);
            }
        }
        Op::Select(i) => {
            if let Some(id) = nth_id(state, *i) {
                state.add_to_selection(&id);
            }
        }
        Op::SelectAll => state.select_all(),
        Op::Delete => state.delete_selected(),
        Op::Forward => state.bring_forward(),
        Op::Backward => state.send_backward(),
        Op::Reorder(a, b) => state.reorder_layers(*a, *b),
        Op::Group => {
            state.group_selection();
        }
        Op::Ungroup => {
            state.ungroup_selection();
        }
        Op::AlignLeft => state.align_left(),
        Op::AlignMiddle => state.align_middle(),
        Op::DistributeHorizontal => state.distribute_horizontally(),
        Op::Lock(i) => {
            if let Some(id) = nth_id(state, *i) {
                state.lock_layer(&id);
            }
        }
        Op::Rename(i) => {
            if let Some(id) = nth_id(state, *i) {
                state.update_layer(&id, LayerPatch::new().with_name(format!("layer {i}")));
            }
        }
        Op::Paste => {
            state.copy_selected();
            state.paste();
        }
    }
}

proptest! {
    #[test]
    fn undo_is_a_true_inverse(script in prop::collection::vec(op(), 1..40)) {
        let mut state = DesignerState::new();
        let mut snapshots = vec![state.layers().to_vec()];
        for op in &script {
            let before = state.history_index();
            run(&mut state, op);
            if state.history_index() != before {
                snapshots.push(state.layers().to_vec());
            }
        }

        while state.can_undo() {
            snapshots.pop();
            state.undo();
            prop_assert_eq!(state.layers(), snapshots.last().unwrap().as_slice());
        }
        prop_assert!(state.layers().is_empty());
    }

    #[test]
    fn undo_then_redo_round_trips(script in prop::collection::vec(op(), 1..40)) {
        let mut state = DesignerState::new();
        for op in &script {
            run(&mut state, op);
        }
        let after = state.layers().to_vec();
        let recorded = state.history().len();

        for _ in 0..recorded {
            state.undo();
        }
        prop_assert!(state.layers().is_empty());
        for _ in 0..recorded {
            state.redo();
        }
        prop_assert_eq!(state.layers(), after.as_slice());
    }

    #[test]
    fn reseek_is_idempotent(script in prop::collection::vec(op(), 1..40), pick in 0usize..64) {
        let mut state = DesignerState::new();
        for op in &script {
            run(&mut state, op);
        }
        let len = state.history().len();
        let target = if len == 0 || pick % (len + 1) == len {
            None
        } else {
            Some(pick % (len + 1))
        };

        state.set_history_index(target);
        let first = state.layers().to_vec();
        state.set_history_index(target);
        prop_assert_eq!(state.layers(), first.as_slice());
    }

    #[test]
    fn replay_to_end_matches_live_state(script in prop::collection::vec(op(), 1..40)) {
        let mut state = DesignerState::new();
        for op in &script {
            run(&mut state, op);
        }
        let live = state.layers().to_vec();
        if let Some(last) = state.history().len().checked_sub(1) {
            state.set_history_index(Some(last));
        }
        prop_assert_eq!(state.layers(), live.as_slice());
    }

    #[test]
    fn ids_stay_unique(script in prop::collection::vec(op(), 1..40)) {
        let mut state = DesignerState::new();
        for op in &script {
            run(&mut state, op);
        }
        prop_assert!(layerkit_designer::model::find_duplicate_id(state.layers()).is_none());
    }
}
