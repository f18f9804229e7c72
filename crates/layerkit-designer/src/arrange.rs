//! Z-order moves and group folding.
//!
//! Z-order helpers plan a list of adjacent splice-moves over the top-level
//! sequence. Grouping helpers build or dissolve a group layer; the façade
//! records the resulting inserts and removals.

use crate::model::{GroupLayer, Layer, LayerKind, LayerPatch};
use layerkit_core::Bounds;

fn selection_mask(len: usize, selected: &[usize]) -> Vec<bool> {
    let mut mask = vec![false; len];
    for &index in selected {
        if index < len {
            mask[index] = true;
        }
    }
    mask
}

/// Moves that shift every selected index one step towards the end.
///
/// Each returned `(old, new)` pair is applied in order. A selected layer whose
/// upper neighbour is also selected (or which is already last) stays put, so
/// relative order within the selection is preserved.
pub fn forward_moves(len: usize, selected: &[usize]) -> Vec<(usize, usize)> {
    let mut mask = selection_mask(len, selected);
    let mut moves = Vec::new();
    for i in (0..len.saturating_sub(1)).rev() {
        if mask[i] && !mask[i + 1] {
            mask.swap(i, i + 1);
            moves.push((i, i + 1));
        }
    }
    moves
}

/// Moves that shift every selected index one step towards the start.
pub fn backward_moves(len: usize, selected: &[usize]) -> Vec<(usize, usize)> {
    let mut mask = selection_mask(len, selected);
    let mut moves = Vec::new();
    for i in 1..len {
        if mask[i] && !mask[i - 1] {
            mask.swap(i, i - 1);
            moves.push((i, i - 1));
        }
    }
    moves
}

/// Wraps `members` (in paint order) in a new group.
///
/// The group sits at the top-left corner of the members' union bounds and
/// the members are rebased to be relative to it.
pub fn build_group(members: Vec<Layer>) -> Layer {
    let origin = Bounds::union_all(members.iter().map(Layer::bounds))
        .map(|b| (b.min_x, b.min_y))
        .unwrap_or((0.0, 0.0));

    let children = members
        .into_iter()
        .map(|mut child| {
            child.translate(-origin.0, -origin.1);
            child
        })
        .collect();

    Layer::new(LayerKind::Group(GroupLayer::new(children)), origin.0, origin.1)
}

/// Patch that moves a group's origin back onto its children's top-left
/// corner without moving anything on the canvas.
///
/// `None` when `layer` is not a group, is empty, or is already normalised.
pub fn normalized_origin(layer: &Layer) -> Option<LayerPatch> {
    let LayerKind::Group(group) = &layer.kind else {
        return None;
    };
    let local = group.local_bounds()?;
    if local.min_x == 0.0 && local.min_y == 0.0 {
        return None;
    }

    let mut rebased = group.clone();
    for child in &mut rebased.layers {
        child.translate(-local.min_x, -local.min_y);
    }
    Some(
        LayerPatch::position(
            layer.x + local.min_x * layer.scale_x,
            layer.y + local.min_y * layer.scale_y,
        )
        .with_content(LayerKind::Group(rebased)),
    )
}

/// Normalises every group in the tree rooted at `layer`, innermost first.
pub fn normalize_groups(layer: &mut Layer) {
    if let LayerKind::Group(group) = &mut layer.kind {
        group.layers.iter_mut().for_each(normalize_groups);
    }
    if let Some(fix) = normalized_origin(layer) {
        fix.apply(layer);
    }
}

/// Children of `group` with coordinates rebased to the group's parent space.
///
/// Group rotation and scale are not folded into the children.
pub fn ungroup_children(group: &Layer) -> Option<Vec<Layer>> {
    let children = group.children()?;
    Some(
        children
            .iter()
            .cloned()
            .map(|mut child| {
                child.translate(group.x, group.y);
                child
            })
            .collect(),
    )
}
