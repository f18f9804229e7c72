//! Alignment, distribution and bounding-box math over a set of layers.
//!
//! Everything here is pure: functions take the layers to operate on and
//! return per-layer translation deltas. Callers turn the deltas into
//! recorded updates.

use crate::model::Layer;
use layerkit_core::{Bounds, LayerId};

/// Minimum number of layers for an alignment to do anything.
pub const MIN_ALIGN_COUNT: usize = 2;
/// Minimum number of layers for a distribution to do anything.
pub const MIN_DISTRIBUTE_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Top,
    Bottom,
    /// Horizontal centers
    Center,
    /// Vertical centers
    Middle,
}

impl Alignment {
    /// History label for the alignment.
    pub fn label(&self) -> &'static str {
        match self {
            Alignment::Left => "ALIGN_LEFT",
            Alignment::Right => "ALIGN_RIGHT",
            Alignment::Top => "ALIGN_TOP",
            Alignment::Bottom => "ALIGN_BOTTOM",
            Alignment::Center => "ALIGN_CENTER",
            Alignment::Middle => "ALIGN_MIDDLE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    Horizontal,
    Vertical,
}

impl Distribution {
    pub fn label(&self) -> &'static str {
        match self {
            Distribution::Horizontal => "DISTRIBUTE_HORIZONTAL",
            Distribution::Vertical => "DISTRIBUTE_VERTICAL",
        }
    }
}

/// Union of the bounds of `layers`, or `None` for an empty set.
pub fn selection_bounds(layers: &[&Layer]) -> Option<Bounds> {
    Bounds::union_all(layers.iter().map(|l| l.bounds()))
}

/// Computes the translation each layer needs for `alignment`.
///
/// Returns `(id, dx, dy)` for every layer that moves. Fewer than
/// [`MIN_ALIGN_COUNT`] layers yields no deltas.
pub fn alignment_deltas(layers: &[&Layer], alignment: Alignment) -> Vec<(LayerId, f64, f64)> {
    if layers.len() < MIN_ALIGN_COUNT {
        return Vec::new();
    }

    let bounds: Vec<Bounds> = layers.iter().map(|l| l.bounds()).collect();
    let Some(union) = Bounds::union_all(bounds.iter().copied()) else {
        return Vec::new();
    };

    // 1. Calculate target value
    let target = match alignment {
        Alignment::Left => union.min_x,
        Alignment::Right => union.max_x,
        Alignment::Top => union.min_y,
        Alignment::Bottom => union.max_y,
        Alignment::Center => union.center().x,
        Alignment::Middle => union.center().y,
    };

    // 2. Move each layer onto it
    let mut deltas = Vec::new();
    for (layer, b) in layers.iter().zip(&bounds) {
        let (dx, dy) = match alignment {
            Alignment::Left => (target - b.min_x, 0.0),
            Alignment::Right => (target - b.max_x, 0.0),
            Alignment::Top => (0.0, target - b.min_y),
            Alignment::Bottom => (0.0, target - b.max_y),
            Alignment::Center => (target - b.center().x, 0.0),
            Alignment::Middle => (0.0, target - b.center().y),
        };
        if dx != 0.0 || dy != 0.0 {
            deltas.push((layer.id.clone(), dx, dy));
        }
    }
    deltas
}

/// Computes the translation each layer needs to leave equal gaps along `axis`.
///
/// Layers are ordered by their start on the axis. The free space between the
/// first start and the furthest end is split evenly between neighbours, so
/// the gaps are equal rather than the center-to-center spacing. Fewer than
/// [`MIN_DISTRIBUTE_COUNT`] layers yields no deltas.
pub fn distribution_deltas(layers: &[&Layer], axis: Distribution) -> Vec<(LayerId, f64, f64)> {
    if layers.len() < MIN_DISTRIBUTE_COUNT {
        return Vec::new();
    }

    let span = |b: &Bounds| match axis {
        Distribution::Horizontal => (b.min_x, b.max_x),
        Distribution::Vertical => (b.min_y, b.max_y),
    };

    let mut sorted: Vec<(&Layer, f64, f64)> = layers
        .iter()
        .map(|l| {
            let (start, end) = span(&l.bounds());
            (*l, start, end)
        })
        .collect();
    sorted.sort_by(|a, b| a.1.total_cmp(&b.1));

    let first = sorted[0].1;
    let last = sorted
        .iter()
        .map(|(_, _, end)| *end)
        .fold(f64::NEG_INFINITY, f64::max);
    let occupied: f64 = sorted.iter().map(|(_, start, end)| end - start).sum();
    let spacing = (last - first - occupied) / (sorted.len() - 1) as f64;

    let mut deltas = Vec::new();
    let mut cursor = first;
    for (layer, start, end) in sorted {
        let delta = cursor - start;
        if delta != 0.0 {
            match axis {
                Distribution::Horizontal => deltas.push((layer.id.clone(), delta, 0.0)),
                Distribution::Vertical => deltas.push((layer.id.clone(), 0.0, delta)),
            }
        }
        cursor += (end - start) + spacing;
    }
    deltas
}
