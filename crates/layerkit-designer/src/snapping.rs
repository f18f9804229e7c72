//! Snap-on-drop and smart guide detection.

use crate::model::Layer;
use layerkit_core::{Bounds, GuideId, LayerId, Point};
use layerkit_settings::SnapSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// A horizontal line at a fixed `y`.
    Horizontal,
    /// A vertical line at a fixed `x`.
    Vertical,
}

/// A user-placed guide line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub id: GuideId,
    pub orientation: Orientation,
    pub position: f64,
}

impl Guide {
    pub fn new(orientation: Orientation, position: f64) -> Self {
        Self {
            id: GuideId::new(),
            orientation,
            position,
        }
    }
}

fn round_to_grid(value: f64, grid_size: f64) -> f64 {
    (value / grid_size).round() * grid_size
}

/// Nearest guide of `orientation` within `tolerance` of `value`.
fn nearest_guide(
    guides: &[Guide],
    orientation: Orientation,
    value: f64,
    tolerance: f64,
) -> Option<f64> {
    guides
        .iter()
        .filter(|g| g.orientation == orientation)
        .map(|g| (g.position, (g.position - value).abs()))
        .filter(|(_, distance)| *distance <= tolerance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(position, _)| position)
}

/// Corrects a proposed drop position.
///
/// Each axis is first rounded to the grid when grid snapping is on. Then a
/// guide within `guide_tolerance` of the proposed position overrides that
/// axis: vertical guides set `x`, horizontal guides set `y`.
pub fn snap_position(proposed: Point, settings: &SnapSettings, guides: &[Guide]) -> Point {
    let mut snapped = proposed;

    if settings.snap_to_grid && settings.grid_size > 0.0 {
        snapped.x = round_to_grid(proposed.x, settings.grid_size);
        snapped.y = round_to_grid(proposed.y, settings.grid_size);
    }

    if let Some(x) = nearest_guide(
        guides,
        Orientation::Vertical,
        proposed.x,
        settings.guide_tolerance,
    ) {
        snapped.x = x;
    }
    if let Some(y) = nearest_guide(
        guides,
        Orientation::Horizontal,
        proposed.y,
        settings.guide_tolerance,
    ) {
        snapped.y = y;
    }

    snapped
}

/// The edge pair a smart guide matched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub fn orientation(&self) -> Orientation {
        match self {
            Edge::Top | Edge::Bottom => Orientation::Horizontal,
            Edge::Left | Edge::Right => Orientation::Vertical,
        }
    }
}

/// An alignment hint between the dragged layer and another layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartGuide {
    /// The layer the dragged layer lines up with.
    pub target: LayerId,
    pub edge: Edge,
    /// Position of the target's edge on the guide axis.
    pub position: f64,
    /// Distance between the two boxes across the guide axis.
    pub gap: f64,
}

fn horizontal_gap(a: &Bounds, b: &Bounds) -> f64 {
    (b.min_x - a.max_x).max(a.min_x - b.max_x).max(0.0)
}

fn vertical_gap(a: &Bounds, b: &Bounds) -> f64 {
    (b.min_y - a.max_y).max(a.min_y - b.max_y).max(0.0)
}

/// Edge alignments between `dragging` and every other visible layer.
///
/// Edges whose difference is strictly below `threshold` are reported.
pub fn smart_guides(dragging: &Layer, others: &[Layer], threshold: f64) -> Vec<SmartGuide> {
    let d = dragging.bounds();
    let mut guides = Vec::new();

    for other in others {
        if other.id == dragging.id || !other.visible {
            continue;
        }
        let o = other.bounds();
        let candidates = [
            (Edge::Top, o.min_y, d.min_y),
            (Edge::Bottom, o.max_y, d.max_y),
            (Edge::Left, o.min_x, d.min_x),
            (Edge::Right, o.max_x, d.max_x),
        ];
        for (edge, target_edge, dragging_edge) in candidates {
            if (target_edge - dragging_edge).abs() < threshold {
                let gap = match edge.orientation() {
                    Orientation::Horizontal => horizontal_gap(&d, &o),
                    Orientation::Vertical => vertical_gap(&d, &o),
                };
                guides.push(SmartGuide {
                    target: other.id.clone(),
                    edge,
                    position: target_edge,
                    gap,
                });
            }
        }
    }
    guides
}
